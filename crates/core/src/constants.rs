/// State store key for the persisted company list
pub const PORTFOLIO_COMPANIES_KEY: &str = "portfolio-companies";

/// State store key for the equal-weight toggle
pub const PORTFOLIO_USE_EQUAL_WEIGHTS_KEY: &str = "portfolio-use-equal-weights";

/// State store key for the selected company ids
pub const PORTFOLIO_SELECTED_COMPANY_IDS_KEY: &str = "portfolio-selected-company-ids";

/// Decimal precision for portfolio weights
pub const WEIGHT_DECIMAL_PRECISION: u32 = 2;

/// Score above which a bucket is high risk
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;

/// Score above which a bucket is medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.3;

/// HHI below which risk concentration is low
pub const HHI_LOW_THRESHOLD: f64 = 0.15;

/// HHI below which risk concentration is moderate
pub const HHI_MODERATE_THRESHOLD: f64 = 0.25;

/// Metric value assumed for a company whose score record carries no
/// usable metric field
pub const FALLBACK_METRIC_VALUE: f64 = 0.1;

/// Sector label for companies without a sector
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Display name for companies without a name
pub const UNKNOWN_COMPANY_NAME: &str = "Unknown Company";

/// Format version written into portfolio export documents
pub const PORTFOLIO_EXPORT_VERSION: &str = "1.0";

/// Portfolio name used when the caller does not supply one
pub const DEFAULT_PORTFOLIO_NAME: &str = "My Portfolio";
