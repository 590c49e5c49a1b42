//! CSV portfolio roster codec.
//!
//! Fixed six-column schema. Exports carry a UTF-8 BOM so Excel opens
//! them with the right encoding; import strips it again. Import is
//! forgiving at the row level (wrong-width rows are skipped, blank
//! cells get defaults) but rejects files with no usable weights.

use chrono::Utc;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{PORTFOLIO_EXPORT_VERSION, WEIGHT_DECIMAL_PRECISION};
use crate::errors::{Error, Result};
use crate::portfolio::companies::{weights, PortfolioCompany};

use super::transfer_model::{ImportError, PortfolioExport};

/// Column order of the portfolio CSV schema.
pub const CSV_HEADERS: [&str; 6] = [
    "Company ID",
    "Company Name",
    "Sector",
    "Weight (%)",
    "Stock Tickers",
    "ISIN Codes",
];

const UTF8_BOM: char = '\u{feff}';

/// Serializes holdings to CSV, one row per company, BOM-prefixed.
pub fn export_csv(companies: &[PortfolioCompany]) -> Result<String> {
    debug!("Exporting {} companies as CSV", companies.len());

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for company in companies {
        let weight = company.weight.to_string();
        let tickers = company.stock_tickers.join(", ");
        let isins = company.isin_codes.join(", ");
        writer.write_record([
            company.id.as_str(),
            company.name.as_str(),
            company.sector.as_deref().unwrap_or(""),
            weight.as_str(),
            tickers.as_str(),
            isins.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Unexpected(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| Error::Unexpected(e.to_string()))?;
    Ok(format!("{}{}", UTF8_BOM, body))
}

/// Parses a portfolio roster CSV into an import document.
///
/// `file_name` only feeds the generated portfolio name.
pub fn import_csv(
    content: &str,
    file_name: &str,
) -> std::result::Result<PortfolioExport, ImportError> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records: Vec<StringRecord> = Vec::new();
    for record in reader.records() {
        records.push(record.map_err(|_| ImportError::CsvInvalid)?);
    }

    if records.len() < 2 {
        return Err(ImportError::CsvTooShort);
    }

    if records[0].len() != CSV_HEADERS.len() {
        return Err(ImportError::CsvColumnCount {
            expected: CSV_HEADERS.len(),
            found: records[0].len(),
        });
    }

    let companies: Vec<PortfolioCompany> = records[1..]
        .iter()
        .filter(|record| record.len() == CSV_HEADERS.len())
        .enumerate()
        .map(|(index, record)| row_to_company(index, record))
        .collect();

    if companies.is_empty() {
        return Err(ImportError::NoValidRows);
    }

    if weights::total_weight(&companies).is_zero() {
        return Err(ImportError::NoValidWeights);
    }

    debug!(
        "Imported {} companies from CSV file '{}'",
        companies.len(),
        file_name
    );

    Ok(PortfolioExport {
        version: PORTFOLIO_EXPORT_VERSION.to_string(),
        name: format!("Imported Portfolio from {}", file_name),
        description: Some(format!(
            "Portfolio imported from CSV with {} companies",
            companies.len()
        )),
        created_at: Some(Utc::now()),
        selected_company_ids: companies.iter().map(|c| c.id.clone()).collect(),
        companies,
        use_equal_weights: false,
    })
}

fn row_to_company(index: usize, record: &StringRecord) -> PortfolioCompany {
    let cell = |i: usize| record.get(i).unwrap_or_default();

    let id = match cell(0) {
        "" => format!("imported-{}", index),
        id => id.to_string(),
    };
    let name = match cell(1) {
        "" => format!("Company {}", index + 1),
        name => name.to_string(),
    };
    let sector = match cell(2) {
        "" => None,
        sector => Some(sector.to_string()),
    };
    let weight = cell(3)
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(WEIGHT_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);

    PortfolioCompany {
        id,
        name,
        sector,
        stock_tickers: split_list(cell(4)),
        isin_codes: split_list(cell(5)),
        weight,
    }
}

fn split_list(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(',').map(|part| part.trim().to_string()).collect()
}
