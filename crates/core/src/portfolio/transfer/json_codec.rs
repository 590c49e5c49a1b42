//! JSON portfolio document codec.
//!
//! Import validates the raw document structurally before
//! deserializing, so a malformed file always surfaces one of the
//! stable [`ImportError`] messages instead of a serde parse error.

use log::debug;
use serde_json::Value;

use crate::errors::Result;

use super::transfer_model::{ImportError, PortfolioExport};

/// Serializes an export document, pretty-printed so exported files are
/// readable by hand.
pub fn export_json(export: &PortfolioExport) -> Result<String> {
    debug!(
        "Exporting portfolio '{}' with {} companies as JSON",
        export.name,
        export.companies.len()
    );
    Ok(serde_json::to_string_pretty(export)?)
}

/// Parses and validates a portfolio document.
pub fn import_json(content: &str) -> std::result::Result<PortfolioExport, ImportError> {
    let value: Value = serde_json::from_str(content).map_err(|_| ImportError::InvalidJson)?;
    validate(&value)?;
    serde_json::from_value(value).map_err(|_| ImportError::InvalidFormat)
}

/// Checks the fields the document format requires, in a fixed order so
/// the first problem wins deterministically.
fn validate(value: &Value) -> std::result::Result<(), ImportError> {
    if !(value.is_object() || value.is_array()) {
        return Err(ImportError::InvalidFormat);
    }

    if !non_empty_str(value, "version") {
        return Err(ImportError::MissingVersion);
    }

    let companies = match value.get("companies").and_then(Value::as_array) {
        Some(companies) => companies,
        None => return Err(ImportError::MissingCompanies),
    };

    if value.get("useEqualWeights").and_then(Value::as_bool).is_none() {
        return Err(ImportError::MissingEqualWeightsFlag);
    }

    if value
        .get("selectedCompanyIds")
        .and_then(Value::as_array)
        .is_none()
    {
        return Err(ImportError::MissingSelectedIds);
    }

    for company in companies {
        if !non_empty_str(company, "id") {
            return Err(ImportError::InvalidCompanyId);
        }

        match company.get("weight").and_then(Value::as_f64) {
            Some(weight) if (0.0..=100.0).contains(&weight) => {}
            _ => return Err(ImportError::InvalidCompanyWeight),
        }

        if !non_empty_str(company, "name") {
            return Err(ImportError::InvalidCompanyName);
        }
    }

    Ok(())
}

fn non_empty_str(value: &Value, field: &str) -> bool {
    match value.get(field).and_then(Value::as_str) {
        Some(text) => !text.is_empty(),
        None => false,
    }
}
