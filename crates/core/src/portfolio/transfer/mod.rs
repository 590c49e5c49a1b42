//! Transfer module - portable portfolio documents and the JSON/CSV
//! codecs that read and write them.

mod csv_codec;
mod json_codec;
mod transfer_model;


// Re-export the public interface
pub use csv_codec::{export_csv, import_csv, CSV_HEADERS};
pub use json_codec::{export_json, import_json};
pub use transfer_model::{export_file_name, ImportError, PortfolioExport};
