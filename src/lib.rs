//! tabconv - Bidirectional converter between XLSX workbooks and delimited text
//!
//! This crate converts spreadsheet containers (zip-based workbooks such as XLSX)
//! to delimited text (CSV/TSV) and delimited text back to XLSX. The direction is
//! chosen per file by sniffing the zip local-file-header signature.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabconv::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Tab-separated output into the current directory
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // report.xlsx -> ./<sheet>.csv (or ./report/<sheet>.csv for several sheets)
//!     converter.convert("report.xlsx")?;
//!
//!     // data.tsv -> ./data.xlsx
//!     converter.convert("data.tsv")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use tabconv::{CollisionPolicy, ConverterBuilder, DateFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_output_dir("/tmp/out")
//!         .with_delimiter(';')
//!         .with_date_format(DateFormat::Custom("%d.%m.%Y".to_string()))
//!         .with_collision_policy(CollisionPolicy::Reject)
//!         .build()?;
//!
//!     let report = converter.convert("sales.xlsx")?;
//!     println!("{}: {} file(s)", report.direction, report.outputs.len());
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod error;
mod formatter;
mod output;
mod parser;
pub mod paths;
mod security;
pub mod sniff;
mod types;

// 公開API
pub use api::{CollisionPolicy, DateFormat};
pub use builder::{Converter, ConverterBuilder};
pub use error::{ResultExt, TabconvError};
pub use sniff::Format;
pub use types::{ConversionReport, Direction};
