//! Klimaklar Core Library
//!
//! CO2 footprint calculation and reporting for small businesses. Yearly
//! resource usage (electricity, gas, vehicle distance, material mass) is
//! multiplied by fixed emission factors and summed; the result is exported
//! as CSV and as a PDF report.
//!
//! # Architecture
//!
//! This library holds everything except the input surface:
//! - Fixed emission factor table and category metadata
//! - Pure, infallible calculator
//! - CSV exporter and PDF report formatter
//! - A [`Session`] owning the most recent result
//!
//! Collecting and validating user input, showing the summary and saving
//! files is the application layer's job (klimaklar-cli).
//!
//! # Example Usage
//!
//! ```
//! use klimaklar_core::{Category, CompanyInfo, Session, UsageInput};
//!
//! let input = UsageInput::new()
//!     .with_quantity(Category::Electricity, 1000.0)
//!     .with_quantity(Category::Gas, 500.0);
//! input.validate().unwrap();
//!
//! let mut session = Session::new();
//! assert!(session.csv_export().is_none());
//!
//! let result = session.calculate(input);
//! assert_eq!(result.total(), 1333.0);
//!
//! let csv = session.csv_export().unwrap();
//! assert_eq!(csv.file_name, "klimadata.csv");
//! ```

// Public modules
pub mod calculator;
pub mod export;
pub mod factors;
pub mod report;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use calculator::{Breakdown, EmissionCalculator, EmissionResult};
pub use export::{Artifact, CsvExporter};
pub use factors::{Category, CategoryGroup};
pub use report::{material_share, MaterialShare, ReportFormatter, ReportMetadata};
pub use session::Session;
pub use types::{CompanyInfo, KlimaError, Result, UsageInput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
