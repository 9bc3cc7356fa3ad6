//! Input file loading and parsing
//!
//! The input file is TOML with two optional sections:
//!
//! ```toml
//! [company]
//! name = "Eksempel ApS"
//! industry = "Produktion"
//! report_year = "2025"
//!
//! [usage]
//! electricity_kwh = 1000.0
//! gas_m3 = 500.0
//! ```
//!
//! Missing keys fall back to the company defaults and zero usage.

use anyhow::{Context, Result};
use klimaklar_core::{Category, CompanyInfo, UsageInput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of an input file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputFile {
    pub company: CompanyInfo,
    pub usage: UsageInput,
}

impl InputFile {
    /// Apply values given on the command line on top of the file contents
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(name) = &overrides.company {
            self.company.name = name.clone();
        }
        if let Some(industry) = &overrides.industry {
            self.company.industry = industry.clone();
        }
        if let Some(year) = &overrides.report_year {
            self.company.report_year = year.clone();
        }
        for (category, value) in &overrides.usage {
            log::debug!("Override {} = {}", category.field_name(), value);
            *self.usage.quantity_mut(*category) = *value;
        }
    }
}

/// Values passed as command-line flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub company: Option<String>,
    pub industry: Option<String>,
    pub report_year: Option<String>,
    pub usage: Vec<(Category, f64)>,
}

/// Load an input file from disk
pub fn load_input_file(path: &Path) -> Result<InputFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;

    let input: InputFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse input file: {:?}", path))?;

    input
        .usage
        .validate()
        .with_context(|| format!("Invalid usage figures in {:?}", path))?;

    Ok(input)
}
