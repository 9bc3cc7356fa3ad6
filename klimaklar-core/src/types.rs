//! Core types for the Klimaklar library
//!
//! This module defines the input snapshot handed over by the input surface,
//! the company metadata printed on the report, and the error type shared by
//! the rest of the library.

use crate::factors::Category;
use serde::{Deserialize, Serialize};

/// Result type for library operations
pub type Result<T> = std::result::Result<T, KlimaError>;

/// Errors that can occur while preparing input or writing artifacts
#[derive(Debug, thiserror::Error)]
pub enum KlimaError {
    #[error("Invalid value for {field}: {value} (must be a finite, non-negative number)")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Yearly resource usage as entered by the user
///
/// Every quantity is in the unit of its emission factor (kWh, m³, km or kg)
/// and defaults to zero when absent. The calculator assumes the snapshot has
/// passed [`UsageInput::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageInput {
    /// Electricity consumption (kWh per year)
    pub electricity_kwh: f64,
    /// Natural gas consumption (m³ per year)
    pub gas_m3: f64,
    /// Distance driven by vans (km per year)
    pub van_km: f64,
    /// Distance driven by trucks (km per year)
    pub truck_km: f64,
    /// Steel used (kg per year)
    pub steel_kg: f64,
    /// Wood used (kg per year)
    pub wood_kg: f64,
    /// Plastic used (kg per year)
    pub plastic_kg: f64,
    /// Concrete used (kg per year)
    pub concrete_kg: f64,
    /// Aluminium used (kg per year)
    pub aluminium_kg: f64,
    /// Paper and cardboard used (kg per year)
    pub paper_kg: f64,
}

impl UsageInput {
    /// Create an input with every quantity set to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the quantity entered for a category
    pub fn quantity(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.electricity_kwh,
            Category::Gas => self.gas_m3,
            Category::Van => self.van_km,
            Category::Truck => self.truck_km,
            Category::Steel => self.steel_kg,
            Category::Wood => self.wood_kg,
            Category::Plastic => self.plastic_kg,
            Category::Concrete => self.concrete_kg,
            Category::Aluminium => self.aluminium_kg,
            Category::Paper => self.paper_kg,
        }
    }

    /// Mutable access to the quantity for a category
    pub fn quantity_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Electricity => &mut self.electricity_kwh,
            Category::Gas => &mut self.gas_m3,
            Category::Van => &mut self.van_km,
            Category::Truck => &mut self.truck_km,
            Category::Steel => &mut self.steel_kg,
            Category::Wood => &mut self.wood_kg,
            Category::Plastic => &mut self.plastic_kg,
            Category::Concrete => &mut self.concrete_kg,
            Category::Aluminium => &mut self.aluminium_kg,
            Category::Paper => &mut self.paper_kg,
        }
    }

    /// Builder method: set the quantity for a category
    pub fn with_quantity(mut self, category: Category, value: f64) -> Self {
        *self.quantity_mut(category) = value;
        self
    }

    /// Check that every quantity is finite and non-negative
    ///
    /// Returns the first offending field in canonical category order.
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            let value = self.quantity(category);
            if !value.is_finite() || value < 0.0 {
                return Err(KlimaError::InvalidInput {
                    field: category.field_name(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Company details printed in the report's metadata block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// Company name
    pub name: String,
    /// Industry / line of business
    pub industry: String,
    /// Reporting year, kept as free text
    pub report_year: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Eksempel ApS".to_string(),
            industry: "Produktion".to_string(),
            report_year: "2025".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_zero() {
        let input = UsageInput::new();
        for category in Category::ALL {
            assert_eq!(input.quantity(category), 0.0);
        }
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_with_quantity_builder() {
        let input = UsageInput::new()
            .with_quantity(Category::Electricity, 1000.0)
            .with_quantity(Category::Paper, 12.5);

        assert_eq!(input.electricity_kwh, 1000.0);
        assert_eq!(input.paper_kg, 12.5);
        assert_eq!(input.gas_m3, 0.0);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let input = UsageInput::new().with_quantity(Category::Truck, -1.0);
        match input.validate() {
            Err(KlimaError::InvalidInput { field, value }) => {
                assert_eq!(field, "truck_km");
                assert_eq!(value, -1.0);
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let input = UsageInput::new().with_quantity(Category::Steel, f64::NAN);
        assert!(input.validate().is_err());

        let input = UsageInput::new().with_quantity(Category::Gas, f64::INFINITY);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_io_error_conversion() {
        let err: KlimaError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, KlimaError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: disk full");
    }

    #[test]
    fn test_company_defaults() {
        let company = CompanyInfo::default();
        assert_eq!(company.name, "Eksempel ApS");
        assert_eq!(company.industry, "Produktion");
        assert_eq!(company.report_year, "2025");
    }
}
