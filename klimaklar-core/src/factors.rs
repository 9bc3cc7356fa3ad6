//! Emission factor table
//!
//! Fixed conversion factors from physical quantities to kg CO2e. The table is
//! a compile-time constant; there is no mechanism for overriding or
//! versioning it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// kg CO2e per kWh of electricity
pub const FACTOR_ELECTRICITY: f64 = 0.233;
/// kg CO2e per m³ of natural gas
pub const FACTOR_GAS: f64 = 2.2;
/// kg CO2e per km driven by van
pub const FACTOR_VAN: f64 = 0.180;
/// kg CO2e per km driven by truck
pub const FACTOR_TRUCK: f64 = 0.500;
/// kg CO2e per kg of steel
pub const FACTOR_STEEL: f64 = 1.9;
/// kg CO2e per kg of wood
pub const FACTOR_WOOD: f64 = 0.2;
/// kg CO2e per kg of plastic
pub const FACTOR_PLASTIC: f64 = 3.0;
/// kg CO2e per kg of concrete
pub const FACTOR_CONCRETE: f64 = 0.1;
/// kg CO2e per kg of aluminium
pub const FACTOR_ALUMINIUM: f64 = 8.0;
/// kg CO2e per kg of paper and cardboard
pub const FACTOR_PAPER: f64 = 1.0;

/// One emission category
///
/// The declaration order is the canonical order used by the CSV export and
/// the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electricity,
    Gas,
    Van,
    Truck,
    Steel,
    Wood,
    Plastic,
    Concrete,
    Aluminium,
    Paper,
}

/// Summary grouping used for the three-way breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    Energy,
    Transport,
    Materials,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 10] = [
        Category::Electricity,
        Category::Gas,
        Category::Van,
        Category::Truck,
        Category::Steel,
        Category::Wood,
        Category::Plastic,
        Category::Concrete,
        Category::Aluminium,
        Category::Paper,
    ];

    /// The six material categories in canonical order
    pub const MATERIALS: [Category; 6] = [
        Category::Steel,
        Category::Wood,
        Category::Plastic,
        Category::Concrete,
        Category::Aluminium,
        Category::Paper,
    ];

    /// Emission factor in kg CO2e per unit
    pub fn factor(self) -> f64 {
        match self {
            Category::Electricity => FACTOR_ELECTRICITY,
            Category::Gas => FACTOR_GAS,
            Category::Van => FACTOR_VAN,
            Category::Truck => FACTOR_TRUCK,
            Category::Steel => FACTOR_STEEL,
            Category::Wood => FACTOR_WOOD,
            Category::Plastic => FACTOR_PLASTIC,
            Category::Concrete => FACTOR_CONCRETE,
            Category::Aluminium => FACTOR_ALUMINIUM,
            Category::Paper => FACTOR_PAPER,
        }
    }

    /// Danish label used in exports and the report
    pub fn label(self) -> &'static str {
        match self {
            Category::Electricity => "El",
            Category::Gas => "Gas",
            Category::Van => "Varebil",
            Category::Truck => "Lastbil",
            Category::Steel => "Stål",
            Category::Wood => "Træ",
            Category::Plastic => "Plast",
            Category::Concrete => "Beton",
            Category::Aluminium => "Aluminium",
            Category::Paper => "Papir/pap",
        }
    }

    /// Unit of the input quantity
    pub fn unit(self) -> &'static str {
        match self {
            Category::Electricity => "kWh",
            Category::Gas => "m³",
            Category::Van | Category::Truck => "km",
            _ => "kg",
        }
    }

    /// Field name in [`UsageInput`](crate::UsageInput) and the TOML input file
    pub fn field_name(self) -> &'static str {
        match self {
            Category::Electricity => "electricity_kwh",
            Category::Gas => "gas_m3",
            Category::Van => "van_km",
            Category::Truck => "truck_km",
            Category::Steel => "steel_kg",
            Category::Wood => "wood_kg",
            Category::Plastic => "plastic_kg",
            Category::Concrete => "concrete_kg",
            Category::Aluminium => "aluminium_kg",
            Category::Paper => "paper_kg",
        }
    }

    /// Guidance on where to find the figure, shown next to the input
    pub fn help(self) -> &'static str {
        match self {
            Category::Electricity => "Du finder dette på din årlige elregning eller ved at samle månedsforbrug.",
            Category::Gas => "Du finder dette på din årlige gasregning eller leverandørens årsopgørelse.",
            Category::Van => "Samlet antal kilometer kørt af virksomhedens varebiler pr. år.",
            Category::Truck => "Samlet antal kilometer kørt af virksomhedens lastbiler pr. år.",
            Category::Steel => "Vægt af stål anvendt i produktion, byggeri eller projekter pr. år.",
            Category::Wood => "Vægt af træ anvendt i produktion, emballage eller byggeri pr. år.",
            Category::Plastic => "Vægt af plast anvendt i emballage, komponenter mv. pr. år.",
            Category::Concrete => "Vægt af beton anvendt i byggeri eller projekter pr. år.",
            Category::Aluminium => "Vægt af aluminium anvendt i produktion, byggeri mv. pr. år.",
            Category::Paper => "Vægt af papir og pap anvendt i kontor, emballage mv. pr. år.",
        }
    }

    /// Summary group this category belongs to
    pub fn group(self) -> CategoryGroup {
        match self {
            Category::Electricity | Category::Gas => CategoryGroup::Energy,
            Category::Van | Category::Truck => CategoryGroup::Transport,
            _ => CategoryGroup::Materials,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl CategoryGroup {
    /// All groups in summary order
    pub const ALL: [CategoryGroup; 3] = [
        CategoryGroup::Energy,
        CategoryGroup::Transport,
        CategoryGroup::Materials,
    ];

    /// Danish label used in the summary and the report
    pub fn label(self) -> &'static str {
        match self {
            CategoryGroup::Energy => "Energi",
            CategoryGroup::Transport => "Transport",
            CategoryGroup::Materials => "Materialer",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_label_order() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "El", "Gas", "Varebil", "Lastbil", "Stål", "Træ", "Plast", "Beton",
                "Aluminium", "Papir/pap"
            ]
        );
    }

    #[test]
    fn test_factor_table() {
        assert_eq!(Category::Electricity.factor(), 0.233);
        assert_eq!(Category::Gas.factor(), 2.2);
        assert_eq!(Category::Van.factor(), 0.18);
        assert_eq!(Category::Truck.factor(), 0.5);
        assert_eq!(Category::Steel.factor(), 1.9);
        assert_eq!(Category::Wood.factor(), 0.2);
        assert_eq!(Category::Plastic.factor(), 3.0);
        assert_eq!(Category::Concrete.factor(), 0.1);
        assert_eq!(Category::Aluminium.factor(), 8.0);
        assert_eq!(Category::Paper.factor(), 1.0);
    }

    #[test]
    fn test_groups() {
        assert_eq!(Category::Gas.group(), CategoryGroup::Energy);
        assert_eq!(Category::Truck.group(), CategoryGroup::Transport);
        for material in Category::MATERIALS {
            assert_eq!(material.group(), CategoryGroup::Materials);
        }
        let materials = Category::ALL
            .iter()
            .filter(|c| c.group() == CategoryGroup::Materials)
            .count();
        assert_eq!(materials, 6);
    }
}
