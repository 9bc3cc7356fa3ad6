//! Emission calculation
//!
//! Multiplies each entered quantity by its fixed factor and sums the results.
//! The calculator is pure and infallible: it expects a snapshot that has
//! already been validated by the input surface.

use crate::factors::{Category, CategoryGroup};
use crate::types::UsageInput;
use serde::Serialize;

/// Emission calculator - converts usage figures into kg CO2e
pub struct EmissionCalculator;

impl EmissionCalculator {
    /// Compute the per-category emissions and the total for an input snapshot
    ///
    /// # Arguments
    /// * `input` - Validated usage figures
    ///
    /// # Returns
    /// * `EmissionResult` - Ten category values plus their total
    ///
    /// # Example
    /// ```
    /// use klimaklar_core::{Category, EmissionCalculator, UsageInput};
    ///
    /// let input = UsageInput::new()
    ///     .with_quantity(Category::Electricity, 1000.0)
    ///     .with_quantity(Category::Gas, 500.0);
    /// let result = EmissionCalculator::calculate(&input);
    /// assert_eq!(result.total(), 1333.0);
    /// ```
    pub fn calculate(input: &UsageInput) -> EmissionResult {
        let mut values = [0.0; 10];
        for (slot, category) in values.iter_mut().zip(Category::ALL) {
            *slot = input.quantity(category) * category.factor();
        }

        let result = EmissionResult::from_values(values);
        log::debug!(
            "Calculated emissions: total={:.2} kg CO2e (energy={:.2}, transport={:.2}, materials={:.2})",
            result.total,
            result.breakdown.energy,
            result.breakdown.transport,
            result.breakdown.materials
        );
        result
    }
}

/// Subtotals for the three summary groups
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    /// Electricity + gas
    pub energy: f64,
    /// Van + truck
    pub transport: f64,
    /// Sum of the six materials
    pub materials: f64,
}

impl Breakdown {
    /// Subtotal for a single group
    pub fn get(&self, group: CategoryGroup) -> f64 {
        match group {
            CategoryGroup::Energy => self.energy,
            CategoryGroup::Transport => self.transport,
            CategoryGroup::Materials => self.materials,
        }
    }
}

/// Emissions derived from one [`UsageInput`] snapshot
///
/// Immutable once computed; a new calculation produces a new value.
///
/// The total is the sum of the three group subtotals (each summed in
/// canonical order), so `energy + transport + materials == total` holds
/// exactly. A flat left-to-right sum of the ten values can differ from it in
/// the last bit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionResult {
    values: [f64; 10],
    breakdown: Breakdown,
    total: f64,
}

impl EmissionResult {
    fn from_values(values: [f64; 10]) -> Self {
        // Total is the sum of the group subtotals: the breakdown must add up
        // to it exactly, not just within rounding.
        let mut breakdown = Breakdown {
            energy: 0.0,
            transport: 0.0,
            materials: 0.0,
        };
        for (value, category) in values.iter().zip(Category::ALL) {
            match category.group() {
                CategoryGroup::Energy => breakdown.energy += value,
                CategoryGroup::Transport => breakdown.transport += value,
                CategoryGroup::Materials => breakdown.materials += value,
            }
        }
        let total = breakdown.energy + breakdown.transport + breakdown.materials;

        Self {
            values,
            breakdown,
            total,
        }
    }

    /// kg CO2e for a single category
    pub fn value(&self, category: Category) -> f64 {
        self.values[category as usize]
    }

    /// All categories with their kg CO2e in canonical order
    pub fn entries(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Total kg CO2e across all ten categories, as the sum of the group subtotals
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Energy / transport / materials subtotals
    pub fn breakdown(&self) -> Breakdown {
        self.breakdown
    }

    /// The six material categories with their kg CO2e in canonical order
    pub fn material_values(&self) -> [(Category, f64); 6] {
        Category::MATERIALS.map(|category| (category, self.value(category)))
    }

    /// Sum of the six material values
    pub fn material_subtotal(&self) -> f64 {
        self.breakdown.materials
    }

    /// Largest single material value (0 when every material is 0)
    pub fn max_material(&self) -> f64 {
        self.material_values()
            .iter()
            .fold(0.0, |max, (_, value)| if *value > max { *value } else { max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn full_input() -> UsageInput {
        UsageInput {
            electricity_kwh: 12_345.0,
            gas_m3: 678.9,
            van_km: 15_000.0,
            truck_km: 4_200.5,
            steel_kg: 310.0,
            wood_kg: 95.5,
            plastic_kg: 42.0,
            concrete_kg: 1_800.0,
            aluminium_kg: 7.25,
            paper_kg: 120.0,
        }
    }

    #[test]
    fn test_energy_example() {
        let input = UsageInput::new()
            .with_quantity(Category::Electricity, 1000.0)
            .with_quantity(Category::Gas, 500.0);
        let result = EmissionCalculator::calculate(&input);

        assert_eq!(result.value(Category::Electricity), 233.0);
        assert_eq!(result.value(Category::Gas), 1100.0);
        assert_eq!(result.total(), 1333.0);
        assert_eq!(result.breakdown().transport, 0.0);
        assert_eq!(result.breakdown().materials, 0.0);
    }

    #[test]
    fn test_each_category_is_quantity_times_factor() {
        let input = full_input();
        let result = EmissionCalculator::calculate(&input);

        for (category, value) in result.entries() {
            assert_eq!(value, input.quantity(category) * category.factor());
            assert!(value >= 0.0);
        }
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let result = EmissionCalculator::calculate(&full_input());
        let sum = result.entries().fold(0.0, |acc, (_, v)| acc + v);
        assert!(approx_eq(result.total(), sum));
    }

    #[test]
    fn test_breakdown_sums_exactly_to_total() {
        let result = EmissionCalculator::calculate(&full_input());
        let b = result.breakdown();
        assert_eq!(b.energy + b.transport + b.materials, result.total());

        let energy = result.value(Category::Electricity) + result.value(Category::Gas);
        assert_eq!(b.get(CategoryGroup::Energy), energy);
    }

    #[test]
    fn test_total_is_group_subtotal_sum_for_fractional_input() {
        let input = UsageInput {
            electricity_kwh: 1.1,
            gas_m3: 0.7,
            van_km: 2.3,
            truck_km: 0.9,
            steel_kg: 0.33,
            wood_kg: 1.7,
            plastic_kg: 0.11,
            concrete_kg: 3.3,
            aluminium_kg: 0.07,
            paper_kg: 0.59,
        };
        let result = EmissionCalculator::calculate(&input);
        let b = result.breakdown();

        assert_eq!(result.total(), b.energy + b.transport + b.materials);
        let flat = result.entries().fold(0.0, |acc, (_, v)| acc + v);
        assert!(approx_eq(result.total(), flat));
    }

    #[test]
    fn test_all_zero_input() {
        let result = EmissionCalculator::calculate(&UsageInput::new());
        assert_eq!(result.total(), 0.0);
        assert!(result.total().is_sign_positive());
        assert_eq!(result.max_material(), 0.0);
        assert_eq!(result.material_subtotal(), 0.0);
    }

    #[test]
    fn test_material_values() {
        let input = UsageInput::new()
            .with_quantity(Category::Steel, 10.0)
            .with_quantity(Category::Wood, 10.0);
        let result = EmissionCalculator::calculate(&input);

        let materials = result.material_values();
        assert_eq!(materials[0], (Category::Steel, 19.0));
        assert_eq!(materials[1], (Category::Wood, 2.0));
        assert_eq!(result.material_subtotal(), 21.0);
        assert_eq!(result.max_material(), 19.0);
    }

    #[test]
    fn test_serializes_with_breakdown() {
        let input = UsageInput::new().with_quantity(Category::Electricity, 1000.0);
        let result = EmissionCalculator::calculate(&input);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total"], 233.0);
        assert_eq!(json["breakdown"]["energy"], 233.0);
        assert_eq!(json["values"].as_array().map(|v| v.len()), Some(10));
    }

    #[test]
    fn test_recalculation_replaces_result() {
        let first = EmissionCalculator::calculate(&UsageInput::new().with_quantity(Category::Paper, 1.0));
        let second = EmissionCalculator::calculate(&UsageInput::new().with_quantity(Category::Paper, 2.0));
        assert_eq!(first.total(), 1.0);
        assert_eq!(second.total(), 2.0);
        assert_ne!(first, second);
    }
}
