//! Proportional share of a material within the material breakdown
//!
//! Percentages are relative to the material subtotal, bar lengths are
//! relative to the largest single material. A zero denominator yields zero.

/// Percentage and bar length for one material row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialShare {
    /// Share of the material subtotal, 0..=100
    pub percentage: f64,
    /// Bar length as a fraction of the full bar width, 0..=1
    pub bar_fraction: f64,
}

impl MaterialShare {
    /// Bar length for a given full width
    pub fn bar_width(&self, max_width: f64) -> f64 {
        self.bar_fraction * max_width
    }
}

/// Compute the share of `value` given the material `subtotal` and the
/// largest material value `max`
pub fn material_share(value: f64, subtotal: f64, max: f64) -> MaterialShare {
    let percentage = if subtotal > 0.0 {
        value / subtotal * 100.0
    } else {
        0.0
    };
    let bar_fraction = if max > 0.0 { value / max } else { 0.0 };

    MaterialShare {
        percentage,
        bar_fraction,
    }
}
