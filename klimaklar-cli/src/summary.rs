//! On-screen summary
//!
//! Renders the total and the energy / transport / materials breakdown as a
//! text bar chart, or as JSON for scripting.

use klimaklar_core::{Category, CategoryGroup, CompanyInfo, EmissionResult};
use serde::Serialize;
use std::fmt::{self, Write};

const CHART_WIDTH: usize = 40;

/// Machine-readable summary printed with `--json`
#[derive(Debug, Serialize)]
pub struct JsonSummary<'a> {
    pub company: &'a CompanyInfo,
    pub total_kg_co2e: f64,
    pub breakdown: Vec<GroupEntry>,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct GroupEntry {
    pub group: CategoryGroup,
    pub label: &'static str,
    pub kg_co2e: f64,
}

#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub category: Category,
    pub label: &'static str,
    pub kg_co2e: f64,
}

impl<'a> JsonSummary<'a> {
    pub fn new(company: &'a CompanyInfo, result: &EmissionResult) -> Self {
        let breakdown = result.breakdown();
        Self {
            company,
            total_kg_co2e: result.total(),
            breakdown: CategoryGroup::ALL
                .iter()
                .map(|group| GroupEntry {
                    group: *group,
                    label: group.label(),
                    kg_co2e: breakdown.get(*group),
                })
                .collect(),
            categories: result
                .entries()
                .map(|(category, kg_co2e)| CategoryEntry {
                    category,
                    label: category.label(),
                    kg_co2e,
                })
                .collect(),
        }
    }
}

/// Render the human-readable summary
pub fn render_summary(
    company: &CompanyInfo,
    result: &EmissionResult,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let breakdown = result.breakdown();

    writeln!(out, "═══════════════════════════════════════════════")?;
    writeln!(out, "  Klimaklar SMB - {} ({})", company.name, company.report_year)?;
    writeln!(out, "═══════════════════════════════════════════════\n")?;
    writeln!(
        out,
        "Samlet CO2-aftryk: {:.2} kg CO2e pr. år\n",
        result.total()
    )?;

    let largest = CategoryGroup::ALL
        .iter()
        .map(|group| breakdown.get(*group))
        .fold(0.0, f64::max);

    writeln!(out, "CO2e (kg) fordelt på kategori:")?;
    for group in CategoryGroup::ALL {
        let value = breakdown.get(group);
        writeln!(
            out,
            "  {:<11} {:>12.2}  {}",
            group.label(),
            value,
            bar(value, largest)
        )?;
    }

    Ok(out)
}

/// Text bar scaled so that `largest` fills the chart width
fn bar(value: f64, largest: f64) -> String {
    if largest <= 0.0 {
        return String::new();
    }
    let len = ((value / largest) * CHART_WIDTH as f64).round() as usize;
    "█".repeat(len.min(CHART_WIDTH))
}

/// Render the factor table shown by `--show-factors`
pub fn render_factors() -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Emissionsfaktorer (kg CO2e pr. enhed):")?;
    for category in Category::ALL {
        writeln!(
            out,
            "  {:<10} {:>6} / {:<3}  {}",
            category.label(),
            category.factor(),
            category.unit(),
            category.help()
        )?;
    }
    Ok(out)
}
