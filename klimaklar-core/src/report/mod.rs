//! Climate report generation
//!
//! Composes the report content onto pages with [`ReportLayout`] and
//! serializes them with [`PdfWriter`]. The content, in order:
//! - Title and metadata block
//! - Total CO2e headline
//! - Energy / transport / materials breakdown
//! - Material breakdown with percentages and proportional bars
//! - Methodology disclaimer
//! - Footer naming the generating tool (every page)

pub mod layout;
pub mod pdf;
pub mod share;

pub use layout::{Color, Element, FontStyle, Page, ReportLayout};
pub use pdf::PdfWriter;
pub use share::{material_share, MaterialShare};

use crate::calculator::EmissionResult;
use crate::factors::CategoryGroup;
use crate::types::{CompanyInfo, Result};
use chrono::NaiveDateTime;

/// Name of the generating tool, printed in the footer
pub const TOOL_NAME: &str = "Klimaklar SMB";

/// Full width of a material bar (mm), reached by the largest material
pub const BAR_MAX_WIDTH: f64 = 120.0;
/// Left edge of the material bars (mm)
pub const BAR_X: f64 = 20.0;
/// Height of a material bar (mm)
pub const BAR_HEIGHT: f64 = 4.0;

/// Label line plus bar gap of one material row (mm)
const MATERIAL_ROW_HEIGHT: f64 = 6.0 + 5.0;

/// Methodology and trust statement
pub const DISCLAIMER: [&str; 3] = [
    "Baseret på brugerindtastede tal og standard emissionsfaktorer.",
    "Scope 1 og 2 er dækket, scope 3 ikke inkluderet.",
    "Denne rapport er vejledende og ikke verificeret af tredjepart.",
];

/// Report header information
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    /// Company name, industry and report year
    pub company: CompanyInfo,
    /// When the report was generated (printed as dd-mm-YYYY)
    pub generated: NaiveDateTime,
}

impl ReportMetadata {
    pub fn new(company: CompanyInfo, generated: NaiveDateTime) -> Self {
        Self { company, generated }
    }
}

/// Report formatter - turns an emission result into a PDF report
pub struct ReportFormatter;

impl ReportFormatter {
    /// Lay out the report pages without serializing them
    pub fn layout(metadata: &ReportMetadata, result: &EmissionResult) -> Vec<Page> {
        let mut doc = ReportLayout::new().with_footer(format!("Genereret af {}", TOOL_NAME));

        // Title
        doc.set_font(FontStyle::Bold, 20.0);
        doc.centered_line(15.0, "Klimarapport");
        doc.set_draw_color(Color::GREEN);
        doc.rule();
        doc.ln(5.0);

        // Metadata block
        doc.set_font(FontStyle::Regular, 12.0);
        doc.text_line(8.0, &format!("Virksomhed: {}", metadata.company.name));
        doc.text_line(8.0, &format!("Branche: {}", metadata.company.industry));
        doc.text_line(8.0, &format!("Rapportår: {}", metadata.company.report_year));
        doc.text_line(
            8.0,
            &format!("Genereret: {}", metadata.generated.format("%d-%m-%Y")),
        );
        doc.ln(3.0);

        // Headline
        doc.set_font(FontStyle::Bold, 14.0);
        doc.set_text_color(Color::GREEN);
        doc.text_line(
            10.0,
            &format!("Samlet CO2-aftryk: {:.2} kg CO2e pr. år", result.total()),
        );
        doc.set_text_color(Color::BLACK);
        doc.ln(2.0);
        doc.rule();
        doc.ln(2.0);

        // Three-way breakdown
        let breakdown = result.breakdown();
        doc.set_font(FontStyle::Bold, 12.0);
        doc.text_line(8.0, "Fordeling:");
        doc.set_font(FontStyle::Regular, 10.0);
        for group in CategoryGroup::ALL {
            doc.text_line(
                6.0,
                &format!("{}: {:.2} kg CO2e", group.label(), breakdown.get(group)),
            );
        }
        doc.ln(2.0);

        // Material breakdown
        doc.set_font(FontStyle::Bold, 12.0);
        doc.text_line(8.0, "Materialefordeling:");
        doc.set_font(FontStyle::Regular, 10.0);
        let subtotal = result.material_subtotal();
        let max = result.max_material();
        for (category, value) in result.material_values() {
            let share = material_share(value, subtotal, max);
            doc.keep_together(MATERIAL_ROW_HEIGHT);
            doc.text_line(
                6.0,
                &format!(
                    "{}: {:.2} kg CO2e ({:.1}%)",
                    category.label(),
                    value,
                    share.percentage
                ),
            );
            doc.bar(BAR_X, share.bar_width(BAR_MAX_WIDTH), BAR_HEIGHT, Color::GREEN);
            doc.ln(5.0);
        }
        doc.ln(2.0);
        doc.rule();
        doc.ln(2.0);

        // Methodology
        doc.set_font(FontStyle::Bold, 12.0);
        doc.text_line(8.0, "Metode og tillid:");
        doc.set_font(FontStyle::Regular, 10.0);
        doc.set_text_color(Color::GREY);
        doc.paragraph(6.0, &DISCLAIMER);
        doc.set_text_color(Color::BLACK);

        doc.finish()
    }

    /// Render the complete report as PDF bytes
    ///
    /// # Arguments
    /// * `metadata` - Company details and generation time
    /// * `result` - Computed emissions
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The PDF document
    pub fn render(metadata: &ReportMetadata, result: &EmissionResult) -> Result<Vec<u8>> {
        let pages = Self::layout(metadata, result);
        log::debug!("Report laid out on {} page(s)", pages.len());

        PdfWriter::new()
            .with_title(format!("Klimarapport {}", metadata.company.name))
            .with_producer(TOOL_NAME)
            .write(&pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::EmissionCalculator;
    use crate::factors::Category;
    use crate::types::UsageInput;
    use chrono::NaiveDate;

    fn metadata() -> ReportMetadata {
        let generated = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        ReportMetadata::new(CompanyInfo::default(), generated)
    }

    fn all_lines(pages: &[Page]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|p| p.text_lines().map(str::to_string))
            .collect()
    }

    fn bar_widths(pages: &[Page]) -> Vec<f64> {
        pages
            .iter()
            .flat_map(|p| p.bars())
            .filter_map(|e| match e {
                Element::Bar { width, .. } => Some(*width),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_content_order() {
        let input = UsageInput::new()
            .with_quantity(Category::Electricity, 1000.0)
            .with_quantity(Category::Gas, 500.0);
        let result = EmissionCalculator::calculate(&input);
        let pages = ReportFormatter::layout(&metadata(), &result);

        let lines = all_lines(&pages);
        let expected = vec![
            "Klimarapport",
            "Virksomhed: Eksempel ApS",
            "Branche: Produktion",
            "Rapportår: 2025",
            "Genereret: 14-03-2025",
            "Samlet CO2-aftryk: 1333.00 kg CO2e pr. år",
            "Fordeling:",
            "Energi: 1333.00 kg CO2e",
            "Transport: 0.00 kg CO2e",
            "Materialer: 0.00 kg CO2e",
            "Materialefordeling:",
            "Stål: 0.00 kg CO2e (0.0%)",
            "Træ: 0.00 kg CO2e (0.0%)",
            "Plast: 0.00 kg CO2e (0.0%)",
            "Beton: 0.00 kg CO2e (0.0%)",
            "Aluminium: 0.00 kg CO2e (0.0%)",
            "Papir/pap: 0.00 kg CO2e (0.0%)",
            "Metode og tillid:",
            DISCLAIMER[0],
            DISCLAIMER[1],
            DISCLAIMER[2],
            "Genereret af Klimaklar SMB",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_all_zero_report() {
        let result = EmissionCalculator::calculate(&UsageInput::new());
        let pages = ReportFormatter::layout(&metadata(), &result);

        let widths = bar_widths(&pages);
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| *w == 0.0));

        let lines = all_lines(&pages);
        assert!(lines.contains(&"Samlet CO2-aftryk: 0.00 kg CO2e pr. år".to_string()));
        assert_eq!(lines.iter().filter(|l| l.ends_with("(0.0%)")).count(), 6);
    }

    #[test]
    fn test_material_rows_and_bars() {
        let input = UsageInput::new()
            .with_quantity(Category::Steel, 10.0)
            .with_quantity(Category::Wood, 10.0);
        let result = EmissionCalculator::calculate(&input);
        let pages = ReportFormatter::layout(&metadata(), &result);

        let lines = all_lines(&pages);
        assert!(lines.contains(&"Stål: 19.00 kg CO2e (90.5%)".to_string()));
        assert!(lines.contains(&"Træ: 2.00 kg CO2e (9.5%)".to_string()));
        assert!(lines.contains(&"Materialer: 21.00 kg CO2e".to_string()));

        let widths = bar_widths(&pages);
        assert_eq!(widths[0], BAR_MAX_WIDTH);
        assert!((widths[1] - 2.0 / 19.0 * BAR_MAX_WIDTH).abs() < 1e-9);
        assert!(widths[2..].iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_bars_start_at_bar_x() {
        let input = UsageInput::new().with_quantity(Category::Aluminium, 3.0);
        let result = EmissionCalculator::calculate(&input);
        let pages = ReportFormatter::layout(&metadata(), &result);

        for page in &pages {
            for bar in page.bars() {
                if let Element::Bar { x, height, .. } = bar {
                    assert_eq!(*x, BAR_X);
                    assert_eq!(*height, BAR_HEIGHT);
                }
            }
        }
    }

    #[test]
    fn test_report_fits_on_one_page() {
        let result = EmissionCalculator::calculate(&UsageInput::new());
        let pages = ReportFormatter::layout(&metadata(), &result);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_render_produces_pdf() {
        let result = EmissionCalculator::calculate(&UsageInput::new());
        let bytes = ReportFormatter::render(&metadata(), &result).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }
}
