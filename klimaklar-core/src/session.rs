//! Interactive session state
//!
//! A [`Session`] owns the most recent [`EmissionResult`] for one user. It
//! starts empty, every calculation replaces the result wholesale, and it is
//! dropped with the session. Exports are only available once a result
//! exists; before that they return `None`, which hosts render as disabled
//! download actions.

use crate::calculator::{EmissionCalculator, EmissionResult};
use crate::export::{Artifact, CsvExporter};
use crate::report::{ReportFormatter, ReportMetadata};
use crate::types::{CompanyInfo, Result, UsageInput};
use chrono::NaiveDateTime;

/// Single-owner holder of the last computed result
#[derive(Debug, Clone, Default)]
pub struct Session {
    last_result: Option<EmissionResult>,
}

impl Session {
    /// Create a session with no result
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a calculation has been triggered in this session
    pub fn has_result(&self) -> bool {
        self.last_result.is_some()
    }

    /// The most recent result, if any
    pub fn result(&self) -> Option<&EmissionResult> {
        self.last_result.as_ref()
    }

    /// Run a calculation and replace the stored result
    pub fn calculate(&mut self, input: UsageInput) -> &EmissionResult {
        let result = EmissionCalculator::calculate(&input);
        log::info!("Calculated CO2 footprint: {:.2} kg CO2e", result.total());
        self.last_result.insert(result)
    }

    /// The tabular export, or `None` before any calculation
    pub fn csv_export(&self) -> Option<Artifact> {
        let result = self.last_result.as_ref()?;
        Some(Artifact::csv(CsvExporter::export(result)))
    }

    /// The report document, or `None` before any calculation
    ///
    /// # Arguments
    /// * `company` - Metadata printed in the report header
    /// * `generated` - Generation time printed in the report
    pub fn pdf_export(
        &self,
        company: &CompanyInfo,
        generated: NaiveDateTime,
    ) -> Result<Option<Artifact>> {
        let Some(result) = self.last_result.as_ref() else {
            log::debug!("PDF export requested before any calculation");
            return Ok(None);
        };

        let metadata = ReportMetadata::new(company.clone(), generated);
        let bytes = ReportFormatter::render(&metadata, result)?;
        Ok(Some(Artifact::pdf(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{CSV_FILE_NAME, CSV_MIME, PDF_FILE_NAME, PDF_MIME};
    use crate::factors::Category;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_exports_disabled_before_calculation() {
        let session = Session::new();
        assert!(!session.has_result());
        assert!(session.result().is_none());
        assert!(session.csv_export().is_none());
        assert!(session
            .pdf_export(&CompanyInfo::default(), now())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_exports_after_calculation() {
        let mut session = Session::new();
        session.calculate(UsageInput::new().with_quantity(Category::Electricity, 1000.0));
        assert!(session.has_result());

        let csv = session.csv_export().unwrap();
        assert_eq!(csv.file_name, CSV_FILE_NAME);
        assert_eq!(csv.mime, CSV_MIME);
        assert!(!csv.is_empty());

        let pdf = session
            .pdf_export(&CompanyInfo::default(), now())
            .unwrap()
            .unwrap();
        assert_eq!(pdf.file_name, PDF_FILE_NAME);
        assert_eq!(pdf.mime, PDF_MIME);
        assert!(pdf.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_calculation_replaces_result() {
        let mut session = Session::new();
        let first = session
            .calculate(UsageInput::new().with_quantity(Category::Gas, 1.0))
            .total();
        let second = session
            .calculate(UsageInput::new().with_quantity(Category::Plastic, 1.0))
            .total();

        assert_eq!(first, 2.2);
        assert_eq!(second, 3.0);
        assert_eq!(session.result().map(|r| r.total()), Some(3.0));
        assert_eq!(session.result().map(|r| r.value(Category::Gas)), Some(0.0));
    }
}
