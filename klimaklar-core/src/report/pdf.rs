//! Minimal PDF 1.4 serializer
//!
//! Writes laid-out pages as an uncompressed PDF using the three standard
//! Helvetica faces, so no fonts need to be embedded. Text is encoded as
//! WinAnsi, which covers the Danish letters.
//!
//! ## Object layout
//! - 1: Catalog
//! - 2: Page tree
//! - 3-5: Fonts (regular, bold, oblique)
//! - 6..: one Page + content stream pair per page
//! - last: document info dictionary

use super::layout::{Color, Element, FontStyle, Page, PAGE_HEIGHT, PAGE_WIDTH, PT_PER_MM};
use crate::types::Result;
use std::io::Write;

const LINE_WIDTH_MM: f64 = 0.2;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FIRST_PAGE_ID: usize = 6;

/// PDF document writer
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    title: Option<String>,
    producer: Option<String>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: document title stored in the info dictionary
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method: producer stored in the info dictionary
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self
    }

    /// Serialize pages into a complete PDF file
    ///
    /// # Arguments
    /// * `pages` - Laid-out pages in order
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The PDF bytes
    pub fn write(&self, pages: &[Page]) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();

        out.write_all(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")?;

        let page_ids: Vec<usize> = (0..pages.len()).map(|i| FIRST_PAGE_ID + 2 * i).collect();
        let info_id = FIRST_PAGE_ID + 2 * pages.len();

        // Catalog and page tree
        offsets.push(out.len());
        write!(
            out,
            "{} 0 obj\n<< /Type /Catalog /Pages {} 0 R >>\nendobj\n",
            CATALOG_ID, PAGES_ID
        )?;

        let kids: Vec<String> = page_ids.iter().map(|id| format!("{} 0 R", id)).collect();
        offsets.push(out.len());
        write!(
            out,
            "{} 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            PAGES_ID,
            kids.join(" "),
            pages.len()
        )?;

        // Fonts
        for (i, style) in [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic]
            .iter()
            .enumerate()
        {
            offsets.push(out.len());
            write!(
                out,
                "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj\n",
                3 + i,
                base_font(*style)
            )?;
        }

        // Pages with their content streams
        let media_w = format_num(PAGE_WIDTH * PT_PER_MM);
        let media_h = format_num(PAGE_HEIGHT * PT_PER_MM);
        for (page, page_id) in pages.iter().zip(&page_ids) {
            let content_id = page_id + 1;

            offsets.push(out.len());
            write!(
                out,
                "{} 0 obj\n<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R >> >> \
                 /Contents {} 0 R >>\nendobj\n",
                page_id, PAGES_ID, media_w, media_h, content_id
            )?;

            let content = content_stream(page)?;
            offsets.push(out.len());
            write!(out, "{} 0 obj\n<< /Length {} >>\nstream\n", content_id, content.len())?;
            out.write_all(&content)?;
            out.write_all(b"\nendstream\nendobj\n")?;
        }

        // Document info
        offsets.push(out.len());
        write!(out, "{} 0 obj\n<<", info_id)?;
        if let Some(title) = &self.title {
            out.write_all(b" /Title (")?;
            out.write_all(&pdf_string(title))?;
            out.write_all(b")")?;
        }
        if let Some(producer) = &self.producer {
            out.write_all(b" /Producer (")?;
            out.write_all(&pdf_string(producer))?;
            out.write_all(b")")?;
        }
        out.write_all(b" >>\nendobj\n")?;

        // Cross-reference table and trailer
        let xref_offset = out.len();
        write!(out, "xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1)?;
        for offset in &offsets {
            write!(out, "{:010} 00000 n \n", offset)?;
        }
        write!(
            out,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            CATALOG_ID,
            info_id,
            xref_offset
        )?;

        log::debug!("Wrote PDF: {} page(s), {} bytes", pages.len(), out.len());
        Ok(out)
    }
}

/// Render the drawing operators for one page
fn content_stream(page: &Page) -> Result<Vec<u8>> {
    let mut out: Vec<u8> = Vec::new();

    for element in &page.elements {
        match element {
            Element::Text {
                x,
                baseline,
                size,
                style,
                color,
                text,
            } => {
                write!(
                    out,
                    "BT /{} {} Tf {} rg {} {} Td (",
                    font_resource(*style),
                    format_num(*size),
                    rgb(*color),
                    format_num(x * PT_PER_MM),
                    format_num((PAGE_HEIGHT - baseline) * PT_PER_MM)
                )?;
                out.write_all(&pdf_string(text))?;
                out.write_all(b") Tj ET\n")?;
            }
            Element::Rule { x1, x2, y, color } => {
                let y = format_num((PAGE_HEIGHT - y) * PT_PER_MM);
                writeln!(
                    out,
                    "{} RG {} w {} {} m {} {} l S",
                    rgb(*color),
                    format_num(LINE_WIDTH_MM * PT_PER_MM),
                    format_num(x1 * PT_PER_MM),
                    y,
                    format_num(x2 * PT_PER_MM),
                    y
                )?;
            }
            Element::Bar {
                x,
                y,
                width,
                height,
                color,
            } => {
                // Zero-width bars are kept in the layout but draw nothing
                if *width <= 0.0 {
                    continue;
                }
                writeln!(
                    out,
                    "{} rg {} {} {} {} re f",
                    rgb(*color),
                    format_num(x * PT_PER_MM),
                    format_num((PAGE_HEIGHT - y - height) * PT_PER_MM),
                    format_num(width * PT_PER_MM),
                    format_num(height * PT_PER_MM)
                )?;
            }
        }
    }

    Ok(out)
}

fn base_font(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "Helvetica",
        FontStyle::Bold => "Helvetica-Bold",
        FontStyle::Italic => "Helvetica-Oblique",
    }
}

fn font_resource(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "F1",
        FontStyle::Bold => "F2",
        FontStyle::Italic => "F3",
    }
}

fn rgb(color: Color) -> String {
    let Color(r, g, b) = color;
    format!(
        "{} {} {}",
        format_num(r as f64 / 255.0),
        format_num(g as f64 / 255.0),
        format_num(b as f64 / 255.0)
    )
}

/// Format a number with at most three decimals and no trailing zeros
fn format_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Encode text as the body of a PDF literal string in WinAnsiEncoding
///
/// Characters outside WinAnsi are replaced with `?`.
fn pdf_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                ch as u8
            }
            '\u{20}'..='\u{7E}' => ch as u8,
            '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        };
        out.push(byte);
    }
    out
}
