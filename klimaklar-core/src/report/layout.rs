//! Page layout for the report document
//!
//! A small flow-layout engine in the style of a line printer: a vertical
//! cursor moves down an A4 page, each call places one element at the cursor
//! and advances it. Elements that would cross the bottom margin move to a
//! fresh page. All coordinates are millimetres from the top-left corner.

/// A4 width in mm
pub const PAGE_WIDTH: f64 = 210.0;
/// A4 height in mm
pub const PAGE_HEIGHT: f64 = 297.0;
/// Left, right and top margin in mm
pub const MARGIN: f64 = 10.0;
/// Distance from the page bottom at which content breaks to a new page
pub const BOTTOM_MARGIN: f64 = 20.0;
/// Distance of the footer line from the page bottom
pub const FOOTER_OFFSET: f64 = 15.0;

/// Points per millimetre
pub(crate) const PT_PER_MM: f64 = 72.0 / 25.4;

/// Helvetica variants available in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const GREEN: Color = Color(34, 139, 34);
    pub const GREY: Color = Color(80, 80, 80);
}

/// Horizontal placement of a text line within the printable width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A positioned drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// One line of text; `baseline` is the y position of the glyph baseline
    Text {
        x: f64,
        baseline: f64,
        size: f64,
        style: FontStyle,
        color: Color,
        text: String,
    },
    /// Horizontal line across the printable width
    Rule { x1: f64, x2: f64, y: f64, color: Color },
    /// Filled rectangle; `y` is the top edge
    Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
}

/// Elements placed on one page, in drawing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    /// Text content of every text element on the page, top to bottom
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// All bar elements on the page
    pub fn bars(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Bar { .. }))
    }
}

/// Flow layout builder
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pages: Vec<Page>,
    y: f64,
    font: FontStyle,
    font_size: f64,
    text_color: Color,
    draw_color: Color,
    footer: Option<String>,
}

impl ReportLayout {
    /// Start a layout with one empty page
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN,
            font: FontStyle::Regular,
            font_size: 12.0,
            text_color: Color::BLACK,
            draw_color: Color::BLACK,
            footer: None,
        }
    }

    /// Builder method: text printed centred at the bottom of every page
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Current cursor position
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Number of pages started so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn set_font(&mut self, style: FontStyle, size: f64) {
        self.font = style;
        self.font_size = size;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    /// Move the cursor down without drawing
    pub fn ln(&mut self, height: f64) {
        self.y += height;
    }

    /// Place a left-aligned line of text in a row of `height` mm
    pub fn text_line(&mut self, height: f64, text: &str) {
        self.place_text(height, text, Align::Left);
    }

    /// Place a centred line of text in a row of `height` mm
    pub fn centered_line(&mut self, height: f64, text: &str) {
        self.place_text(height, text, Align::Center);
    }

    /// Place several lines, each in a row of `height` mm
    pub fn paragraph(&mut self, height: f64, lines: &[&str]) {
        for line in lines {
            self.text_line(height, line);
        }
    }

    /// Start a new page unless `height` mm still fit below the cursor
    ///
    /// Keeps rows made of several elements (a label and its bar) together.
    pub fn keep_together(&mut self, height: f64) {
        self.ensure_space(height);
    }

    /// Draw a horizontal rule at the cursor
    pub fn rule(&mut self) {
        let color = self.draw_color;
        let y = self.y;
        self.current_page().elements.push(Element::Rule {
            x1: MARGIN,
            x2: PAGE_WIDTH - MARGIN,
            y,
            color,
        });
    }

    /// Draw a filled bar with its top edge at the cursor
    ///
    /// Does not move the cursor; the caller advances past the bar.
    pub fn bar(&mut self, x: f64, width: f64, height: f64, color: Color) {
        self.ensure_space(height);
        let y = self.y;
        self.current_page().elements.push(Element::Bar {
            x,
            y,
            width: width.max(0.0),
            height,
            color,
        });
    }

    /// Finish the layout and return its pages, with the footer stamped on each
    pub fn finish(mut self) -> Vec<Page> {
        if let Some(footer) = self.footer.take() {
            let size = 8.0;
            let row = 10.0;
            let top = PAGE_HEIGHT - FOOTER_OFFSET;
            let x = centered_x(&footer, size);
            for page in &mut self.pages {
                page.elements.push(Element::Text {
                    x,
                    baseline: baseline_in_row(top, row, size),
                    size,
                    style: FontStyle::Italic,
                    color: Color::BLACK,
                    text: footer.clone(),
                });
            }
        }
        self.pages
    }

    fn place_text(&mut self, height: f64, text: &str, align: Align) {
        self.ensure_space(height);
        let x = match align {
            Align::Left => MARGIN,
            Align::Center => centered_x(text, self.font_size),
        };
        let element = Element::Text {
            x,
            baseline: baseline_in_row(self.y, height, self.font_size),
            size: self.font_size,
            style: self.font,
            color: self.text_color,
            text: text.to_string(),
        };
        self.current_page().elements.push(element);
        self.y += height;
    }

    fn ensure_space(&mut self, height: f64) {
        if self.y + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            log::trace!("Page break at y={:.1}mm", self.y);
            self.pages.push(Page::default());
            self.y = MARGIN;
        }
    }

    fn current_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Font size in points converted to millimetres
fn pt_to_mm(size: f64) -> f64 {
    size / PT_PER_MM
}

/// Baseline that vertically centres a line of `size` pt in a row
fn baseline_in_row(top: f64, row_height: f64, size: f64) -> f64 {
    top + row_height / 2.0 + 0.3 * pt_to_mm(size)
}

/// Approximate rendered width of `text` in mm
///
/// Uses an average Helvetica advance of half an em per character.
fn approx_text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * pt_to_mm(size) * 0.5
}

fn centered_x(text: &str, size: f64) -> f64 {
    let printable = PAGE_WIDTH - 2.0 * MARGIN;
    let width = approx_text_width(text, size).min(printable);
    MARGIN + (printable - width) / 2.0
}
