//! # PDF Generation Module
//!
//! Renders a [`Report`] to PDF using Typst.
//!
//! ## Architecture
//!
//! - The page template is a Typst string built with `format!`
//! - User text is escaped before it is spliced into markup
//! - Fonts come from `typst-assets`, so no files are read at render time
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::pdf::render_report_pdf;
//! use calc_core::report::Report;
//!
//! let mut report = Report::new("V-101");
//! report.push("UG-99 Hydrotest Pressure: 1.95 MPa");
//!
//! let pdf_bytes = render_report_pdf(&report).unwrap();
//! std::fs::write("V-101_ASME_Report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::{Datelike, Utc};
use tracing::debug;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::equations::registry::escape_typst;
use crate::errors::{CalcError, CalcResult};
use crate::report::{Report, REPORT_TITLE};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling a single in-memory document.
struct PdfWorld {
    main: Source,
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    /// Fonts bundled with typst-assets (Libertinus Serif, New Computer
    /// Modern, DejaVu Sans Mono)
    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|data| Font::iter(Bytes::new(data)))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(now.year(), now.month().try_into().ok()?, now.day().try_into().ok()?)
    }
}

// ============================================================================
// Report Template
// ============================================================================

/// Build the Typst source for a report.
fn report_source(report: &Report) -> String {
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let project = escape_typst(&report.project_name);

    let mut source = format!(
        r##"
#set page(
  paper: "a4",
  margin: (top: 25mm, bottom: 25mm, left: 20mm, right: 20mm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[{title}]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[{project}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display() of #counter(page).final().first()]],
      align(right)[#text(size: 9pt)[{date}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[{title} - {project}]
  ]
]

#v(12pt)
"##,
        title = REPORT_TITLE,
        project = project,
        date = date,
    );

    let info: Vec<(&str, &str)> = [
        ("Engineer:", report.engineer.as_str()),
        ("Client:", report.client.as_str()),
        ("Code:", report.code.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect();

    if !info.is_empty() {
        source.push_str("#table(\n  columns: (auto, 1fr),\n  stroke: none,\n  row-gutter: 4pt,\n");
        for (key, value) in info {
            source.push_str(&format!("  [{}], [{}],\n", key, escape_typst(value)));
        }
        source.push_str(")\n\n#v(12pt)\n");
    }

    source.push_str("== Results\n\n");
    if report.lines.is_empty() {
        source.push_str("#text(style: \"italic\")[No results recorded.]\n");
    }
    for line in &report.lines {
        source.push_str(&format!("#par[{}]\n\n", escape_typst(line)));
    }

    source.push_str(
        "\n#v(24pt)\n#text(size: 9pt, fill: gray)[Calculations should be verified by a qualified engineer.]\n",
    );

    if !report.equations.is_empty() {
        source.push_str(&report.equations.generate_appendix_typst());
    }

    source
}

/// Compile Typst source to PDF bytes.
fn compile_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })
}

/// Render a report to PDF bytes.
///
/// The result lines follow a title block with the project details; an
/// equations appendix is added when the report tracks any equations.
pub fn render_report_pdf(report: &Report) -> CalcResult<Vec<u8>> {
    let bytes = compile_pdf(report_source(report))?;
    debug!(
        project = %report.project_name,
        lines = report.lines.len(),
        bytes = bytes.len(),
        "report PDF rendered"
    );
    Ok(bytes)
}

/// Default file name for a report PDF, e.g. `V-101_ASME_Report.pdf`.
pub fn report_file_name(project_name: &str) -> String {
    let stem: String = project_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let stem = if stem.is_empty() { "Vessel".to_string() } else { stem };
    format!("{}_ASME_Report.pdf", stem)
}
