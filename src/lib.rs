//! An opinionated library for rendering resume records into single-page PDF
//! documents.
//!
//! The crate splits the work into two layers:
//!
//! - the [`Engine`] lays a [`ResumeRecord`] (and an optional decoded photo)
//!   out into an ordered list of [`DrawOp`]s on a fixed A4, two-column
//!   template; the layout is a pure function of its input
//! - the [`Document`] writer turns that [`Layout`] into PDF bytes
//!
//! [`generate`] fuses the two for callers that just want `resume.pdf` bytes:
//!
//! ```no_run
//! use resume_gen::{generate, ResumeRecord};
//!
//! let record = ResumeRecord {
//!     name: "Jane Doe".into(),
//!     title: "Engineer".into(),
//!     ..Default::default()
//! };
//! let pdf = generate(&record, None).expect("record is valid");
//! std::fs::write("resume.pdf", pdf).expect("can write file");
//! ```

mod colour;
pub use colour::*;

mod cursor;
pub use cursor::*;

mod document;
pub use document::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

mod linebreak;
pub use linebreak::*;

mod ops;
pub use ops::*;

/// Pre-defined page sizes
pub mod pagesize;
pub use pagesize::{PageOrientation, PageSize};

mod photo;
pub use photo::*;

mod record;
pub use record::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for callers that post-process
/// the generated document
pub use pdf_writer;

/// Render a resume record straight to PDF bytes with the default template.
///
/// `photo_bytes` is the raw upload, if any; unusable photos degrade to the
/// placeholder rather than failing the render. The returned bytes are a
/// complete document suitable for a `resume.pdf` download.
pub fn generate(record: &ResumeRecord, photo_bytes: Option<&[u8]>) -> Result<Vec<u8>, Error> {
    let engine = Engine::default();
    let layout = engine.render_from_parts(record, photo_bytes)?;

    let mut info = Info::new();
    info.title(format!("Resume - {}", record.name))
        .author(record.name.clone())
        .subject(record.title.clone());

    let mut bytes = Vec::new();
    Document::with_info(info).write(&layout, &mut bytes)?;
    Ok(bytes)
}
