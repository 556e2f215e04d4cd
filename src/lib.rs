//! Layout composition engine for correspondence tracking reports.
//!
//! The crate turns one JSON-shaped report payload (incoming mail, internal
//! memos, general/special letters, delivery sheets) into a printable
//! tracking-report document tree:
//!
//! 1. [`payload`] normalizes the payload into canonical entities, rejecting
//!    it with a named field on the first missing required value;
//! 2. [`partition`] splits the party/expedition list into internal and
//!    external subsets with per-subset display numbers;
//! 3. [`rows`] builds ordered table rows with span and emphasis annotations;
//! 4. [`style`] answers position-dependent styling queries (rule widths,
//!    fills, padding) as pure functions;
//! 5. [`compose`] assembles everything into one immutable [`document`] tree;
//! 6. [`render`] hands the tree to `genpdf` and streams back PDF bytes.
//!
//! Steps 1–5 are pure data transformation: stateless per request,
//! deterministic, and free of I/O.

pub mod compose;
pub mod document;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod model;
pub mod partition;
pub mod payload;
pub mod render;
pub mod rows;
pub mod style;

pub use compose::{build_document, compose, Institution};
pub use document::DocumentTree;
pub use error::Error;
pub use model::{Report, ReportKind};
pub use payload::ReportPayload;
pub use render::render_pdf;
