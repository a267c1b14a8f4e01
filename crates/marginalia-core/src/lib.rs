//! Marginalia Core Library
//!
//! Inline annotations for plain-text outline documents: the `note:` link
//! codec, a document scanner with edit-stable occurrence identities, hashtag
//! extraction, conjunctive hashtag queries, in-place deletion and an export
//! adapter. The annotation text lives in the document itself; every index
//! produced here is transient and recomputed on demand.

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod hashtag;
pub mod link;
pub mod logging;
pub mod mutate;
pub mod outline;
pub mod query;
pub mod records;
pub mod scan;

pub use document::{splice, Document, MarkerId};
pub use error::{MarginaliaError, Result};
pub use export::{export_document, export_note, ExportConfig};
pub use hashtag::{collect_hashtags, extract_hashtags, TagSet};
pub use link::{decode, encode, AnnotationLink, NOTE_PREFIX};
pub use mutate::{delete_annotation, delete_annotation_at, insert_annotation, Deletion};
pub use outline::{OrgOutline, Outline};
pub use query::{list_all, list_by_hashtags, TagFilter, TagMatch};
pub use scan::{scan, Occurrence, ScanScope, NO_TEXT_PLACEHOLDER};
