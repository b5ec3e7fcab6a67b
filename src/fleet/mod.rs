//! Fleet editing rules.
//!
//! Drafts carry raw editor input; validation collects every problem with
//! `stillwater::Validation` instead of stopping at the first one.

mod draft;
mod error;

pub use draft::{BicycleDraft, ValidDraft};
pub use error::{DraftError, DraftErrors};
