//! Error taxonomy for template construction and sprite lookup.
//!
//! Every failure the library surfaces to a caller is one of four kinds:
//!
//! - [`SpriteError::InvalidArgument`] – a count or duration that must be
//!   positive was not
//! - [`SpriteError::PreconditionViolation`] – a staged builder call was made out
//!   of order (no template pending, animation not added yet, no free slot)
//! - [`SpriteError::NotFound`] – a template or animation name did not resolve
//! - [`SpriteError::ValidationError`] – a template failed its structural checks
//!   on commit, or a static template was rejected
//!
//! Bulk clears and instance removals report through `bool` instead, since
//! "already empty" and "not registered" are ordinary states.

use thiserror::Error;

use crate::resources::templatebuilder::TemplateBuilder;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, SpriteError>;

/// A template that failed to commit, handed back untouched with the reason.
///
/// The builder can be inspected, fixed (missing frames added), and committed
/// again, or simply dropped.
#[derive(Error, Debug)]
#[error("template '{}' rejected: {error}", .builder.name())]
pub struct RejectedTemplate {
    #[source]
    pub error: SpriteError,
    pub builder: TemplateBuilder,
}

impl From<RejectedTemplate> for SpriteError {
    fn from(rejected: RejectedTemplate) -> Self {
        rejected.error
    }
}
