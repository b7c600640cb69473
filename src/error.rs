use thiserror::Error;

/// Failures of the strict string conversions on catalog types.
///
/// The view helpers (`Icon::for_type`, `ColorClasses::for_tag`) never surface
/// these; they fall back to a default instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown resource type: `{0}`")]
    UnknownResourceType(String),
    #[error("unknown course color tag: `{0}`")]
    UnknownColor(String),
}
