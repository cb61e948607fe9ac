use thiserror::Error;

/// Failures at the boundary to the browser's viewport and timer facilities.
///
/// None of these are surfaced to the visitor: a region whose observation
/// fails simply stays hidden.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("viewport observation unavailable: {0}")]
    ViewportUnavailable(String),

    #[error("region element is not attached to the document")]
    DetachedTarget,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site content has an empty {0} section")]
    EmptySection(&'static str),
}
