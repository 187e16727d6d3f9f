//! Error type shared by the core and the DOM adapters.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here ever reaches the user as a dialog. Installers and event
//! handlers log the error and leave the page in its previous state.

use crate::display::DisplayCategory;

/// Failure raised while installing a component or rendering an element.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A selector or id matched nothing on the current page.
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },
    /// A display element lacks an attribute its category needs.
    #[error("{category} element is missing `{attribute}`")]
    MissingAttribute {
        category: DisplayCategory,
        attribute: &'static str,
    },
    /// The embedded page config block is not valid JSON for [`crate::config::PageConfig`].
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    /// A DOM call threw; carries the stringified `JsValue`.
    #[error("dom error: {0}")]
    Dom(String),
    /// The timezone report request failed or returned a non-success status.
    #[error("request failed: {0}")]
    Request(String),
}

pub type Result<T, E = UiError> = std::result::Result<T, E>;
