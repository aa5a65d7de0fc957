//! View-layer error types

use synch_core::SynchError;
use thiserror::Error;

/// Errors that can occur while building or driving a view
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// Core validation or downsampling failure
    #[error(transparent)]
    Core(#[from] SynchError),

    /// A view needs at least one panel
    #[error("Cannot build a view without panels")]
    EmptyView,

    /// A panel needs at least one signal
    #[error("Panel {panel} has no signals")]
    EmptyPanel { panel: usize },

    /// A range-change event named a panel that does not exist
    #[error("Unknown panel id {panel} (view has {panels} panels)")]
    UnknownPanel { panel: usize, panels: usize },

    /// An anchor entry is still missing from the capture session
    #[error("Incomplete anchors: {missing} not set")]
    IncompleteAnchors { missing: &'static str },
}

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;
