//! Shared view layer for the audio/mocap alignment tools
//!
//! This crate provides the interactive multi-track signal view: N panels
//! of downsampled signals whose x ranges can be tied together or left
//! independent, per-panel axis label formatting, and the anchor-capture
//! session that drives a synchronization action.
//!
//! ## Architecture
//!
//! - **State structs**: pure data (`PanelSpec`, `ViewRange`, `LineData`)
//! - **Controllers**: `ViewportController` recomputes one panel's lines
//!   when its visible range changes; `MultiPanelSynchronizedView` owns the
//!   panels and broadcasts range changes across the tied group
//! - **Rendered output**: `render()` returns a `RenderedView` value; the
//!   drawing surface and its event loop live in the application
//!
//! The tie between panels is implemented at the controller/event level,
//! not by sharing an axis object: panels in a group display the same
//! numeric x range while keeping their own samplerates and label formats.

pub mod config;
pub mod error;
pub mod label;
pub mod panel;
pub mod session;
pub mod view;
pub mod viewport;

pub use config::ViewConfig;
pub use error::{ViewError, ViewResult};
pub use label::LabelFormatter;
pub use panel::{LineData, PanelSpec, ViewRange};
pub use session::SynchSession;
pub use view::{MultiPanelSynchronizedView, RenderedPanel, RenderedView, Tick};
pub use viewport::ViewportController;
