//! Presentation strategies
//!
//! - MarkerPresenter: markers + debug outline of the ground footprint
//! - GizmoRenderer: editor wireframe of the camera volume

mod marker_presenter;
mod gizmo_renderer;

pub use marker_presenter::{MarkerPresenter, LINE_COLOR, LINE_VISIBILITY};
pub use gizmo_renderer::GizmoRenderer;
