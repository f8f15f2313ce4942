//! Zoom slider, fit button and dismissible help overlay for zoomable egui canvases.
//!
//! The host view implements [`ZoomHost`]; [`ZoomControls`] reads the zoom level
//! every frame and only ever writes it back through [`ZoomHost::modify_zoom`].

pub mod config;
pub mod controls;
pub mod dismissal;
pub mod help;
pub mod mapper;

pub use config::{ConfigError, ControlsConfig};
pub use controls::{ZoomControls, ZoomHost};
pub use dismissal::{AnchorRegion, DismissalController, ListenerHost};
pub use mapper::{ZoomBounds, ZoomRangeMapper, ZoomRequest};
