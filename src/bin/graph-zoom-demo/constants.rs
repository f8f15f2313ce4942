/// Zoom speed multiplier for scroll/keyboard zoom.
pub const ZOOM_SPEED: f32 = 1.2;

/// Fraction of the viewport kept free on each edge by fit-to-view.
pub const FIT_PADDING: f32 = 0.05;

/// Radius of a scene node in world units.
pub const NODE_RADIUS: f32 = 28.0;

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];
