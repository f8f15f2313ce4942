//! Color constants for the placeholder scene.

use eframe::egui::Color32;

pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(24, 26, 31);

pub const NODE_FILL: Color32 = Color32::from_rgb(65, 105, 225);
pub const NODE_STROKE: Color32 = Color32::from_rgb(25, 25, 112);
pub const NODE_SELECTED_FILL: Color32 = Color32::from_rgb(255, 165, 0);
pub const NODE_SELECTED_STROKE: Color32 = Color32::from_rgb(255, 255, 255);
pub const EDGE: Color32 = Color32::from_rgb(140, 140, 150);

pub const LABEL_TEXT: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 220);
pub const LABEL_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);
