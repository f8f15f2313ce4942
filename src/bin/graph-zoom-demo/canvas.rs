//! Pan/zoom state of the demo canvas and the world-to-screen transform.

use crate::constants::{FIT_PADDING, NODE_RADIUS};
use eframe::egui;
use graph_zoom_controls::{ZoomBounds, ZoomHost};

/// A placeholder node, positioned in world units around the origin.
pub struct SceneNode {
    pub label: &'static str,
    pub position: [f32; 2],
}

pub const SCENE_NODES: &[SceneNode] = &[
    SceneNode {
        label: "parse",
        position: [-420.0, -160.0],
    },
    SceneNode {
        label: "resolve",
        position: [-140.0, -220.0],
    },
    SceneNode {
        label: "check",
        position: [-120.0, 120.0],
    },
    SceneNode {
        label: "lower",
        position: [180.0, -40.0],
    },
    SceneNode {
        label: "emit",
        position: [460.0, 180.0],
    },
];

/// Indices into [`SCENE_NODES`].
pub const SCENE_EDGES: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)];

/// World-space bounding box of the scene, including node radii.
pub fn scene_bounds() -> egui::Rect {
    SCENE_NODES
        .iter()
        .map(|node| {
            egui::Rect::from_center_size(
                egui::pos2(node.position[0], node.position[1]),
                egui::Vec2::splat(NODE_RADIUS * 2.0),
            )
        })
        .fold(egui::Rect::NOTHING, |acc, rect| acc.union(rect))
}

/// Zoom and pan of the canvas; the host side of the zoom controls.
pub struct CanvasView {
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    bounds: ZoomBounds,
    /// Screen rect the canvas occupied last frame.
    viewport: egui::Rect,
}

impl CanvasView {
    pub fn new(bounds: ZoomBounds) -> Self {
        Self {
            zoom: bounds.clamp(1.0),
            pan_offset: egui::Vec2::ZERO,
            bounds,
            viewport: egui::Rect::NOTHING,
        }
    }

    pub fn set_viewport(&mut self, viewport: egui::Rect) {
        self.viewport = viewport;
    }

    pub fn world_to_screen(&self, world: egui::Pos2) -> egui::Pos2 {
        self.viewport.center() + self.pan_offset + world.to_vec2() * self.zoom
    }

    /// Multiplies the zoom by `factor`, keeping `anchor` fixed on screen.
    pub fn zoom_by(&mut self, factor: f32, anchor: Option<egui::Pos2>) {
        let new_zoom = self.bounds.clamp(self.zoom * factor);
        let zoom_ratio = new_zoom / self.zoom;
        let anchor_from_center = anchor.map_or(egui::Vec2::ZERO, |p| p - self.viewport.center());
        let point = anchor_from_center - self.pan_offset;
        self.pan_offset = anchor_from_center - point * zoom_ratio;
        self.zoom = new_zoom;
    }

    /// Index of the topmost scene node under `screen_pos`.
    pub fn node_at(&self, screen_pos: egui::Pos2) -> Option<usize> {
        let radius = NODE_RADIUS * self.zoom;
        SCENE_NODES
            .iter()
            .rposition(|node| self.world_to_screen(node.position.into()).distance(screen_pos) <= radius)
    }

    pub fn reset(&mut self) {
        self.zoom = self.bounds.clamp(1.0);
        self.pan_offset = egui::Vec2::ZERO;
    }
}

impl ZoomHost for CanvasView {
    fn zoom_level(&self) -> f32 {
        self.zoom
    }

    fn zoom_bounds(&self) -> Option<ZoomBounds> {
        Some(self.bounds)
    }

    fn modify_zoom(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        // The controls only send in-range targets; clamping absorbs the f32
        // error of `zoom + (target - zoom)` at the slider ends.
        let new_zoom = self.bounds.clamp(self.zoom + delta);
        // Zoom around the viewport center.
        self.pan_offset *= new_zoom / self.zoom;
        self.zoom = new_zoom;
        true
    }

    fn zoom_to_fit(&mut self) {
        let content = scene_bounds();
        let available = self.viewport.size() * (1.0 - 2.0 * FIT_PADDING);
        if available.x <= 0.0 || available.y <= 0.0 || !content.is_positive() {
            log::debug!("Skipping fit to view, viewport not laid out yet");
            return;
        }

        let fit_zoom = (available.x / content.width()).min(available.y / content.height());
        self.zoom = self.bounds.clamp(fit_zoom);
        self.pan_offset = -content.center().to_vec2() * self.zoom;
        log::debug!("Fit to view: zoom {}", self.zoom);
    }
}
