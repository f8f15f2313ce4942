//! UI rendering methods for the demo application.

use crate::GraphZoomDemo;
use crate::canvas::{SCENE_EDGES, SCENE_NODES};
use crate::colors;
use crate::constants::{NODE_RADIUS, ZOOM_SPEED};
use eframe::egui;
use graph_zoom_controls::ZoomHost;

impl GraphZoomDemo {
    /// Handles keyboard shortcuts for zoom and fit.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                self.view.zoom_by(ZOOM_SPEED, None);
            }
            if i.key_pressed(egui::Key::Minus) {
                self.view.zoom_by(1.0 / ZOOM_SPEED, None);
            }
            if i.key_pressed(egui::Key::Num0) {
                self.view.zoom_to_fit();
            }
            if i.key_pressed(egui::Key::R) {
                self.view.reset();
            }
        });
    }

    /// Renders the bottom status bar with controls hint and current zoom.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Scroll: Zoom | Drag: Pan | Click: Select | +/-: Zoom | 0: Fit | R: Reset");
                if !self.selection.is_empty() {
                    ui.separator();
                    ui.label(format!("{} selected", self.selection.len()));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.0}%", self.view.zoom_level() * 100.0));
                });
            });
        });
    }

    /// Renders the canvas and the floating zoom controls on top of it.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::CANVAS_BACKGROUND))
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                self.show_canvas(ui);
                self.controls.show(ctx, panel_rect, &mut self.view);
            });
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let (viewport_rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        self.view.set_viewport(viewport_rect);

        self.handle_scroll_zoom(ui, viewport_rect);
        if response.dragged() {
            self.view.pan_offset += response.drag_delta();
        }
        if response.clicked() {
            let hit = response
                .interact_pointer_pos()
                .and_then(|pos| self.view.node_at(pos));
            let additive = ui.input(|i| i.modifiers.command);
            self.selection.click(hit, additive);
        }

        let painter = ui.painter_at(viewport_rect);
        let zoom = self.view.zoom_level();

        for &(from, to) in SCENE_EDGES {
            let (Some(from), Some(to)) = (SCENE_NODES.get(from), SCENE_NODES.get(to)) else {
                continue;
            };
            painter.line_segment(
                [
                    self.view.world_to_screen(from.position.into()),
                    self.view.world_to_screen(to.position.into()),
                ],
                egui::Stroke::new((2.0 * zoom).clamp(1.0, 4.0), colors::EDGE),
            );
        }

        let font_id = egui::FontId::proportional((14.0 * zoom).clamp(8.0, 32.0));
        for (idx, node) in SCENE_NODES.iter().enumerate() {
            let center = self.view.world_to_screen(node.position.into());
            if !viewport_rect.expand(NODE_RADIUS * zoom).contains(center) {
                continue;
            }
            let (fill, stroke) = if self.selection.contains(idx) {
                (
                    colors::NODE_SELECTED_FILL,
                    egui::Stroke::new(2.5, colors::NODE_SELECTED_STROKE),
                )
            } else {
                (colors::NODE_FILL, egui::Stroke::new(1.5, colors::NODE_STROKE))
            };
            painter.circle(center, NODE_RADIUS * zoom, fill, stroke);
            painter.text(
                center + egui::vec2(1.0, 1.0),
                egui::Align2::CENTER_CENTER,
                node.label,
                font_id.clone(),
                colors::LABEL_SHADOW,
            );
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                node.label,
                font_id.clone(),
                colors::LABEL_TEXT,
            );
        }
    }

    /// Handles scroll wheel zoom, zooming towards the mouse position.
    fn handle_scroll_zoom(&mut self, ui: &mut egui::Ui, viewport_rect: egui::Rect) {
        let hover_pos = ui.input(|i| i.pointer.hover_pos());
        let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);

        // Also false while hovering the floating controls.
        if scroll_delta == 0.0 || !ui.rect_contains_pointer(viewport_rect) {
            return;
        }

        let zoom_factor = if scroll_delta > 0.0 {
            ZOOM_SPEED
        } else {
            1.0 / ZOOM_SPEED
        };
        self.view.zoom_by(zoom_factor, hover_pos);
    }
}
