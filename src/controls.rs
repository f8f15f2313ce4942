//! Floating zoom control overlay: slider, fit button and help toggle.

use crate::config::{ConfigError, ControlsConfig};
use crate::dismissal::{AnchorRegion, DismissalController, ListenerHost};
use crate::help::show_help_panel;
use crate::mapper::{ZoomBounds, ZoomRangeMapper, ZoomRequest};
use eframe::egui;

/// Distance between the overlay and the panel corner it is anchored to.
pub const CONTROLS_MARGIN: f32 = 12.0;

/// Width of the zoom slider in pixels.
pub const SLIDER_WIDTH: f32 = 140.0;

/// Gap between the help panel and the controls below it.
const HELP_PANEL_GAP: f32 = 6.0;

/// The zoomable view the controls drive.
pub trait ZoomHost {
    /// Current magnification.
    fn zoom_level(&self) -> f32;

    /// Bounds to use this frame, or `None` for the configured defaults.
    fn zoom_bounds(&self) -> Option<ZoomBounds> {
        None
    }

    /// Applies a relative zoom change. The controls ignore the result.
    fn modify_zoom(&mut self, delta: f32) -> bool;

    /// Rescales and recenters the view so all content is visible.
    fn zoom_to_fit(&mut self);
}

/// Forwards a raw slider position to the host if it maps inside the bounds.
pub fn forward_slider_change(
    mapper: &ZoomRangeMapper,
    host: &mut impl ZoomHost,
    position: f32,
) -> Option<ZoomRequest> {
    let request = mapper.request_for(host.zoom_level(), position)?;
    let applied = host.modify_zoom(request.delta);
    log::trace!(
        "Slider {position} -> zoom {} (delta {}, applied: {applied})",
        request.target,
        request.delta
    );
    Some(request)
}

/// Marker stored in egui's memory while an outside-click listener is attached.
#[derive(Clone, Copy, Debug)]
struct OutsideClickListener;

/// Registers outside-click listeners in an egui context's temporary memory.
#[derive(Clone)]
pub struct EguiListenerHost {
    ctx: egui::Context,
    id: egui::Id,
}

impl EguiListenerHost {
    pub fn new(ctx: egui::Context, id: egui::Id) -> Self {
        Self { ctx, id }
    }

    /// Whether a listener is currently registered under this host's id.
    pub fn is_attached(&self) -> bool {
        self.ctx
            .data(|d| d.get_temp::<OutsideClickListener>(self.id).is_some())
    }
}

impl ListenerHost for EguiListenerHost {
    type Registration = EguiListenerRegistration;

    fn attach(&self) -> Self::Registration {
        self.ctx
            .data_mut(|d| d.insert_temp(self.id, OutsideClickListener));
        EguiListenerRegistration {
            ctx: self.ctx.clone(),
            id: self.id,
        }
    }
}

/// Removes the listener marker when dropped.
pub struct EguiListenerRegistration {
    ctx: egui::Context,
    id: egui::Id,
}

impl Drop for EguiListenerRegistration {
    fn drop(&mut self) {
        self.ctx
            .data_mut(|d| d.remove::<OutsideClickListener>(self.id));
    }
}

/// Where a pointer press landed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTarget {
    pub pos: egui::Pos2,
    /// Topmost layer under the pointer, if any.
    pub layer: Option<egui::LayerId>,
}

/// The help toggle button plus the help panel.
///
/// The panel lives on its own layer, so everything on that layer belongs to
/// the anchor. The toggle shares the controls layer and is matched by its
/// hit region.
#[derive(Clone, Copy, Debug)]
pub struct HelpAnchor {
    pub toggle_layer: egui::LayerId,
    pub toggle_rect: egui::Rect,
    pub panel_layer: Option<egui::LayerId>,
}

impl AnchorRegion<PointerTarget> for HelpAnchor {
    fn contains(&self, target: &PointerTarget) -> bool {
        let Some(layer) = target.layer else {
            return false;
        };
        if self.panel_layer == Some(layer) {
            return true;
        }
        layer == self.toggle_layer && self.toggle_rect.contains(target.pos)
    }
}

/// Zoom slider, fit button and optional help panel for a zoomable view.
pub struct ZoomControls {
    id: egui::Id,
    mapper: ZoomRangeMapper,
    allow_multi_select: bool,
    help: Option<DismissalController<EguiListenerHost>>,
    /// Layer and rect of the help toggle from the latest frame.
    toggle_hit: Option<(egui::LayerId, egui::Rect)>,
}

impl ZoomControls {
    /// Builds the controls, rejecting invalid bounds or step counts.
    pub fn new(ctx: &egui::Context, config: &ControlsConfig) -> Result<Self, ConfigError> {
        let id = egui::Id::new("graph_zoom_controls");
        let mapper = config.mapper()?;
        let help = config.show_help.then(|| {
            DismissalController::new(EguiListenerHost::new(ctx.clone(), id.with("outside_click")))
        });

        Ok(Self {
            id,
            mapper,
            allow_multi_select: config.allow_multi_select,
            help,
            toggle_hit: None,
        })
    }

    /// Mapper for the host's current bounds, falling back to the configured ones.
    pub fn mapper_for(&self, host: &impl ZoomHost) -> ZoomRangeMapper {
        match host.zoom_bounds() {
            Some(bounds) => self.mapper.with_bounds(bounds),
            None => self.mapper,
        }
    }

    /// Bounds used when the host supplies none.
    pub fn default_bounds(&self) -> ZoomBounds {
        self.mapper.bounds()
    }

    pub fn has_help(&self) -> bool {
        self.help.is_some()
    }

    pub fn is_help_open(&self) -> bool {
        self.help.as_ref().is_some_and(DismissalController::is_open)
    }

    pub fn toggle_help(&mut self) {
        if let Some(help) = &mut self.help {
            help.toggle();
        }
    }

    /// Renders the overlay in the bottom-right corner of `panel_rect`.
    pub fn show(&mut self, ctx: &egui::Context, panel_rect: egui::Rect, host: &mut impl ZoomHost) {
        let mapper = self.mapper_for(host);
        let has_help = self.help.is_some();
        let help_open = self.is_help_open();
        let mut toggle_clicked = false;
        let mut toggle_hit = None;

        let controls = egui::Area::new(self.id)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .fixed_pos(panel_rect.right_bottom() - egui::vec2(CONTROLS_MARGIN, CONTROLS_MARGIN))
            .interactable(true)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(ui.style().visuals.window_fill.gamma_multiply(0.95))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let mut position = mapper.slider_position(host.zoom_level());
                            ui.spacing_mut().slider_width = SLIDER_WIDTH;
                            let slider = ui
                                .add(
                                    egui::Slider::new(&mut position, 0..=mapper.steps())
                                        .step_by(1.0)
                                        .show_value(false),
                                )
                                .on_hover_text("Zoom");
                            if slider.changed() {
                                forward_slider_change(&mapper, host, position as f32);
                            }

                            if ui.button("Fit").on_hover_text("Fit to view (0)").clicked() {
                                host.zoom_to_fit();
                            }

                            if has_help {
                                let toggle = ui
                                    .add(egui::Button::new("?").selected(help_open))
                                    .on_hover_text("Help");
                                toggle_clicked = toggle.clicked();
                                toggle_hit = Some((toggle.layer_id, toggle.rect));
                            }
                        });
                    });
            });

        self.toggle_hit = toggle_hit;
        let Some(help) = &mut self.help else {
            return;
        };

        if toggle_clicked {
            help.toggle();
        }

        let panel_layer = help.is_open().then(|| {
            let anchor = controls.response.rect.right_top() - egui::vec2(0.0, HELP_PANEL_GAP);
            egui::Area::new(self.id.with("help_panel"))
                .order(egui::Order::Foreground)
                .pivot(egui::Align2::RIGHT_BOTTOM)
                .fixed_pos(anchor)
                .show(ctx, |ui| show_help_panel(ui, self.allow_multi_select))
                .response
                .layer_id
        });

        // Pointer presses are only observed while the outside-click listener
        // is registered, which is exactly while the panel is open.
        if !help.host().is_attached() {
            return;
        }
        let pressed_at = ctx.input(|i| {
            i.pointer
                .any_pressed()
                .then(|| i.pointer.press_origin())
                .flatten()
        });
        let Some(pos) = pressed_at else {
            return;
        };

        let target = PointerTarget {
            pos,
            layer: ctx.layer_id_at(pos),
        };
        let anchor = self.toggle_hit.map(|(toggle_layer, toggle_rect)| HelpAnchor {
            toggle_layer,
            toggle_rect,
            panel_layer,
        });
        help.handle_pointer_down(&target, anchor.as_ref());
    }
}
