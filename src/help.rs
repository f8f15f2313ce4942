//! Contents of the help panel.

use eframe::egui;

/// Width of the help panel in pixels.
pub const HELP_PANEL_WIDTH: f32 = 260.0;

/// One row of the help panel: a gesture and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub gesture: &'static str,
    pub action: &'static str,
}

const NAVIGATION: &[HelpEntry] = &[
    HelpEntry {
        gesture: "Drag background",
        action: "Pan the view",
    },
    HelpEntry {
        gesture: "Scroll / slider",
        action: "Zoom",
    },
    HelpEntry {
        gesture: "+ / -",
        action: "Zoom in / out",
    },
    HelpEntry {
        gesture: "Fit / 0",
        action: "Fit everything in view",
    },
    HelpEntry {
        gesture: "R",
        action: "Reset zoom and pan",
    },
];

const NODES: &[HelpEntry] = &[
    HelpEntry {
        gesture: "Click node",
        action: "Select it",
    },
    HelpEntry {
        gesture: "Click background",
        action: "Clear the selection",
    },
];

const MULTI_SELECT: HelpEntry = HelpEntry {
    gesture: "Ctrl + click",
    action: "Add or remove a node",
};

/// Help sections in display order. The multi-select line is only present
/// when the host allows it.
pub fn help_sections(allow_multi_select: bool) -> Vec<(&'static str, Vec<HelpEntry>)> {
    let mut nodes = NODES.to_vec();
    if allow_multi_select {
        nodes.push(MULTI_SELECT);
    }
    vec![("Navigation", NAVIGATION.to_vec()), ("Nodes", nodes)]
}

/// Renders the help panel body.
pub fn show_help_panel(ui: &mut egui::Ui, allow_multi_select: bool) {
    egui::Frame::popup(ui.style()).show(ui, |ui| {
        ui.set_width(HELP_PANEL_WIDTH);
        for (idx, (title, entries)) in help_sections(allow_multi_select).into_iter().enumerate() {
            if idx > 0 {
                ui.add_space(8.0);
            }
            ui.strong(title);
            ui.separator();
            egui::Grid::new(("help_section", idx))
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for entry in entries {
                        ui.label(egui::RichText::new(entry.gesture).monospace());
                        ui.label(entry.action);
                        ui.end_row();
                    }
                });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_entries(allow_multi_select: bool) -> Vec<HelpEntry> {
        help_sections(allow_multi_select)
            .into_iter()
            .flat_map(|(_, entries)| entries)
            .collect()
    }

    #[test]
    fn multi_select_line_is_gated() {
        assert!(!all_entries(false).contains(&MULTI_SELECT));
        assert!(all_entries(true).contains(&MULTI_SELECT));
    }

    #[test]
    fn keyboard_shortcuts_are_listed() {
        let gestures: Vec<_> = all_entries(false).iter().map(|e| e.gesture).collect();
        for key in ["+ / -", "Fit / 0", "R"] {
            assert!(gestures.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn flag_changes_exactly_one_line() {
        assert_eq!(all_entries(true).len(), all_entries(false).len() + 1);
    }
}
