//! Node selection on the demo canvas.

use std::collections::BTreeSet;

/// Selected scene nodes, by index into [`crate::canvas::SCENE_NODES`].
#[derive(Debug, Default)]
pub struct Selection {
    nodes: BTreeSet<usize>,
    allow_multi_select: bool,
}

impl Selection {
    pub fn new(allow_multi_select: bool) -> Self {
        Self {
            nodes: BTreeSet::new(),
            allow_multi_select,
        }
    }

    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Applies a click on `hit`, or on the background when `None`.
    ///
    /// With `additive` set and multi-select allowed, the clicked node is
    /// toggled in the selection instead of replacing it.
    pub fn click(&mut self, hit: Option<usize>, additive: bool) {
        match hit {
            None => self.nodes.clear(),
            Some(node) if additive && self.allow_multi_select => {
                if !self.nodes.remove(&node) {
                    self.nodes.insert(node);
                }
            }
            Some(node) => {
                self.nodes.clear();
                self.nodes.insert(node);
            }
        }
        log::debug!("Selection: {:?}", self.nodes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_replaces_selection() {
        let mut selection = Selection::new(false);
        selection.click(Some(1), false);
        selection.click(Some(3), false);
        assert!(selection.contains(3));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn background_click_clears() {
        let mut selection = Selection::new(true);
        selection.click(Some(1), false);
        selection.click(Some(2), true);
        selection.click(None, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn modifier_click_toggles_when_allowed() {
        let mut selection = Selection::new(true);
        selection.click(Some(1), false);
        selection.click(Some(2), true);
        assert!(selection.contains(1) && selection.contains(2));
        selection.click(Some(1), true);
        assert!(!selection.contains(1));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn modifier_is_ignored_without_multi_select() {
        let mut selection = Selection::new(false);
        selection.click(Some(1), false);
        selection.click(Some(2), true);
        assert!(!selection.contains(1));
        assert!(selection.contains(2));
    }
}
