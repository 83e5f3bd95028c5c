use crate::document::{Document, NodeId};

/// Tags reachable with the tab key without an explicit `tabindex`.
const NATIVELY_TABBABLE: &[&str] = &["a", "button", "input", "select", "textarea"];

/// Effective tab index of a node, or `None` if it is not focusable at all.
pub fn tab_index(doc: &Document, node: NodeId) -> Option<i32> {
    if doc.has_attribute(node, "disabled") {
        return None;
    }
    match doc.get_attribute(node, "tabindex") {
        Some(value) => value.trim().parse().ok(),
        None if NATIVELY_TABBABLE.contains(&doc.tag(node)) => Some(0),
        None => None,
    }
}

/// Collect every node reachable by sequential keyboard navigation, in tab
/// order: positive indices ascending, then index `0` in document order.
/// Negative indices are focusable by script only and are skipped.
pub fn collect_tabbable(doc: &Document) -> Vec<NodeId> {
    let root = doc.root();
    let mut ordered: Vec<(i32, NodeId)> = std::iter::once(root)
        .chain(doc.descendants(root))
        .filter_map(|node| match tab_index(doc, node) {
            Some(index) if index >= 0 => Some((index, node)),
            _ => None,
        })
        .collect();

    // Stable sort keeps document order within equal indices.
    ordered.sort_by_key(|&(index, _)| if index == 0 { i32::MAX } else { index });
    ordered.into_iter().map(|(_, node)| node).collect()
}

/// Tracks which node is focused and moves focus with Tab / Shift+Tab.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Programmatically focus a node.
    /// Returns true if focus changed.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if self.focused == Some(node) {
            return false;
        }
        self.focused = Some(node);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next tabbable node (Tab).
    /// Returns the newly focused node if focus changed.
    pub fn focus_next(&mut self, doc: &Document) -> Option<NodeId> {
        let tabbable = collect_tabbable(doc);
        if tabbable.is_empty() {
            return None;
        }

        let new_focus = match self.focused {
            None => tabbable[0],
            Some(current) => match tabbable.iter().position(|&n| n == current) {
                Some(i) => tabbable[(i + 1) % tabbable.len()],
                None => tabbable[0],
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous tabbable node (Shift+Tab).
    /// Returns the newly focused node if focus changed.
    pub fn focus_prev(&mut self, doc: &Document) -> Option<NodeId> {
        let tabbable = collect_tabbable(doc);
        let last = *tabbable.last()?;

        let new_focus = match self.focused {
            None => last,
            Some(current) => match tabbable.iter().position(|&n| n == current) {
                Some(0) | None => last,
                Some(i) => tabbable[i - 1],
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, node: NodeId) -> Option<NodeId> {
        if self.focused == Some(node) {
            return None;
        }
        log::trace!("[focus] {:?} -> {:?}", self.focused, node);
        self.focused = Some(node);
        Some(node)
    }
}
