//! Effects the view asks its host to apply.

/// Animation style for scoped section reloads.
///
/// The view never interprets this value; it is carried through
/// [`SectionsChanged`] for the host's reload mechanism to act on. Hosts
/// without an animation engine can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAnimation {
    /// Cross-fade the affected rows. The default.
    #[default]
    Fade,
    /// Slide in from the right edge.
    Right,
    /// Slide in from the left edge.
    Left,
    /// Slide in from the top.
    Top,
    /// Slide in from the bottom.
    Bottom,
    /// Collapse towards the section middle.
    Middle,
    /// Let the host choose an appropriate style.
    Automatic,
    /// No animation.
    None,
}

/// A scoped-reload request: re-render these sections, nothing else.
///
/// Emitted through
/// [`ExpandableListView::sections_changed`](super::ExpandableListView::sections_changed)
/// after the expanded-section set has been mutated, so row-count queries made
/// while applying the reload already see the new state. Batch operations emit
/// a single payload covering every affected section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionsChanged {
    /// The affected sections, sorted and deduplicated.
    pub sections: Vec<usize>,
    /// The animation style configured on the view at emission time.
    pub animation: RowAnimation,
}
