//! Section header descriptor.

use super::data::ItemData;

/// Everything a host needs to render one section header.
///
/// Produced by [`ExpandableListView::header`], which combines the model's
/// header content with the view's own expanded flag for the section. The
/// host renders the descriptor and routes taps on the rendered header back
/// to [`ExpandableListView::toggle_section`].
///
/// [`ExpandableListView::header`]: crate::view::ExpandableListView::header
/// [`ExpandableListView::toggle_section`]: crate::view::ExpandableListView::toggle_section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    /// The section this header belongs to.
    pub section: usize,
    /// Whether the section is currently expanded.
    pub expanded: bool,
    /// Header content supplied by the model.
    pub content: ItemData,
}
