//! Collaborator traits for the expandable list view.
//!
//! These two traits are the only boundary between the view state and the
//! embedding application: [`SectionModel`] answers content queries,
//! [`SectionObserver`] receives interaction notifications. The view holds
//! both behind `Arc`s attached via
//! [`ExpandableListView::attach_model`](crate::view::ExpandableListView::attach_model)
//! and
//! [`ExpandableListView::attach_observer`](crate::view::ExpandableListView::attach_observer).

use super::data::ItemData;
use super::index::RowAddress;

/// Supplies section and row content for an expandable list view.
///
/// The view consults the model on every query; the model never learns which
/// sections are expanded. Row counts reported here are the *full* counts,
/// which the view filters down to zero for collapsed sections.
///
/// # Example
///
/// ```
/// use accordion::model::{ItemData, RowAddress, SectionModel};
///
/// struct Fruit {
///     sections: Vec<Vec<&'static str>>,
/// }
///
/// impl SectionModel for Fruit {
///     fn section_count(&self) -> usize {
///         self.sections.len()
///     }
///
///     fn row_count(&self, section: usize) -> usize {
///         self.sections.get(section).map_or(0, Vec::len)
///     }
///
///     fn content(&self, address: RowAddress) -> ItemData {
///         self.sections
///             .get(address.section())
///             .and_then(|rows| rows.get(address.row()))
///             .map_or(ItemData::None, |&text| ItemData::from(text))
///     }
///
///     fn header(&self, section: usize) -> ItemData {
///         ItemData::Text(format!("Section {section}"))
///     }
/// }
/// ```
pub trait SectionModel: Send + Sync {
    /// Returns the number of sections in the list.
    fn section_count(&self) -> usize;

    /// Returns the number of rows in the given section.
    ///
    /// This is the unfiltered count; the view reports zero to its host for
    /// collapsed sections regardless of this value.
    fn row_count(&self, section: usize) -> usize;

    /// Returns the content for the row at the given address.
    ///
    /// Return [`ItemData::None`] for out-of-bounds addresses.
    fn content(&self, address: RowAddress) -> ItemData;

    /// Returns the header content for the given section.
    ///
    /// Return [`ItemData::None`] if the section has no header content.
    fn header(&self, section: usize) -> ItemData;
}

/// Receives interaction notifications and sizing queries from the view.
///
/// Every method has a default implementation, so observers implement only
/// what they care about. Height queries return `Option<f32>`, where `None`
/// means the host should fall back to its automatic sizing.
pub trait SectionObserver: Send + Sync {
    /// Asks for the height of the row at the given address.
    ///
    /// The default returns `None` (host-automatic sizing).
    fn row_height(&self, _address: RowAddress) -> Option<f32> {
        None
    }

    /// Asks for the height of the given section's header.
    ///
    /// The default returns `None` (host-automatic sizing).
    fn header_height(&self, _section: usize) -> Option<f32> {
        None
    }

    /// Called when the row at the given address was selected.
    fn row_selected(&self, _address: RowAddress) {}

    /// Called when the given section's header was selected.
    ///
    /// This is distinct from the header tap that toggles the section; hosts
    /// route taps to [`ExpandableListView::toggle_section`] and selection to
    /// this hook.
    ///
    /// [`ExpandableListView::toggle_section`]: crate::view::ExpandableListView::toggle_section
    fn header_selected(&self, _section: usize) {}

    /// Called just before the row at the given address is displayed.
    fn row_will_display(&self, _address: RowAddress) {}

    /// Called just before the given section's header is displayed.
    fn header_will_display(&self, _section: usize) {}
}
