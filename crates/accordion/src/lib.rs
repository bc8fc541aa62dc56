//! Headless expandable section-list state for model/view UIs.
//!
//! This crate provides [`ExpandableListView`](view::ExpandableListView), a
//! view-state object for lists whose sections can be independently expanded
//! and collapsed. It owns the set of expanded sections and the rules deriving
//! visible row counts from it; everything else (cell rendering, layout,
//! animation, scrolling) belongs to the embedding host.
//!
//! # Architecture
//!
//! The Model/View split follows the classic pattern: a
//! [`SectionModel`](model::SectionModel) supplies section/row counts and
//! content, a [`SectionObserver`](model::SectionObserver) receives
//! interaction notifications, and the view emits signals telling the host
//! which sections need a scoped, animated re-render.
//!
//! ```text
//! ┌──────────────┐      ┌─────────────────────┐      ┌──────────────┐
//! │ SectionModel │─────>│  ExpandableListView │─────>│  Host render │
//! │  (content)   │      │  (expanded set)     │      │  surface     │
//! └──────────────┘      └─────────────────────┘      └──────────────┘
//!                                │
//!                                v
//!                        ┌────────────────┐
//!                        │ SectionObserver│
//!                        │ (interaction)  │
//!                        └────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use accordion::model::{ItemData, RowAddress, SectionModel};
//! use accordion::view::ExpandableListView;
//!
//! struct Contacts {
//!     groups: Vec<(String, Vec<String>)>,
//! }
//!
//! impl SectionModel for Contacts {
//!     fn section_count(&self) -> usize {
//!         self.groups.len()
//!     }
//!
//!     fn row_count(&self, section: usize) -> usize {
//!         self.groups.get(section).map_or(0, |(_, rows)| rows.len())
//!     }
//!
//!     fn content(&self, address: RowAddress) -> ItemData {
//!         self.groups
//!             .get(address.section())
//!             .and_then(|(_, rows)| rows.get(address.row()))
//!             .map_or(ItemData::None, ItemData::from)
//!     }
//!
//!     fn header(&self, section: usize) -> ItemData {
//!         self.groups
//!             .get(section)
//!             .map_or(ItemData::None, |(title, _)| ItemData::from(title))
//!     }
//! }
//!
//! let model = Arc::new(Contacts {
//!     groups: vec![
//!         ("Family".into(), vec!["Ana".into(), "Bee".into()]),
//!         ("Work".into(), vec!["Cal".into()]),
//!     ],
//! });
//!
//! let mut view = ExpandableListView::new().with_model(model);
//!
//! // All sections start collapsed.
//! assert_eq!(view.visible_row_count(0), 0);
//!
//! // The host re-renders whatever sections the view reports.
//! view.sections_changed.connect(|change| {
//!     println!("reload sections {:?} with {:?}", change.sections, change.animation);
//! });
//!
//! view.toggle_section(0);
//! assert_eq!(view.visible_row_count(0), 2);
//! ```

pub mod model;
pub mod view;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::model::{ItemData, RowAddress, SectionHeader, SectionModel, SectionObserver};
    pub use crate::view::{ExpandableListView, RowAnimation, SectionsChanged};
    pub use accordion_core::Signal;
}
