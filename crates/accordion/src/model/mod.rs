//! Model side of the expandable list: content supply and interaction hooks.
//!
//! # Core Types
//!
//! - [`RowAddress`]: Identifies a row's position (section, row offset)
//! - [`ItemData`]: Container for row and header content
//! - [`SectionModel`]: The trait content providers implement
//! - [`SectionObserver`]: The trait interaction observers implement
//! - [`SectionHeader`]: Descriptor handed to the host for header rendering
//!
//! The view never stores content. It consults its attached [`SectionModel`]
//! on every query, filtered through its own expanded-section set, and
//! forwards interaction events to its attached [`SectionObserver`]. Both
//! collaborators are optional: a partially configured view degrades to
//! neutral answers (zero counts, [`ItemData::None`], no-op notifications)
//! rather than failing.

mod data;
mod header;
mod index;
mod traits;

pub use data::ItemData;
pub use header::SectionHeader;
pub use index::RowAddress;
pub use traits::{SectionModel, SectionObserver};
