//! View side of the expandable list: state, effects, and host signals.
//!
//! # Core Types
//!
//! - [`ExpandableListView`]: Owns the expanded-section set and derives what
//!   the host renders
//! - [`SectionsChanged`]: Scoped-reload effect payload
//! - [`RowAnimation`]: Opaque animation style forwarded with each reload

mod effect;
mod expandable;

pub use effect::{RowAnimation, SectionsChanged};
pub use expandable::ExpandableListView;
