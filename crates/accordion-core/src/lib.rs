//! Core primitives for the accordion view-state engine.
//!
//! This crate carries the plumbing that the model/view layer in the
//! `accordion` crate is built on:
//!
//! - [`Signal`] - a type-safe signal/slot mechanism used by view-state
//!   objects to notify their host of required re-renders
//! - [`ConnectionId`] / [`ConnectionGuard`] - connection management
//! - [`Error`] - errors for the signal surface
//!
//! # Example
//!
//! ```
//! use accordion_core::Signal;
//!
//! let section_toggled = Signal::<usize>::new();
//!
//! let id = section_toggled.connect(|&section| {
//!     println!("section {section} toggled");
//! });
//!
//! section_toggled.emit(3);
//! section_toggled.disconnect(id);
//! ```

mod error;
mod signal;

pub use error::{Error, Result};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
