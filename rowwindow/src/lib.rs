//! A headless row-windowing engine.
//!
//! Given a row count, a per-row size estimate, a viewport size and a scroll
//! offset, [`RowWindow`] computes the subset of rows that must actually be
//! materialized at any moment: the visible window plus an overscan margin,
//! each row carrying its start offset and size, plus the total scroll track
//! size so scrollbar proportions stay accurate.
//!
//! It is UI-agnostic. A host display layer is expected to provide:
//! - the measured height of the scroll container
//! - the current scroll offset
//! - per-row size estimates and (optionally) dynamic measurements
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod offsets;
mod options;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use options::WindowOptions;
pub use types::{VirtualItem, VirtualRange};
pub use window::RowWindow;
