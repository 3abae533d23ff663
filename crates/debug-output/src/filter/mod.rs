//! crates/debug-output/src/filter/mod.rs
//! Filter store: per-level default tables and per-namespace ID state.
//!
//! A [`FilterLevel`] holds everything one group level needs to decide
//! whether a message passes. Its [`Namespace`] tables keep an entry per
//! observed ID plus one ID list per severity, so bulk control touches only
//! the IDs first seen at the targeted severity instead of scanning every
//! entry.

mod defaults;
mod level;
mod namespace;

pub use defaults::DefaultTable;
pub use level::FilterLevel;
pub use namespace::{FilterEntry, Namespace};
