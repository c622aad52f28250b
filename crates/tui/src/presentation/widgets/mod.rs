//! Widget modules for UI rendering.
//!
//! Each widget is a pure function reading the store and UI state and
//! drawing into a frame; none of them mutate anything.

pub mod footer;
pub mod form;
pub mod header;
pub mod records;
pub mod status;
