//! **tilepath-core** — geometry types shared by the *tilepath* crates.
//!
//! Provides [`Point`], an integer tile coordinate, and [`Range`], a
//! half-open rectangle with row-major indexing.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
