//! Geometry exercises for the kata ecosystem.
//!
//! - **Triangle classification** — [`is_equilateral`], [`is_isosceles`], [`is_scalene`]
//!
//! # Example
//!
//! ```
//! use kata_geom::{is_equilateral, is_isosceles, is_scalene};
//!
//! assert!(is_equilateral(2, 2, 2));
//! assert!(is_isosceles(3, 4, 4));
//! assert!(is_scalene(3, 4, 5));
//!
//! // Degenerate sides fail every predicate, without erroring
//! assert!(!is_isosceles(1, 1, 3));
//! ```

pub mod triangle;

pub use triangle::{is_equilateral, is_isosceles, is_scalene};
