#![deny(clippy::unwrap_used)]
//! A small two-dimensional vector value type.
//!
//! ```
//! use planar::Vector2;
//!
//! let mut a = Vector2::new(3., 4.);
//! assert_eq!(a + Vector2::new(1., 2.), Vector2::new(4., 6.));
//! assert_eq!(a.length(), 5.);
//! assert_eq!(*a.normalize(), Vector2::new(0.6, 0.8));
//! ```
pub mod math;

pub use math::{approx_eq, Vector2, ABS_TOLERANCE, REL_TOLERANCE};
