// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

//! Convex hulls of payload-carrying planar items.
//!
//! The caller supplies a collection of arbitrary items together with a pure
//! function mapping each item to its 2D location. [`algorithms::convex_hull`]
//! returns the subsequence of items that form the hull boundary,
//! counter-clockwise, starting at the bottom-most item.

use num_traits::float::FloatCore;
use num_traits::Float;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

/// Scalar type for 2D coordinates.
///
/// [`Float`] supplies `atan2` and `hypot` for the angle and distance
/// utilities; [`FloatCore`] is what [`ordered_float::OrderedFloat`] requires
/// to totally order sort keys. Satisfied by `f32` and `f64`.
pub trait HullScalar: Float + FloatCore {}

impl<T: Float + FloatCore> HullScalar for T {}
