pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::graham_scan::{convex_hull, convex_hull_with_max_edge_length};
