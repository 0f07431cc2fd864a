use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::orientation::Orientation;
use crate::HullScalar;

mod sub;

/// A location in the plane.
///
/// Equality is exact value equality; there is no tolerance anywhere in this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point<R> {
  pub x: R,
  pub y: R,
}

// Random sampling.
impl<R> Distribution<Point<R>> for Standard
where
  Standard: Distribution<R>,
{
  fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> Point<R> {
    Point {
      x: rng.gen(),
      y: rng.gen(),
    }
  }
}

impl<R> Point<R> {
  pub const fn new(x: R, y: R) -> Point<R> {
    Point { x, y }
  }
}

impl<R: HullScalar> Point<R> {
  /// Euclidean distance to `other`.
  pub fn distance_to(&self, other: &Point<R>) -> R {
    (self - other).magnitude()
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `q` to `r`. See [`Orientation::new`].
  pub fn orientation(&self, q: &Point<R>, r: &Point<R>) -> Orientation {
    Orientation::new(self, q, r)
  }
}

impl<R> From<(R, R)> for Point<R> {
  fn from((x, y): (R, R)) -> Point<R> {
    Point { x, y }
  }
}
