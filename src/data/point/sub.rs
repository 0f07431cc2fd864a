use std::ops::Sub;

use super::Point;
use crate::data::Vector;
use crate::HullScalar;

// point - point = vector
impl<'a, 'b, R: HullScalar> Sub<&'a Point<R>> for &'b Point<R> {
  type Output = Vector<R>;

  fn sub(self: &'b Point<R>, other: &'a Point<R>) -> Self::Output {
    Vector(self.x - other.x, self.y - other.y)
  }
}

impl<R: HullScalar> Sub<Point<R>> for Point<R> {
  type Output = Vector<R>;

  fn sub(self: Point<R>, other: Point<R>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
