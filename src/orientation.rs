use crate::data::Point;
use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Computed as the sign of twice the signed area of the triangle
  /// (shoelace formula):
  /// `(x1·y2 + x2·y3 + x3·y1) - (x2·y1 + x3·y2 + x1·y3)`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullscan::data::Point;
  /// # use hullscan::Orientation;
  /// let p1 = Point::new(0., 0.);
  /// let p2 = Point::new(0., 1.); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0., 2.)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1., 2.)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1., 2.)).is_cw());
  /// ```
  pub fn new<R>(p1: &Point<R>, p2: &Point<R>, p3: &Point<R>) -> Orientation
  where
    R: HullScalar,
  {
    let area = (p1.x * p2.y + p2.x * p3.y + p3.x * p1.y)
      - (p2.x * p1.y + p3.x * p2.y + p1.x * p3.y);
    if area > R::zero() {
      CounterClockWise
    } else if area < R::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shoelace_sign() {
    let a = Point::new(0., 0.);
    let b = Point::new(2., 0.);
    let c = Point::new(1., 1.);
    assert_eq!(Orientation::new(&a, &b, &c), CounterClockWise);
    assert_eq!(Orientation::new(&a, &c, &b), ClockWise);
    assert_eq!(Orientation::new(&a, &b, &Point::new(5., 0.)), CoLinear);
  }

  #[test]
  fn coincident_points_are_colinear() {
    let a = Point::new(3., 7.);
    assert!(Orientation::new(&a, &a, &a).is_colinear());
    assert!(Orientation::new(&a, &a, &Point::new(0., 0.)).is_colinear());
  }
}
