use crate::HullScalar;

/// The directed difference between two [points](super::Point).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Vector<R>(pub R, pub R);

impl<R: HullScalar> Vector<R> {
  /// Polar angle measured from the positive X axis, in the range (-π, π].
  ///
  /// Monotonic with the true polar angle on the closed upper half-plane.
  /// Undefined for the zero vector.
  pub fn angle(&self) -> R {
    self.1.atan2(self.0)
  }

  pub fn magnitude(&self) -> R {
    self.0.hypot(self.1)
  }

  pub fn squared_magnitude(&self) -> R {
    self.0 * self.0 + self.1 * self.1
  }
}
