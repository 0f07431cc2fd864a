use std::cmp::Ordering;

use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::data::Point;
use crate::orientation::Orientation;
use crate::HullScalar;

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All returned items come from the input set.
//    No input location is outside the returned boundary.
/// $O(n \log n)$ Convex hull of a set of payload-carrying items.
///
/// [Graham scan][wiki] over arbitrary items: `location` maps each item to
/// its point in the plane and must be pure for the duration of the call.
/// The hull is returned as a subsequence of `items`, counter-clockwise,
/// starting at the item with the minimum Y coordinate (ties broken by
/// minimum X).
///
/// Inputs of two or fewer items are returned verbatim, with no hull
/// reduction. Items sharing the exact location of the bottom-most item are
/// dropped from the output; callers that care about coincident duplicates
/// must deduplicate beforehand.
///
/// An item lying exactly on the straight segment between two hull vertices
/// is retained when the radial order places it there; no collinear
/// elimination pass runs over the boundary.
///
/// # Properties
/// * No input locations are outside the returned boundary.
/// * All returned items are from the input set.
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use hullscan::algorithms::convex_hull;
/// # use hullscan::data::Point;
/// let square = vec![
///   Point::new(1., 1.),
///   Point::new(172., 1.),
///   Point::new(172., 287.),
///   Point::new(1., 287.),
/// ];
/// let hull = convex_hull(square.clone(), |&p: &Point<f64>| p);
/// assert_eq!(hull, square);
/// # }
/// ```
///
/// ```rust
/// # pub fn main() {
/// # use hullscan::algorithms::convex_hull;
/// # use hullscan::data::Point;
/// struct Beacon {
///   id: u32,
///   at: Point<f64>,
/// }
/// let beacons = vec![
///   Beacon { id: 1, at: Point::new(0., 0.) },
///   Beacon { id: 2, at: Point::new(2., 0.) },
///   Beacon { id: 3, at: Point::new(1., 1.) }, // interior
///   Beacon { id: 4, at: Point::new(2., 3.) },
///   Beacon { id: 5, at: Point::new(0., 3.) },
/// ];
/// let hull = convex_hull(beacons, |b| b.at);
/// let ids: Vec<u32> = hull.iter().map(|b| b.id).collect();
/// assert_eq!(ids, vec![1, 2, 4, 5]);
/// # }
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T, R, F>(items: Vec<T>, location: F) -> Vec<T>
where
  R: HullScalar,
  F: Fn(&T) -> Point<R>,
{
  convex_hull_with_max_edge_length(items, location, <R as Float>::infinity())
}

/// [`convex_hull`] with an explicit `max_edge_length`.
///
/// `max_edge_length` is accepted for interface stability and currently
/// ignored: hull edges are not subdivided or constrained by it. Callers
/// without an edge bound should use [`convex_hull`], which passes infinity.
pub fn convex_hull_with_max_edge_length<T, R, F>(
  items: Vec<T>,
  location: F,
  max_edge_length: R,
) -> Vec<T>
where
  R: HullScalar,
  F: Fn(&T) -> Point<R>,
{
  let _ = max_edge_length;
  if items.len() <= 2 {
    return items;
  }
  let sorted = radial_sort(items, &location);
  scan_boundary(sorted, &location)
}

// Canonical scan order: the bottom-most item first, the rest by polar angle
// around it, angle ties farthest-first. Items coinciding with the anchor
// have no defined angle and are dropped.
fn radial_sort<T, R, F>(mut items: Vec<T>, location: &F) -> Vec<T>
where
  R: HullScalar,
  F: Fn(&T) -> Point<R>,
{
  let anchor_idx = match anchor_index(&items, location) {
    Some(idx) => idx,
    None => return items,
  };
  let anchor = items.swap_remove(anchor_idx);
  let anchor_loc = location(&anchor);

  let mut sorted = Vec::with_capacity(items.len() + 1);
  sorted.push(anchor);
  sorted.extend(items.into_iter().filter(|item| location(item) != anchor_loc));

  // Every non-anchor location is in the closed upper half-plane around the
  // anchor, and the (y, x) anchor rule excludes the angle-pi ray, so the
  // orientation sign is a total angle comparison and exact wherever the
  // coordinates are.
  sorted[1..].sort_by(|a, b| {
    let a_loc = location(a);
    let b_loc = location(b);
    match anchor_loc.orientation(&a_loc, &b_loc) {
      Orientation::CounterClockWise => Ordering::Less,
      Orientation::ClockWise => Ordering::Greater,
      Orientation::CoLinear => {
        let a_dist = (a_loc - anchor_loc).squared_magnitude();
        let b_dist = (b_loc - anchor_loc).squared_magnitude();
        OrderedFloat(b_dist).cmp(&OrderedFloat(a_dist))
      }
    }
  });
  sorted
}

// Minimum-Y item, ties broken by minimum X.
fn anchor_index<T, R, F>(items: &[T], location: &F) -> Option<usize>
where
  R: HullScalar,
  F: Fn(&T) -> Point<R>,
{
  items
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      let a_loc = location(a);
      let b_loc = location(b);
      OrderedFloat(a_loc.y)
        .cmp(&OrderedFloat(b_loc.y))
        .then_with(|| OrderedFloat(a_loc.x).cmp(&OrderedFloat(b_loc.x)))
    })
    .map(|(idx, _)| idx)
}

// Left-to-right scan with an explicit stack. Each step inspects the top two
// stack items against the next unconsumed item:
//  * left turn: accept `next`;
//  * otherwise, with more than two items stacked: backtrack by discarding
//    the top, without consuming `next`;
//  * otherwise the anchor, the first sorted item, and `next` are collinear.
//    `next` sits between the other two in the radial order (angle ties sort
//    farthest-first), so it is skipped.
// The stack never shrinks below two items, and the anchor is never popped.
fn scan_boundary<T, R, F>(sorted: Vec<T>, location: &F) -> Vec<T>
where
  R: HullScalar,
  F: Fn(&T) -> Point<R>,
{
  let mut stack: Vec<T> = Vec::with_capacity(sorted.len());
  let mut rest = sorted.into_iter().peekable();
  while stack.len() < 2 {
    match rest.next() {
      Some(item) => stack.push(item),
      // Coincident inputs collapse to the anchor alone.
      None => return stack,
    }
  }

  while let Some(next) = rest.peek() {
    let next_loc = location(next);
    let top_loc = location(&stack[stack.len() - 1]);
    let second_loc = location(&stack[stack.len() - 2]);
    if second_loc.orientation(&top_loc, &next_loc).is_ccw() {
      if let Some(item) = rest.next() {
        stack.push(item);
      }
    } else if stack.len() > 2 {
      stack.pop();
    } else {
      rest.next();
    }
  }
  // Bottom to top, the stack is the boundary in counter-clockwise order.
  stack
}
