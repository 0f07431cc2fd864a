use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use hullscan::algorithms::convex_hull;
use hullscan::data::Point;

fn gen_points<R>(rng: &mut R, n: usize) -> Vec<Point<f64>>
where
  R: Rng + ?Sized,
{
  (0..n).map(|_| rng.gen()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::thread_rng();
  let p3 = gen_points(&mut rng, 1_000);
  let p4 = gen_points(&mut rng, 10_000);
  c.bench_function("convex_hull(1e3)", |b| {
    b.iter(|| convex_hull(p3.clone(), |&p: &Point<f64>| p))
  });
  c.bench_function("convex_hull(1e4)", |b| {
    b.iter(|| convex_hull(p4.clone(), |&p: &Point<f64>| p))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
