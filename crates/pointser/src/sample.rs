//! Seeded sample collections.
//!
//! Model
//! - Each element is independently a flat point or a 3D point, drawn by
//!   `KindWeights`; coordinates are uniform over `[coord_min, coord_max]`.
//! - The default mirrors the original "create" action: 5 elements, flat with
//!   weight 2 and 3D with weight 1.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   a front end can regenerate exactly the collection it showed earlier.
//!
//! The codecs and the sorter do not depend on this module.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Point, Point3D, PointVariant};

/// Relative weights of the two variants. Both zero means all flat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindWeights {
    pub point: u32,
    pub point3d: u32,
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            point: 2,
            point3d: 1,
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    /// Inclusive coordinate bounds; swapped if given in the wrong order.
    pub coord_min: i32,
    pub coord_max: i32,
    pub weights: KindWeights,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 5,
            coord_min: -100,
            coord_max: 100,
            weights: KindWeights::default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a collection of `cfg.count` points.
pub fn generate(cfg: SampleCfg, tok: ReplayToken) -> Vec<PointVariant> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count).map(|_| draw_one(&cfg, &mut rng)).collect()
}

fn draw_one<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> PointVariant {
    let lo = cfg.coord_min.min(cfg.coord_max);
    let hi = cfg.coord_min.max(cfg.coord_max);
    let w = cfg.weights;
    let total = w.point.saturating_add(w.point3d).max(1);
    let is_3d = rng.gen_range(0..total) < w.point3d;
    let x = rng.gen_range(lo..=hi);
    let y = rng.gen_range(lo..=hi);
    if is_3d {
        Point3D::new(x, y, rng.gen_range(lo..=hi)).into()
    } else {
        Point::new(x, y).into()
    }
}
