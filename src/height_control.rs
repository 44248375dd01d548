use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{MAX_HEIGHT, UPGRADE_PROBABILITY};

/// Chooses the height of every node inserted into a
/// [`SkipList`](crate::SkipList).
///
/// Heights are 1-based: a node of height `h` is linked at levels `0..h`.
/// Implementations must return a value in `[1, max_height()]`.
pub trait HeightControl {
    fn max_height(&self) -> usize;
    fn get_height(&mut self, element: &str) -> usize;
}

pub struct GeometricalGenerator<R = StdRng> {
    upgrade_probability_: f64,
    max_height_: usize,
    rng_: R,
}

impl GeometricalGenerator<StdRng> {
    /// Generator with the default shape (`MAX_HEIGHT` levels, promotion
    /// probability 1/4) seeded from the operating system.
    pub fn new() -> GeometricalGenerator<StdRng> {
        GeometricalGenerator::from_rng(MAX_HEIGHT, UPGRADE_PROBABILITY, StdRng::from_entropy())
    }

    /// Same as `new`, but reproducible.
    pub fn with_seed(seed: u64) -> GeometricalGenerator<StdRng> {
        GeometricalGenerator::from_rng(MAX_HEIGHT, UPGRADE_PROBABILITY, StdRng::seed_from_u64(seed))
    }
}

impl Default for GeometricalGenerator<StdRng> {
    fn default() -> Self {
        GeometricalGenerator::new()
    }
}

impl<R: Rng> GeometricalGenerator<R> {
    pub fn from_rng(max_height: usize, upgrade_probability: f64, rng: R) -> GeometricalGenerator<R> {
        assert!(max_height > 0);
        assert!(upgrade_probability > 0.0 && upgrade_probability < 1.0);

        GeometricalGenerator {
            upgrade_probability_: upgrade_probability,
            max_height_: max_height,
            rng_: rng,
        }
    }
}

impl<R: Rng> HeightControl for GeometricalGenerator<R> {
    #[inline(always)]
    fn max_height(&self) -> usize {
        self.max_height_
    }

    fn get_height(&mut self, _element: &str) -> usize {
        // Simulates a random variate with geometric distribution: one level
        // for free, plus one more for every successful throw.
        let mut h = 1;

        while h < self.max_height_ && self.rng_.gen::<f64>() < self.upgrade_probability_ {
            h += 1;
        }

        h
    }
}

// 'HashCoinGenerator' derives the height from a hash of the element and counts
// trailing zeros. Two zero bits make one successful throw with probability 1/4,
// so P(height >= k) = (1/4)^(k - 1), matching 'GeometricalGenerator' with the
// default probability while being fully deterministic per element.
pub struct HashCoinGenerator<S = BuildHasherDefault<DefaultHasher>> {
    max_height_: usize,
    hash_builder_: S,
}

impl HashCoinGenerator {
    pub fn new(max_height: usize) -> HashCoinGenerator {
        HashCoinGenerator::with_hasher(max_height, BuildHasherDefault::default())
    }
}

impl<S: BuildHasher> HashCoinGenerator<S> {
    pub fn with_hasher(max_height: usize, hash_builder: S) -> HashCoinGenerator<S> {
        assert!(max_height > 0);
        HashCoinGenerator {
            max_height_: max_height,
            hash_builder_: hash_builder,
        }
    }
}

impl<S: BuildHasher> HeightControl for HashCoinGenerator<S> {
    #[inline(always)]
    fn max_height(&self) -> usize {
        self.max_height_
    }

    fn get_height(&mut self, element: &str) -> usize {
        let throws = self.hash_builder_.hash_one(element).trailing_zeros() as usize / 2;
        std::cmp::min(1 + throws, self.max_height_)
    }
}

/// Replays a fixed list of heights, starting over once it runs out. Heights
/// are clamped into `[1, max_height]`. Mostly useful to build exact shapes in
/// tests.
pub struct SequenceGenerator {
    heights_: Vec<usize>,
    position_: usize,
    max_height_: usize,
}

impl SequenceGenerator {
    pub fn new(heights: Vec<usize>) -> SequenceGenerator {
        SequenceGenerator::with_max_height(heights, MAX_HEIGHT)
    }

    pub fn with_max_height(heights: Vec<usize>, max_height: usize) -> SequenceGenerator {
        assert!(!heights.is_empty());
        assert!(max_height > 0);

        SequenceGenerator {
            heights_: heights,
            position_: 0,
            max_height_: max_height,
        }
    }
}

impl HeightControl for SequenceGenerator {
    #[inline(always)]
    fn max_height(&self) -> usize {
        self.max_height_
    }

    fn get_height(&mut self, _element: &str) -> usize {
        let height = self.heights_[self.position_];
        self.position_ = (self.position_ + 1) % self.heights_.len();
        height.clamp(1, self.max_height_)
    }
}
