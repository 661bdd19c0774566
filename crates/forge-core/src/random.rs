//! The randomization engine.
//!
//! All entropy flows through a [`RandomSource`]. Production code uses
//! [`SeededRandom`] (OS-seeded unless a seed is given); tests substitute a
//! [`ScriptedRandom`] to replay an exact sequence of draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, CoreResult};

/// The fewest sides a die may have.
pub const MIN_SIDES: u32 = 2;

/// A provider of uniformly distributed integers.
pub trait RandomSource {
    /// Draw a value from `1..=upper`.
    ///
    /// Implementations treat an `upper` of 0 as 1.
    fn draw(&mut self, upper: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw(&mut self, upper: u32) -> u32 {
        (**self).draw(upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn draw(&mut self, upper: u32) -> u32 {
        (**self).draw(upper)
    }
}

/// A [`RandomSource`] backed by the standard RNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// A reproducible source for the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self, upper: u32) -> u32 {
        self.rng.random_range(1..=upper.max(1))
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values outside `1..=upper` are clamped into range, so a script never
/// produces an impossible face.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    index: usize,
}

impl ScriptedRandom {
    /// Replay `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }

    /// Always return `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&mut self, upper: u32) -> u32 {
        let upper = upper.max(1);
        if self.values.is_empty() {
            self.index += 1;
            return 1;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(1, upper)
    }
}

fn check_sides(sides: u32) -> CoreResult<()> {
    if sides < MIN_SIDES {
        return Err(CoreError::InvalidSides(sides));
    }
    Ok(())
}

/// Roll one die, returning a value in `1..=sides`.
///
/// Dice with fewer than [`MIN_SIDES`] sides are rejected.
pub fn roll_die<R: RandomSource + ?Sized>(source: &mut R, sides: u32) -> CoreResult<u32> {
    check_sides(sides)?;
    Ok(source.draw(sides))
}

/// Roll `count` independent dice, in call order.
pub fn roll_multiple<R: RandomSource + ?Sized>(
    source: &mut R,
    count: usize,
    sides: u32,
) -> CoreResult<Vec<u32>> {
    check_sides(sides)?;
    Ok((0..count).map(|_| source.draw(sides)).collect())
}

/// Choose one item uniformly, or `None` for an empty slice.
pub fn pick<'a, T, R: RandomSource + ?Sized>(source: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let upper = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let index = (source.draw(upper) - 1) as usize;
    items.get(index)
}
