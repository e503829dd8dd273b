/// Stat mechanics: the five tracked attributes and positional vectors over them.
use std::fmt;
use std::ops::{Index, Sub};

/// Number of tracked stats.
pub const STAT_COUNT: usize = 5;

/// Stat names in their fixed positional order.
pub const STAT_NAMES: [&str; STAT_COUNT] = ["agi", "int", "spi", "sta", "str"];

/// One of the five tracked character attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    Agi,
    Int,
    Spi,
    Sta,
    Str,
}

impl Stat {
    pub const ALL: [Stat; STAT_COUNT] = [Stat::Agi, Stat::Int, Stat::Spi, Stat::Sta, Stat::Str];

    /// Position of this stat inside a [`StatVector`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn name(self) -> &'static str {
        STAT_NAMES[self.index()]
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered tuple of five reals, one per stat, in `agi, int, spi, sta, str` order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatVector(pub [f64; STAT_COUNT]);

impl StatVector {
    pub const ZERO: StatVector = StatVector([0.0; STAT_COUNT]);

    #[inline]
    pub fn new(agi: f64, int: f64, spi: f64, sta: f64, str: f64) -> Self {
        Self([agi, int, spi, sta, str])
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Apply `f` to every component, keeping positions.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self(self.0.map(&mut f))
    }

    /// Componentwise combination with another vector.
    #[inline]
    pub fn zip_with(self, other: StatVector, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        let mut out = [0.0; STAT_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = f(self.0[i], other.0[i]);
        }
        Self(out)
    }

    /// Values as integers, truncated toward zero.
    #[inline]
    pub fn truncated(&self) -> [i64; STAT_COUNT] {
        self.0.map(|v| v.trunc() as i64)
    }
}

impl Index<Stat> for StatVector {
    type Output = f64;
    fn index(&self, stat: Stat) -> &f64 {
        &self.0[stat.index()]
    }
}

impl Index<usize> for StatVector {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Sub for StatVector {
    type Output = StatVector;
    fn sub(self, rhs: StatVector) -> StatVector {
        self.zip_with(rhs, |a, b| a - b)
    }
}
