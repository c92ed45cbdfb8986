// crates/shared-kernel/src/value_objects/concurrency.rs
use std::{fmt, num::NonZeroUsize};

/// Degree of parallelism for extraction workers. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Concurrency(NonZeroUsize);

impl Concurrency {
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Clamp `workers` to at least one.
    pub fn new(workers: usize) -> Self {
        NonZeroUsize::new(workers).map_or(Self::ONE, Self)
    }

    /// Available processing units minus one, floor one.
    pub fn detect() -> Self {
        Self::from_available(num_cpus::get())
    }

    /// Override when positive, otherwise fall back to [`Concurrency::detect`].
    pub fn or_detect(workers: Option<usize>) -> Self {
        match workers {
            Some(n) if n > 0 => Self::new(n),
            _ => Self::detect(),
        }
    }

    fn from_available(units: usize) -> Self {
        Self::new(units.saturating_sub(1))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Concurrency {
    fn default() -> Self {
        Self::detect()
    }
}

impl From<usize> for Concurrency {
    fn from(workers: usize) -> Self {
        Self::new(workers)
    }
}

impl fmt::Display for Concurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
