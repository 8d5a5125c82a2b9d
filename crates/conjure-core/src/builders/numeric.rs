//! Numeric specimen builders

use conjure_kernel::{
    Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext, TypeKey,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NUMERIC_KEYS: Lazy<[TypeKey; 12]> = Lazy::new(|| {
    [
        TypeKey::of::<u8>(),
        TypeKey::of::<u16>(),
        TypeKey::of::<u32>(),
        TypeKey::of::<u64>(),
        TypeKey::of::<usize>(),
        TypeKey::of::<i8>(),
        TypeKey::of::<i16>(),
        TypeKey::of::<i32>(),
        TypeKey::of::<i64>(),
        TypeKey::of::<isize>(),
        TypeKey::of::<f32>(),
        TypeKey::of::<f64>(),
    ]
});

fn is_numeric(key: TypeKey) -> bool {
    NUMERIC_KEYS.contains(&key)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn numeric_specimen(key: TypeKey, n: u64) -> Specimen {
    macro_rules! emit {
        ($($t:ty),+ $(,)?) => {
            $(
                if key.is::<$t>() {
                    return Specimen::value(n as $t);
                }
            )+
        };
    }
    emit!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
    Specimen::NoSpecimen
}

/// Yields 1, 2, 3, ... for type requests of every primitive numeric type.
///
/// One counter is shared across all numeric types, so values stay unique
/// across a burst regardless of which types were asked for. Narrow types
/// wrap: the 256th `u8` is 0 again.
#[derive(Debug, Default)]
pub struct NumberSequenceBuilder {
    counter: AtomicU64,
}

impl NumberSequenceBuilder {
    /// A sequence starting at 1.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpecimenBuilder for NumberSequenceBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match request {
            Request::Type(key) if is_numeric(*key) => {
                let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
                Ok(numeric_specimen(*key, n))
            }
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}

/// Yields uniformly random positive values for type requests of every
/// primitive numeric type, replacing the sequential default when installed
/// via the random-numerics customization.
pub struct RandomNumericBuilder {
    rng: Mutex<StdRng>,
}

impl RandomNumericBuilder {
    /// Randomness from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// A reproducible stream for deterministic tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomNumericBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomNumericBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomNumericBuilder").finish_non_exhaustive()
    }
}

impl SpecimenBuilder for RandomNumericBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        let Request::Type(key) = request else {
            return Ok(Specimen::NoSpecimen);
        };
        let mut rng = self.rng.lock();
        macro_rules! emit {
            ($($t:ty),+ $(,)?) => {
                $(
                    if key.is::<$t>() {
                        let value: $t = rng.random_range(1..=<$t>::MAX);
                        return Ok(Specimen::value(value));
                    }
                )+
            };
        }
        emit!(u8, u16, u32, u64, usize, i8, i16, i32, i64);
        if key.is::<isize>() {
            // `isize` does not implement `SampleUniform` in rand 0.9, so sample
            // over a wider integer that does and narrow back — the value range
            // (1..=isize::MAX) is unchanged, so this is distribution-identical.
            let value = rng.random_range(1i128..=isize::MAX as i128) as isize;
            return Ok(Specimen::value(value));
        }
        if key.is::<f32>() {
            return Ok(Specimen::value(rng.random_range(1.0f32..1000.0)));
        }
        if key.is::<f64>() {
            return Ok(Specimen::value(rng.random_range(1.0f64..1000.0)));
        }
        Ok(Specimen::NoSpecimen)
    }
}
