//! Text specimen builders

use conjure_kernel::{Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Produces unique strings.
///
/// A plain type request yields a fresh GUID; a seeded request yields the
/// seed followed by a GUID, so a value destined for a `name` member reads as
/// `name4f2c...`: recognizable in assertions, still unique.
#[derive(Debug, Default)]
pub struct StringBuilder;

impl SpecimenBuilder for StringBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match request {
            Request::Type(key) if key.is::<String>() => {
                Ok(Specimen::value(Uuid::new_v4().to_string()))
            }
            Request::Seeded { ty, seed } if ty.is::<String>() => {
                Ok(Specimen::value(format!("{seed}{}", Uuid::new_v4())))
            }
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}

/// Cycles through the lowercase alphabet for `char` type requests.
#[derive(Debug, Default)]
pub struct CharBuilder {
    counter: AtomicUsize,
}

impl CharBuilder {
    /// A cycle starting at `'a'`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpecimenBuilder for CharBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match request {
            Request::Type(key) if key.is::<char>() => {
                let n = self.counter.fetch_add(1, Ordering::Relaxed);
                #[allow(clippy::cast_possible_truncation)]
                let letter = char::from(b'a' + (n % 26) as u8);
                Ok(Specimen::value(letter))
            }
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}
