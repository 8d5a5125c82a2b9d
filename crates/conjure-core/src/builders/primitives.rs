//! Boolean and identifier builders

use conjure_kernel::{Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext};
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

/// Alternates `true`, `false`, `true`, ... for `bool` type requests.
#[derive(Debug)]
pub struct BoolBuilder {
    next: AtomicBool,
}

impl BoolBuilder {
    /// An alternation starting at `true`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicBool::new(true),
        }
    }
}

impl Default for BoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecimenBuilder for BoolBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match request {
            Request::Type(key) if key.is::<bool>() => {
                Ok(Specimen::value(self.next.fetch_xor(true, Ordering::Relaxed)))
            }
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}

/// Fresh v4 identifiers for `Uuid` type requests.
#[derive(Debug, Default)]
pub struct UuidBuilder;

impl SpecimenBuilder for UuidBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match request {
            Request::Type(key) if key.is::<Uuid>() => Ok(Specimen::value(Uuid::new_v4())),
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}
