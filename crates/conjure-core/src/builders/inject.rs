//! Constant injection

use conjure_kernel::{Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext};
use std::any::Any;
use std::fmt;

/// Answers every request targeting `T` with a clone of one fixed value.
///
/// The constant-injection primitive: prepended at the highest priority it
/// shadows every default for its type, for plain, seeded, and member
/// requests alike. Usually installed through
/// [`crate::customization::InjectValue`] or `Fixture::inject`.
#[derive(Debug)]
pub struct InjectedBuilder<T> {
    value: T,
}

impl<T> InjectedBuilder<T>
where
    T: Any + Clone + Send + Sync + fmt::Debug,
{
    /// Wrap the constant.
    #[inline]
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> SpecimenBuilder for InjectedBuilder<T>
where
    T: Any + Clone + Send + Sync + fmt::Debug,
{
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        if request.target().is::<T>() {
            return Ok(Specimen::value(self.value.clone()));
        }
        Ok(Specimen::NoSpecimen)
    }
}
