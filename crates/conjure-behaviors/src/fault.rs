//! Fault shielding
//!
//! Opt-in translation of the one clearly-scoped fault kind,
//! [`ResolveError::CannotConstruct`] ("this recognized request cannot
//! possibly be built"), back into the `NoSpecimen` sentinel. Wrapped around
//! a single builder before it joins a chain, this lets siblings keep being
//! tried; registered as a whole-graph behavior, it turns an unconstructible
//! resolution into an ordinary unresolved one. Faults indicating programming
//! errors ([`ResolveError::Configuration`], cycle reports) always propagate
//! untouched.

use crate::behavior::Behavior;
use conjure_kernel::{Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext};

/// Behavior translating "cannot construct" faults into `NoSpecimen`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FaultShieldBehavior;

impl FaultShieldBehavior {
    /// Create the shield.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for FaultShieldBehavior {
    fn transform<'a>(
        &self,
        builder: Box<dyn SpecimenBuilder + 'a>,
    ) -> Box<dyn SpecimenBuilder + 'a> {
        Box::new(FaultShieldBuilder { inner: builder })
    }
}

#[derive(Debug)]
struct FaultShieldBuilder<'a> {
    inner: Box<dyn SpecimenBuilder + 'a>,
}

impl SpecimenBuilder for FaultShieldBuilder<'_> {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match self.inner.create(request, context) {
            Err(err @ ResolveError::CannotConstruct { .. }) => {
                tracing::debug!(%err, "shielded construction fault");
                Ok(Specimen::NoSpecimen)
            }
            other => other,
        }
    }
}
