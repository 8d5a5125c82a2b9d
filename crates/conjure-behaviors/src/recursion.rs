//! Recursion guarding
//!
//! Self-referencing data shapes (a type containing a member of its own type)
//! would otherwise recurse until the call stack overflows. The guard keys an
//! in-flight set on structural request equality, scoped to one top-level
//! resolve call: seeing a request that is already in flight short-circuits
//! with a cycle report instead of delegating further. Re-resolving the same
//! request shape at unrelated times (a later top-level call, or after the
//! first occurrence has fully unwound) stays legitimate.

use crate::behavior::Behavior;
use conjure_kernel::{Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext};

/// Behavior short-circuiting cyclic resolutions.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursionGuardBehavior;

impl RecursionGuardBehavior {
    /// Create the guard.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for RecursionGuardBehavior {
    fn transform<'a>(
        &self,
        builder: Box<dyn SpecimenBuilder + 'a>,
    ) -> Box<dyn SpecimenBuilder + 'a> {
        Box::new(RecursionGuardBuilder { inner: builder })
    }
}

#[derive(Debug)]
struct RecursionGuardBuilder<'a> {
    inner: Box<dyn SpecimenBuilder + 'a>,
}

impl SpecimenBuilder for RecursionGuardBuilder<'_> {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        let scope = context.scope();
        if scope.is_in_flight(request) {
            tracing::debug!(%request, "cycle detected");
            return Err(ResolveError::CycleDetected {
                request: request.clone(),
            });
        }
        scope.begin(request.clone());
        let result = self.inner.create(request, context);
        // Popped on every exit path so later resolutions of the same shape
        // stay legitimate.
        scope.end(request);
        result
    }
}
