//! Error types for the fixture facade

use conjure_kernel::{Request, ResolveError};

/// Failures surfaced by the [`crate::Fixture`] facade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    /// No registered builder recognized the request.
    ///
    /// This is the one place the `NoSpecimen` sentinel becomes a visible
    /// failure; everywhere below the facade it is ordinary chain-control
    /// data. Remediation: register a builder for the request.
    #[error("unresolvable request: no registered builder could satisfy {request}")]
    Unresolvable {
        /// The request nothing could satisfy.
        request: Request,
    },

    /// A builder answered the request with a value of a different type.
    #[error("specimen for {request} has type {produced}, not the requested type")]
    SpecimenType {
        /// The original request.
        request: Request,
        /// Static name of the type actually produced.
        produced: &'static str,
    },

    /// A fault from the resolution engine: a detected cycle, an
    /// unconstructible request, or a configuration error. Propagated
    /// unmodified.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl FixtureError {
    /// Whether this is plain unresolvability (register a builder to fix).
    #[inline]
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, FixtureError::Unresolvable { .. })
    }

    /// Whether this is a detected cycle (break it with an override to fix).
    #[inline]
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        matches!(self, FixtureError::Resolve(err) if err.is_cycle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_and_unresolvable_are_distinguishable() {
        let request = Request::of::<u32>();
        let unresolvable = FixtureError::Unresolvable {
            request: request.clone(),
        };
        let cycle = FixtureError::from(ResolveError::CycleDetected { request });

        assert!(unresolvable.is_unresolvable());
        assert!(!unresolvable.is_cycle());
        assert!(cycle.is_cycle());
        assert!(!cycle.is_unresolvable());
    }
}
