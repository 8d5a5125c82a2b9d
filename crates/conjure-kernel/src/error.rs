//! Error types for the resolution engine
//!
//! "Not my request" is not an error; builders signal that with
//! [`crate::Specimen::NoSpecimen`]. The variants here are reserved for
//! conditions the chain cannot route around on its own: a detected cycle, a
//! recognized-but-unconstructible request, and genuine configuration faults.

use crate::request::Request;

/// Faults raised during a resolution burst.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The request is already being resolved on the current call stack.
    ///
    /// Remediation differs from plain unresolvability: break the cycle with
    /// an explicit override rather than registering another builder.
    #[error("resolution cycle: {request} is already being resolved")]
    CycleDetected {
        /// The request that re-entered the chain.
        request: Request,
    },

    /// A builder recognized the request but cannot possibly construct it.
    ///
    /// This is the one fault kind the opt-in fault-shield behavior may
    /// translate back into `NoSpecimen` so the chain keeps trying
    /// alternatives.
    #[error("cannot construct {request}: {reason}")]
    CannotConstruct {
        /// The recognized request.
        request: Request,
        /// Why construction is impossible.
        reason: String,
    },

    /// The engine was assembled incorrectly. Never swallowed.
    #[error("invalid engine configuration: {0}")]
    Configuration(String),
}

impl ResolveError {
    /// Shorthand for [`ResolveError::CannotConstruct`].
    #[must_use]
    pub fn cannot_construct(request: &Request, reason: impl Into<String>) -> Self {
        ResolveError::CannotConstruct {
            request: request.clone(),
            reason: reason.into(),
        }
    }

    /// Whether this is a detected cycle.
    #[inline]
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        matches!(self, ResolveError::CycleDetected { .. })
    }

    /// Whether this is the shieldable "cannot construct" fault.
    #[inline]
    #[must_use]
    pub fn is_cannot_construct(&self) -> bool {
        matches!(self, ResolveError::CannotConstruct { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_and_construction_faults_are_distinguishable() {
        let request = Request::of::<u32>();
        let cycle = ResolveError::CycleDetected {
            request: request.clone(),
        };
        let fault = ResolveError::cannot_construct(&request, "no constructor");

        assert!(cycle.is_cycle());
        assert!(!cycle.is_cannot_construct());
        assert!(fault.is_cannot_construct());
        assert!(!fault.is_cycle());
    }

    #[test]
    fn error_text_names_the_request() {
        let err = ResolveError::cannot_construct(&Request::of::<String>(), "abstract");
        assert_eq!(err.to_string(), "cannot construct String: abstract");
    }
}
