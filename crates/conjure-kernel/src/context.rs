//! Specimen context
//!
//! The single entry point builders use to resolve nested requests. Every
//! nested `resolve` restarts the chain from the root (the outermost
//! behavior wrapper), so cross-cutting concerns observe every resolution,
//! not just the top-level one.
//!
//! A context is created per top-level call and carries that call's
//! [`ResolutionScope`]: the recursion depth and the in-flight request stack
//! behaviors key their per-call state on. Concurrent top-level resolutions
//! each build their own context, so scopes are never shared.

use crate::builder::SpecimenBuilder;
use crate::error::ResolveError;
use crate::request::Request;
use crate::specimen::Specimen;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};

/// Per-top-level-call resolution state.
///
/// Owned by the context rather than by any behavior so that unrelated
/// top-level calls can never observe each other's in-flight requests.
#[derive(Debug, Default)]
pub struct ResolutionScope {
    depth: Cell<usize>,
    in_flight: RefCell<SmallVec<[Request; 8]>>,
}

impl ResolutionScope {
    /// Current nesting depth: 1 inside the top-level resolve, 2 inside its
    /// first sub-request, and so on. 0 outside any resolution.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Whether a structurally-equal request is currently being resolved on
    /// this call stack.
    #[must_use]
    pub fn is_in_flight(&self, request: &Request) -> bool {
        self.in_flight.borrow().contains(request)
    }

    /// Mark a request as in flight. Paired with [`ResolutionScope::end`].
    pub fn begin(&self, request: Request) {
        self.in_flight.borrow_mut().push(request);
    }

    /// Unmark a request, whether its resolution succeeded or failed.
    pub fn end(&self, request: &Request) {
        let mut stack = self.in_flight.borrow_mut();
        if let Some(position) = stack.iter().rposition(|r| r == request) {
            stack.remove(position);
        }
    }

    /// Number of requests currently in flight.
    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.borrow().len()
    }
}

/// The re-entrant resolution facade passed to builders.
///
/// Holds a reference to the root of the (behavior-wrapped) builder graph and
/// the per-call [`ResolutionScope`]. `resolve` is referentially transparent
/// for a fixed graph and fixed recursion state: deterministic builders yield
/// the same specimen for the same request on every call.
#[derive(Debug)]
pub struct SpecimenContext<'a> {
    root: &'a dyn SpecimenBuilder,
    scope: ResolutionScope,
}

impl<'a> SpecimenContext<'a> {
    /// Create a context for one top-level resolution (and its sub-requests).
    #[must_use]
    pub fn new(root: &'a dyn SpecimenBuilder) -> Self {
        Self {
            root,
            scope: ResolutionScope::default(),
        }
    }

    /// Resolve a request by restarting the chain from the root.
    ///
    /// Returns whatever the chain yields, **including**
    /// [`Specimen::NoSpecimen`]; translating the sentinel into a failure is
    /// a top-level client concern, not the context's.
    ///
    /// # Errors
    /// Propagates builder faults and recursion-guard cycle reports
    /// unmodified.
    pub fn resolve(&self, request: &Request) -> Result<Specimen, ResolveError> {
        self.scope.depth.set(self.scope.depth() + 1);
        tracing::trace!(%request, depth = self.scope.depth(), "resolving request");
        let result = self.root.create(request, self);
        self.scope.depth.set(self.scope.depth() - 1);
        result
    }

    /// The per-call resolution state.
    #[inline]
    #[must_use]
    pub fn scope(&self) -> &ResolutionScope {
        &self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct DepthProbe;

    impl SpecimenBuilder for DepthProbe {
        fn create(
            &self,
            request: &Request,
            context: &SpecimenContext<'_>,
        ) -> Result<Specimen, ResolveError> {
            // Report the depth at which each request is seen; recurse once
            // from the u8 request into a u16 request.
            if request.target().is::<u8>() {
                let nested = context.resolve(&Request::of::<u16>())?;
                let inner = match nested {
                    Specimen::Value(v) => v.downcast::<usize>().unwrap(),
                    Specimen::NoSpecimen => panic!("nested request unhandled"),
                };
                return Ok(Specimen::value((context.scope().depth(), inner)));
            }
            if request.target().is::<u16>() {
                return Ok(Specimen::value(context.scope().depth()));
            }
            Ok(Specimen::NoSpecimen)
        }
    }

    #[test]
    fn depth_tracks_nesting() {
        let probe = DepthProbe;
        let context = SpecimenContext::new(&probe);
        let specimen = context.resolve(&Request::of::<u8>()).unwrap();
        let (outer, inner) = match specimen {
            Specimen::Value(v) => v.downcast::<(usize, usize)>().unwrap(),
            Specimen::NoSpecimen => panic!("unhandled"),
        };
        assert_eq!(outer, 1);
        assert_eq!(inner, 2);
        // Fully unwound afterwards.
        assert_eq!(context.scope().depth(), 0);
    }

    #[test]
    fn no_specimen_passes_through_unexamined() {
        let probe = DepthProbe;
        let context = SpecimenContext::new(&probe);
        let specimen = context.resolve(&Request::of::<String>()).unwrap();
        assert!(specimen.is_no_specimen());
    }

    #[test]
    fn scope_pairs_begin_and_end() {
        let scope = ResolutionScope::default();
        let request = Request::of::<u32>();
        assert!(!scope.is_in_flight(&request));

        scope.begin(request.clone());
        assert!(scope.is_in_flight(&request));
        // Structural equality, not identity.
        assert!(scope.is_in_flight(&Request::of::<u32>()));

        scope.end(&request);
        assert!(!scope.is_in_flight(&request));
        assert_eq!(scope.in_flight_count(), 0);
    }
}
