//! Behavior trait and composition

use conjure_kernel::SpecimenBuilder;
use std::fmt;

/// A decorator adding cross-cutting logic around a builder.
///
/// `transform` is a pure function: it must not mutate the behavior or the
/// wrapped builder, only produce a new builder with an identical contract.
/// Per-resolution state (recursion stacks, depths) belongs in the context's
/// [`conjure_kernel::ResolutionScope`], never in the behavior itself, so
/// that concurrent top-level resolutions stay independent.
pub trait Behavior: Send + Sync + fmt::Debug {
    /// Wrap `builder`, producing a builder with the same contract.
    fn transform<'a>(
        &self,
        builder: Box<dyn SpecimenBuilder + 'a>,
    ) -> Box<dyn SpecimenBuilder + 'a>;
}

/// Wrap `root` with each behavior in registration order.
///
/// The last behavior in the slice ends up outermost: it observes every
/// resolution before (and after) everything registered earlier. This
/// ordering is part of the configuration contract and is stable.
#[must_use]
pub fn apply_behaviors<'a>(
    root: Box<dyn SpecimenBuilder + 'a>,
    behaviors: &[Box<dyn Behavior>],
) -> Box<dyn SpecimenBuilder + 'a> {
    let mut wrapped = root;
    for behavior in behaviors {
        wrapped = behavior.transform(wrapped);
    }
    wrapped
}
