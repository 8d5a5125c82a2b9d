//! Specimen builder trait
//!
//! The handler capability at the heart of the chain: given a request and a
//! context, either produce a specimen or declare "not mine".

use crate::context::SpecimenContext;
use crate::error::ResolveError;
use crate::request::Request;
use crate::specimen::Specimen;
use std::fmt;

/// A handler mapping requests to specimens, or to "not mine".
///
/// # Contract
/// - Return `Ok(Specimen::NoSpecimen)` for any request shape this builder
///   does not recognize. `Err` is reserved for genuine faults
///   ([`ResolveError::CannotConstruct`] for a recognized-but-unbuildable
///   request, [`ResolveError::Configuration`] for invalid setup), never for
///   "not my request".
/// - Nested needs are resolved through [`SpecimenContext::resolve`], any
///   number of times, synchronously. A builder must not unconditionally
///   re-resolve its own request shape; that is a cycle.
/// - Builders are long-lived and reused across top-level requests. Side
///   effects (counters, RNG state) must be confined to state the builder
///   instance owns, guarded for thread-safety by the builder itself.
pub trait SpecimenBuilder: Send + Sync + fmt::Debug {
    /// Attempt to satisfy `request`, resolving sub-requests via `context`.
    ///
    /// # Errors
    /// Genuine faults only; "not mine" is `Ok(Specimen::NoSpecimen)`.
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError>;

    /// Builder name for diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<B> SpecimenBuilder for Box<B>
where
    B: SpecimenBuilder + ?Sized,
{
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        (**self).create(request, context)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<B> SpecimenBuilder for std::sync::Arc<B>
where
    B: SpecimenBuilder + ?Sized,
{
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        (**self).create(request, context)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Borrow adapter presenting a builder owned elsewhere as a boxable builder.
///
/// Behavior wrappers consume `Box<dyn SpecimenBuilder + '_>`; this lets the
/// facade hand its long-lived graph to a per-resolution wrapper stack
/// without giving up ownership.
#[derive(Clone, Copy)]
pub struct BuilderRef<'a> {
    inner: &'a dyn SpecimenBuilder,
}

impl<'a> BuilderRef<'a> {
    /// Wrap a borrowed builder.
    #[inline]
    #[must_use]
    pub fn new(inner: &'a dyn SpecimenBuilder) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for BuilderRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BuilderRef").field(&self.inner).finish()
    }
}

impl SpecimenBuilder for BuilderRef<'_> {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        self.inner.create(request, context)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
