//! Fixture facade
//!
//! The top-level entry point surrounding code talks to: it owns the builder
//! graph and the behavior stack, assembles the default chain, and is the
//! one place the `NoSpecimen` sentinel becomes a visible failure.
//!
//! A fixture splits into two phases. Configuration (`add_builder`,
//! `add_behavior`, `apply`, `inject`) mutates the graph through `&mut self`
//! and must finish before resolutions begin; resolution (`create`,
//! `create_seeded`, `resolve`) reads through `&self`, so the borrow checker
//! enforces the no-mutation-during-a-burst rule. Each top-level resolution
//! builds its own context, so concurrent resolutions on a shared fixture
//! never share recursion state.

use crate::builders::{
    BoolBuilder, CharBuilder, MemberRelay, NumberSequenceBuilder, SeedRelay, StringBuilder,
    UuidBuilder,
};
use crate::customization::{Customization, InjectValue};
use crate::error::FixtureError;
use conjure_behaviors::{apply_behaviors, Behavior, RecursionGuardBehavior};
use conjure_kernel::{
    BuilderRef, CompositeBuilder, Request, Specimen, SpecimenBuilder, SpecimenContext,
};
use std::any::Any;
use std::fmt;

/// The top-level facade for creating anonymous specimens.
#[derive(Debug)]
pub struct Fixture {
    graph: CompositeBuilder,
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Fixture {
    /// A fixture with the default builder set (numeric sequences, strings,
    /// bool, char, uuid, and the member/seed relays) and the recursion
    /// guard installed.
    #[must_use]
    pub fn new() -> Self {
        let mut defaults = CompositeBuilder::labeled("defaults");
        defaults.append(NumberSequenceBuilder::new());
        defaults.append(StringBuilder);
        defaults.append(BoolBuilder::new());
        defaults.append(CharBuilder::new());
        defaults.append(UuidBuilder);

        // Relays sit last so specialized builders get the first look at
        // member and seeded requests.
        let mut relays = CompositeBuilder::labeled("relays");
        relays.append(MemberRelay);
        relays.append(SeedRelay);

        let mut graph = CompositeBuilder::new();
        graph.append_group(defaults);
        graph.append_group(relays);

        Self {
            graph,
            behaviors: vec![Box::new(RecursionGuardBehavior::new())],
        }
    }

    /// A fixture with no default builders. The recursion guard is still
    /// installed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            graph: CompositeBuilder::new(),
            behaviors: vec![Box::new(RecursionGuardBehavior::new())],
        }
    }

    /// The builder graph, for inspection.
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &CompositeBuilder {
        &self.graph
    }

    /// The builder graph, for direct surgery beyond what customizations
    /// offer.
    #[inline]
    pub fn graph_mut(&mut self) -> &mut CompositeBuilder {
        &mut self.graph
    }

    /// Register a builder at the lowest priority of the chain.
    pub fn add_builder(&mut self, builder: impl SpecimenBuilder + 'static) {
        self.graph.append(builder);
    }

    /// Register a builder at the highest priority, shadowing everything
    /// already present for the requests it handles.
    pub fn prepend_builder(&mut self, builder: impl SpecimenBuilder + 'static) {
        self.graph.prepend(builder);
    }

    /// Register a behavior. Behaviors wrap in registration order: the one
    /// registered last is outermost and observes every resolution first.
    pub fn add_behavior(&mut self, behavior: impl Behavior + 'static) {
        tracing::debug!(behavior = ?behavior, "registering behavior");
        self.behaviors.push(Box::new(behavior));
    }

    /// Apply a customization bundle to the graph in one step.
    pub fn apply(&mut self, customization: impl Customization) {
        tracing::debug!(customization = customization.name(), "applying customization");
        customization.customize(&mut self.graph);
    }

    /// Inject a constant: every subsequent request targeting `value`'s type
    /// resolves to a clone of `value`, shadowing any default builder.
    ///
    /// Sugar for applying [`InjectValue`]; injection is a customization
    /// primitive, not a separate mechanism.
    pub fn inject<T>(&mut self, value: T)
    where
        T: Any + Clone + Send + Sync + fmt::Debug,
    {
        self.apply(InjectValue::new(value));
    }

    /// Create an anonymous value of `T`.
    ///
    /// # Errors
    /// [`FixtureError::Unresolvable`] when no builder recognizes the
    /// request; engine faults (cycles, construction failures) unmodified.
    pub fn create<T: Any>(&self) -> Result<T, FixtureError> {
        self.create_from(Request::of::<T>())
    }

    /// Create a value of `T` biased by a seed hint (e.g. a member name).
    ///
    /// # Errors
    /// As [`Fixture::create`].
    pub fn create_seeded<T: Any>(&self, seed: impl Into<String>) -> Result<T, FixtureError> {
        self.create_from(Request::seeded::<T>(seed))
    }

    /// Create a value for member `name` of type `T` on owner `O`.
    ///
    /// # Errors
    /// As [`Fixture::create`].
    pub fn create_member<O: Any, T: Any>(
        &self,
        name: impl Into<String>,
    ) -> Result<T, FixtureError> {
        self.create_from(Request::member::<O, T>(name))
    }

    /// Resolve a raw request through the behavior-wrapped graph, returning
    /// the sentinel untranslated.
    ///
    /// # Errors
    /// Engine faults only; `NoSpecimen` is an `Ok` value here.
    pub fn resolve(&self, request: &Request) -> Result<Specimen, FixtureError> {
        let root = apply_behaviors(Box::new(BuilderRef::new(&self.graph)), &self.behaviors);
        let context = SpecimenContext::new(root.as_ref());
        Ok(context.resolve(request)?)
    }

    fn create_from<T: Any>(&self, request: Request) -> Result<T, FixtureError> {
        match self.resolve(&request)? {
            Specimen::NoSpecimen => Err(FixtureError::Unresolvable { request }),
            Specimen::Value(value) => {
                value
                    .downcast::<T>()
                    .map_err(|value| FixtureError::SpecimenType {
                        request,
                        produced: value.type_name(),
                    })
            }
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
