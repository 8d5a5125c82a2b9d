//! Customizations
//!
//! Named, reusable bundles of graph mutations applied atomically at
//! configuration time. Customizations only see and mutate graph structure,
//! never resolution-time state, and the engine does not deduplicate them:
//! applying one twice performs its mutations twice unless the bundle itself
//! is idempotent (as [`TypeOverride`] and [`RandomNumerics`] are).
//!
//! Mutations are prepended, so a customization applied later takes
//! precedence over one applied earlier when both can handle the same
//! request.

use crate::builders::{InjectedBuilder, RandomNumericBuilder};
use conjure_kernel::{CompositeBuilder, SpecimenBuilder, TypeKey};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A named bundle of graph mutations applied as one unit.
pub trait Customization: Send + Sync + fmt::Debug {
    /// Name identifying the bundle in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Apply this bundle's mutations to the graph.
    fn customize(&self, graph: &mut CompositeBuilder);
}

impl<'a, C> Customization for &'a C
where
    C: Customization + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn customize(&self, graph: &mut CompositeBuilder) {
        (**self).customize(graph);
    }
}

impl<C> Customization for Box<C>
where
    C: Customization + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn customize(&self, graph: &mut CompositeBuilder) {
        (**self).customize(graph);
    }
}

/// Constant injection: prepend an [`InjectedBuilder`] so every request
/// targeting the value's type resolves to a clone of the value.
#[derive(Debug)]
pub struct InjectValue<T> {
    value: T,
}

impl<T> InjectValue<T>
where
    T: Any + Clone + Send + Sync + fmt::Debug,
{
    /// Inject `value` for its own runtime type.
    #[inline]
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Customization for InjectValue<T>
where
    T: Any + Clone + Send + Sync + fmt::Debug,
{
    fn customize(&self, graph: &mut CompositeBuilder) {
        graph.prepend(InjectedBuilder::new(self.value.clone()));
    }
}

/// Override how one type is constructed.
///
/// Installs the supplied builder in a labeled group at the highest
/// priority. Re-applying an override for the same type first removes the
/// previous override group, so the latest application is the one observed:
/// a literal replace rather than an ever-growing shadow stack.
pub struct TypeOverride {
    target: TypeKey,
    builder: Arc<dyn SpecimenBuilder>,
}

impl TypeOverride {
    /// Override construction of `T` with `builder`.
    #[must_use]
    pub fn new<T: Any>(builder: impl SpecimenBuilder + 'static) -> Self {
        Self {
            target: TypeKey::of::<T>(),
            builder: Arc::new(builder),
        }
    }

    fn group_label(&self) -> String {
        format!("override:{}", self.target)
    }
}

impl fmt::Debug for TypeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeOverride")
            .field("target", &self.target)
            .field("builder", &self.builder.name())
            .finish()
    }
}

impl Customization for TypeOverride {
    fn customize(&self, graph: &mut CompositeBuilder) {
        let label = self.group_label();
        graph.remove_labeled(&label);
        let mut group = CompositeBuilder::labeled(label);
        group.append(Arc::clone(&self.builder));
        graph.prepend_group(group);
    }
}

/// Applies an ordered list of customizations as one unit.
///
/// Items apply in order; since each prepends its mutations, later items in
/// the list end up at higher priority, matching the precedence rule for
/// customizations applied separately.
#[derive(Debug, Default)]
pub struct CompositeCustomization {
    items: Vec<Box<dyn Customization>>,
}

impl CompositeCustomization {
    /// An empty bundle.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customization to the bundle.
    #[must_use]
    pub fn with(mut self, customization: impl Customization + 'static) -> Self {
        self.items.push(Box::new(customization));
        self
    }
}

impl Customization for CompositeCustomization {
    fn customize(&self, graph: &mut CompositeBuilder) {
        for item in &self.items {
            item.customize(graph);
        }
    }
}

/// Swap sequential numeric generation for uniformly random values.
#[derive(Debug, Default)]
pub struct RandomNumerics {
    seed: Option<u64>,
}

impl RandomNumerics {
    /// Randomness from the operating system.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A reproducible stream for deterministic tests.
    #[inline]
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Customization for RandomNumerics {
    fn customize(&self, graph: &mut CompositeBuilder) {
        let builder = match self.seed {
            Some(seed) => RandomNumericBuilder::with_seed(seed),
            None => RandomNumericBuilder::new(),
        };
        graph.remove_labeled("random-numerics");
        let mut group = CompositeBuilder::labeled("random-numerics");
        group.append(builder);
        graph.prepend_group(group);
    }
}
