//! Builder graph
//!
//! An ordered, mutable chain of builders that presents itself as a single
//! builder. Insertion order is the priority order of the chain: `create`
//! walks children front to back and the first non-`NoSpecimen` result wins,
//! stopping iteration. Composites nest, so a bundle of builders added
//! together (e.g. by one customization) can live in a labeled group and be
//! removed or replaced later as one unit.

use crate::builder::SpecimenBuilder;
use crate::context::SpecimenContext;
use crate::error::ResolveError;
use crate::request::Request;
use crate::specimen::Specimen;

/// One slot in a composite: a leaf builder or a nested group.
#[derive(Debug)]
pub enum GraphNode {
    /// A single builder.
    Leaf(Box<dyn SpecimenBuilder>),
    /// A nested sub-chain.
    Group(CompositeBuilder),
}

impl SpecimenBuilder for GraphNode {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match self {
            GraphNode::Leaf(builder) => builder.create(request, context),
            GraphNode::Group(group) => group.create(request, context),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            GraphNode::Leaf(builder) => builder.name(),
            GraphNode::Group(_) => "group",
        }
    }
}

/// An ordered collection of child builders forming the chain.
///
/// Mutation happens at configuration time only; during a resolution burst
/// the composite is read through `&self` like any other builder. Relative
/// order of children unaffected by a mutation is always preserved.
#[derive(Debug, Default)]
pub struct CompositeBuilder {
    label: Option<String>,
    children: Vec<GraphNode>,
}

impl CompositeBuilder {
    /// An empty, unlabeled composite.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty composite carrying a label, addressable for later removal
    /// or replacement.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            children: Vec::new(),
        }
    }

    /// This composite's label, if any.
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of direct children.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the composite has no children.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children, in chain order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[GraphNode] {
        &self.children
    }

    /// Add a builder at the lowest priority (end of the chain).
    pub fn append(&mut self, builder: impl SpecimenBuilder + 'static) {
        tracing::debug!(builder = builder.name(), "appending builder");
        self.children.push(GraphNode::Leaf(Box::new(builder)));
    }

    /// Add a builder at the highest priority (front of the chain), shadowing
    /// everything already present for the requests it handles.
    pub fn prepend(&mut self, builder: impl SpecimenBuilder + 'static) {
        tracing::debug!(builder = builder.name(), "prepending builder");
        self.children.insert(0, GraphNode::Leaf(Box::new(builder)));
    }

    /// Add a nested group at the lowest priority.
    pub fn append_group(&mut self, group: CompositeBuilder) {
        self.children.push(GraphNode::Group(group));
    }

    /// Add a nested group at the highest priority.
    pub fn prepend_group(&mut self, group: CompositeBuilder) {
        self.children.insert(0, GraphNode::Group(group));
    }

    /// Remove the first group carrying `label`, searching this composite's
    /// direct children before recursing into nested groups.
    ///
    /// Returns `true` when a group was removed.
    pub fn remove_labeled(&mut self, label: &str) -> bool {
        let direct = self.children.iter().position(
            |child| matches!(child, GraphNode::Group(g) if g.label.as_deref() == Some(label)),
        );
        if let Some(position) = direct {
            tracing::debug!(label, "removing builder group");
            self.children.remove(position);
            return true;
        }
        self.children.iter_mut().any(|child| match child {
            GraphNode::Group(group) => group.remove_labeled(label),
            GraphNode::Leaf(_) => false,
        })
    }

    /// Replace the first group carrying `label` in place, preserving the
    /// position (and therefore the priority) of the replaced group.
    ///
    /// Returns `true` when a group was replaced.
    pub fn replace_labeled(&mut self, label: &str, replacement: CompositeBuilder) -> bool {
        let mut slot = Some(replacement);
        self.replace_labeled_inner(label, &mut slot)
    }

    fn replace_labeled_inner(
        &mut self,
        label: &str,
        slot: &mut Option<CompositeBuilder>,
    ) -> bool {
        for child in &mut self.children {
            if let GraphNode::Group(group) = child {
                if group.label.as_deref() == Some(label) {
                    if let Some(replacement) = slot.take() {
                        tracing::debug!(label, "replacing builder group");
                        *child = GraphNode::Group(replacement);
                        return true;
                    }
                } else if group.replace_labeled_inner(label, slot) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether a group carrying `label` exists anywhere in this subtree.
    #[must_use]
    pub fn contains_labeled(&self, label: &str) -> bool {
        self.children.iter().any(|child| match child {
            GraphNode::Group(group) => {
                group.label.as_deref() == Some(label) || group.contains_labeled(label)
            }
            GraphNode::Leaf(_) => false,
        })
    }
}

impl SpecimenBuilder for CompositeBuilder {
    /// Walk children in order; first non-`NoSpecimen` result wins. All
    /// children declining means the composite itself declines. Faults stop
    /// the walk and propagate unmodified.
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        for child in &self.children {
            match child.create(request, context)? {
                Specimen::NoSpecimen => continue,
                specimen => return Ok(specimen),
            }
        }
        Ok(Specimen::NoSpecimen)
    }
}
