//! Conjure Behaviors
//!
//! Cross-cutting transformations wrapping the specimen-resolution chain.
//!
//! # Core Concepts
//!
//! - [`Behavior`]: a pure function from builder to builder
//! - [`TracingBehavior`]: depth-indented entry/exit trace to a caller sink
//! - [`RecursionGuardBehavior`]: cycle detection over the per-call in-flight
//!   request stack
//! - [`FaultShieldBehavior`]: translates "cannot construct" faults back into
//!   the `NoSpecimen` sentinel
//!
//! # Composition
//!
//! Behaviors compose by nested wrapping: [`apply_behaviors`] wraps a root in
//! registration order, so the **last-registered behavior is outermost** and
//! observes everything registered before it. Because every nested
//! [`conjure_kernel::SpecimenContext::resolve`] call restarts from the
//! outermost wrapper, behaviors see every resolution in the tree, not just
//! the top-level one.
//!
//! # Example
//!
//! ```rust,ignore
//! use conjure_behaviors::{apply_behaviors, Behavior, RecursionGuardBehavior};
//! use conjure_kernel::{BuilderRef, SpecimenContext};
//!
//! let behaviors: Vec<Box<dyn Behavior>> = vec![Box::new(RecursionGuardBehavior::new())];
//! let root = apply_behaviors(Box::new(BuilderRef::new(&chain)), &behaviors);
//! let context = SpecimenContext::new(&root);
//! ```

mod behavior;
mod fault;
mod recursion;
mod trace;

pub use behavior::{apply_behaviors, Behavior};
pub use fault::FaultShieldBehavior;
pub use recursion::RecursionGuardBehavior;
pub use trace::{TraceSink, TracingBehavior};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
