//! Conjure Kernel (conjure-kernel)
//!
//! The specimen-resolution engine behind Conjure: a chain-of-responsibility
//! graph of request handlers that turns a description of a wanted value into
//! a concrete specimen.
//!
//! # Core Concepts
//!
//! - [`Request`]: what a caller wants produced (a type, a seeded type, a
//!   named member)
//! - [`Specimen`]: a produced value, or the [`Specimen::NoSpecimen`] sentinel
//!   meaning "this handler cannot satisfy the request"
//! - [`SpecimenBuilder`]: the handler capability mapping requests to
//!   specimens
//! - [`SpecimenContext`]: the re-entrant resolution facade handed to every
//!   builder for nested sub-requests
//! - [`CompositeBuilder`]: an ordered, mutable chain of builders that is
//!   itself a builder
//!
//! # Resolution Model
//!
//! The engine runs in two phases. During configuration the chain is mutated
//! freely; during a resolution burst the graph is read-only and every
//! top-level [`SpecimenContext::resolve`] call executes as one synchronous
//! call tree. Builders signal "not mine" by returning
//! [`Specimen::NoSpecimen`], which is ordinary chain-control data; the
//! composite keeps walking its children until one produces a value.
//!
//! # Example
//!
//! ```rust,ignore
//! use conjure_kernel::{CompositeBuilder, Request, SpecimenContext};
//!
//! let mut chain = CompositeBuilder::new();
//! chain.append(my_builder);
//!
//! let context = SpecimenContext::new(&chain);
//! let specimen = context.resolve(&Request::of::<u32>())?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod graph;
pub mod request;
pub mod specimen;

pub use builder::{BuilderRef, SpecimenBuilder};
pub use context::{ResolutionScope, SpecimenContext};
pub use error::ResolveError;
pub use graph::{CompositeBuilder, GraphNode};
pub use request::{MemberRequest, Request, TypeKey};
pub use specimen::{Specimen, SpecimenValue};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
