//! Conjure Core
//!
//! The user-facing assembly of the specimen-resolution engine: the
//! [`Fixture`] facade, the default builder set, and the customization
//! bundles that reshape the chain.
//!
//! # Core Concepts
//!
//! - [`Fixture`]: owns the builder graph and behavior stack; the one place
//!   the `NoSpecimen` sentinel becomes a visible failure
//! - [`builders`]: minimal type-based default builders (numeric sequences,
//!   strings, bool, char, uuid) plus the seed and member relays
//! - [`Customization`]: named bundles of graph mutations:
//!   [`InjectValue`], [`TypeOverride`], [`CompositeCustomization`],
//!   [`RandomNumerics`]
//!
//! # Example
//!
//! ```rust,ignore
//! use conjure_core::Fixture;
//!
//! let mut fixture = Fixture::new();
//! fixture.inject(42u16);
//!
//! let anonymous: String = fixture.create()?;
//! let port: u16 = fixture.create()?; // always 42
//! ```

pub mod builders;
pub mod customization;
pub mod error;
pub mod fixture;

pub use customization::{
    CompositeCustomization, Customization, InjectValue, RandomNumerics, TypeOverride,
};
pub use error::FixtureError;
pub use fixture::Fixture;

/// Convenience re-exports for assembling and extending fixtures.
pub mod prelude {
    pub use crate::builders::{
        BoolBuilder, CharBuilder, InjectedBuilder, MemberRelay, NumberSequenceBuilder,
        RandomNumericBuilder, SeedRelay, StringBuilder, UuidBuilder,
    };
    pub use crate::customization::{
        CompositeCustomization, Customization, InjectValue, RandomNumerics, TypeOverride,
    };
    pub use crate::error::FixtureError;
    pub use crate::fixture::Fixture;
    pub use conjure_behaviors::{
        Behavior, FaultShieldBehavior, RecursionGuardBehavior, TracingBehavior,
    };
    pub use conjure_kernel::{
        CompositeBuilder, MemberRequest, Request, ResolveError, Specimen, SpecimenBuilder,
        SpecimenContext, TypeKey,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
