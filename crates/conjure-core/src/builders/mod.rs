//! Default builder set
//!
//! Minimal type-based builders covering the primitive specimens a fixture
//! should produce out of the box, plus the two relays that reduce richer
//! request shapes to simpler ones. Each builder recognizes a narrow set of
//! requests and declines everything else with `NoSpecimen`.

mod inject;
mod numeric;
mod primitives;
mod relay;
mod text;

pub use inject::InjectedBuilder;
pub use numeric::{NumberSequenceBuilder, RandomNumericBuilder};
pub use primitives::{BoolBuilder, UuidBuilder};
pub use relay::{MemberRelay, SeedRelay};
pub use text::{CharBuilder, StringBuilder};
