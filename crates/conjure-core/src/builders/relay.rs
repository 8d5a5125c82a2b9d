//! Request relays
//!
//! Relays reduce richer request shapes to simpler ones by re-entering the
//! chain through the context, so specialized builders get the first look
//! and the general case still resolves. Both sit at the lowest priority of
//! the default graph.

use conjure_kernel::{Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext};

/// Forwards a member request as a seeded request for the member's type,
/// with the member name as the seed.
#[derive(Debug, Default)]
pub struct MemberRelay;

impl SpecimenBuilder for MemberRelay {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match request {
            Request::Member(member) => context.resolve(&Request::Seeded {
                ty: member.ty,
                seed: member.name.clone(),
            }),
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}

/// Drops the seed and retries as a plain type request, for types whose
/// builders are not seed-aware.
#[derive(Debug, Default)]
pub struct SeedRelay;

impl SpecimenBuilder for SeedRelay {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        match request {
            Request::Seeded { ty, .. } => context.resolve(&Request::Type(*ty)),
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}
