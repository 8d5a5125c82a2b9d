//! Context behavior across nested and repeated resolutions.

use conjure_kernel::{
    CompositeBuilder, Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext,
};
use conjure_test_utils::{FailingBuilder, StubBuilder};

/// Builds a `(u32, String)` pair by resolving both halves through the
/// context.
#[derive(Debug)]
struct PairBuilder;

impl SpecimenBuilder for PairBuilder {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        if !request.target().is::<(u32, String)>() {
            return Ok(Specimen::NoSpecimen);
        }
        let number = match context.resolve(&Request::of::<u32>())? {
            Specimen::Value(v) => v.downcast::<u32>().expect("u32 sub-request"),
            Specimen::NoSpecimen => return Ok(Specimen::NoSpecimen),
        };
        let text = match context.resolve(&Request::of::<String>())? {
            Specimen::Value(v) => v.downcast::<String>().expect("String sub-request"),
            Specimen::NoSpecimen => return Ok(Specimen::NoSpecimen),
        };
        Ok(Specimen::value((number, text)))
    }
}

#[test]
fn nested_sub_requests_restart_from_the_root() {
    let mut chain = CompositeBuilder::new();
    chain.append(PairBuilder);
    chain.append(StubBuilder::new(7u32));
    chain.append(StubBuilder::new(String::from("seven")));

    let context = SpecimenContext::new(&chain);
    let specimen = context.resolve(&Request::of::<(u32, String)>()).unwrap();
    let pair = match specimen {
        Specimen::Value(v) => v.downcast::<(u32, String)>().unwrap(),
        Specimen::NoSpecimen => panic!("chain declined"),
    };
    assert_eq!(pair, (7, String::from("seven")));
}

#[test]
fn depth_unwinds_after_nested_faults() {
    let mut chain = CompositeBuilder::new();
    chain.append(PairBuilder);
    chain.append(FailingBuilder::cannot_construct::<u32>("broken"));

    let context = SpecimenContext::new(&chain);
    let err = context
        .resolve(&Request::of::<(u32, String)>())
        .unwrap_err();
    assert!(err.is_cannot_construct());
    assert_eq!(context.scope().depth(), 0);
    assert_eq!(context.scope().in_flight_count(), 0);
}

#[test]
fn resolve_is_repeatable_for_deterministic_builders() {
    let mut chain = CompositeBuilder::new();
    chain.append(StubBuilder::new(String::from("fixed")));

    let context = SpecimenContext::new(&chain);
    for _ in 0..3 {
        let specimen = context.resolve(&Request::of::<String>()).unwrap();
        let value = match specimen {
            Specimen::Value(v) => v.downcast::<String>().unwrap(),
            Specimen::NoSpecimen => panic!("chain declined"),
        };
        assert_eq!(value, "fixed");
    }
}

#[test]
fn contexts_do_not_share_scope_state() {
    let chain = CompositeBuilder::new();

    let first = SpecimenContext::new(&chain);
    first.scope().begin(Request::of::<u32>());

    let second = SpecimenContext::new(&chain);
    assert!(!second.scope().is_in_flight(&Request::of::<u32>()));
}
