//! Facade-level behavior: default chain, precedence, error taxonomy, and
//! the trace a fixture produces end to end.

use conjure_behaviors::{FaultShieldBehavior, TracingBehavior};
use conjure_core::{Fixture, FixtureError};
use conjure_kernel::ResolveError;
use conjure_test_utils::{
    FailingBuilder, SelfReferentialBuilder, SharedSink, StubBuilder,
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[derive(Debug)]
struct Widget;

#[test]
fn unhandled_requests_surface_as_unresolvable() {
    let fixture = Fixture::empty();
    let err = fixture.create::<String>().unwrap_err();
    assert!(err.is_unresolvable());

    // A fixture with defaults still has no builder for arbitrary types.
    let fixture = Fixture::new();
    let err = fixture.create::<Widget>().unwrap_err();
    assert!(err.is_unresolvable());
}

#[test]
fn defaults_cover_the_primitive_specimens() {
    conjure_test_utils::init_test_logging();
    let fixture = Fixture::new();

    assert_eq!(fixture.create::<u32>().unwrap(), 1);
    assert_eq!(fixture.create::<i16>().unwrap(), 2);
    assert!(fixture.create::<bool>().unwrap());
    assert!(!fixture.create::<bool>().unwrap());
    assert_eq!(fixture.create::<char>().unwrap(), 'a');
    assert!(!fixture.create::<String>().unwrap().is_empty());
    let _id: Uuid = fixture.create().unwrap();
}

#[test]
fn seeded_strings_carry_their_hint() {
    let fixture = Fixture::new();
    let value = fixture.create_seeded::<String>("name").unwrap();
    assert!(value.starts_with("name"));
}

#[test]
fn seeded_requests_for_unseeded_types_relay_to_defaults() {
    let fixture = Fixture::new();
    assert_eq!(fixture.create_seeded::<u32>("age").unwrap(), 1);
}

#[test]
fn member_requests_bias_values_by_member_name() {
    let fixture = Fixture::new();
    let label: String = fixture.create_member::<Widget, String>("label").unwrap();
    assert!(label.starts_with("label"));
}

#[test]
fn injected_constants_shadow_every_default() {
    let mut fixture = Fixture::new();
    fixture.inject(42u32);

    assert_eq!(fixture.create::<u32>().unwrap(), 42);
    assert_eq!(fixture.create::<u32>().unwrap(), 42);
    assert_eq!(fixture.create_seeded::<u32>("count").unwrap(), 42);
    assert_eq!(fixture.create_member::<Widget, u32>("count").unwrap(), 42);
    // Other numeric types still come from the sequence.
    assert_eq!(fixture.create::<u64>().unwrap(), 1);
}

#[test]
fn prepended_builders_win_over_earlier_ones() {
    let mut fixture = Fixture::empty();
    fixture.add_builder(StubBuilder::new(String::from("first")));
    fixture.prepend_builder(StubBuilder::new(String::from("second")));
    assert_eq!(fixture.create::<String>().unwrap(), "second");
}

#[test]
fn self_referencing_shapes_fail_with_a_cycle_not_an_overflow() {
    #[derive(Debug)]
    struct Node;

    let mut fixture = Fixture::empty();
    fixture.add_builder(SelfReferentialBuilder::new::<Node>());

    for _ in 0..3 {
        let err = fixture.create::<Node>().unwrap_err();
        assert!(err.is_cycle());
        assert!(!err.is_unresolvable());
    }
}

#[test]
fn wrong_typed_specimens_are_reported_not_panicked() {
    use conjure_kernel::{
        Request, Specimen, SpecimenBuilder, SpecimenContext,
    };

    #[derive(Debug)]
    struct Mislabeled;

    impl SpecimenBuilder for Mislabeled {
        fn create(
            &self,
            request: &Request,
            _context: &SpecimenContext<'_>,
        ) -> Result<Specimen, ResolveError> {
            if request.target().is::<String>() {
                return Ok(Specimen::value(5u32));
            }
            Ok(Specimen::NoSpecimen)
        }
    }

    let mut fixture = Fixture::empty();
    fixture.add_builder(Mislabeled);
    let err = fixture.create::<String>().unwrap_err();
    assert!(matches!(
        err,
        FixtureError::SpecimenType { produced, .. } if produced.contains("u32")
    ));
}

#[test]
fn construction_faults_propagate_unless_shielded() {
    let mut fixture = Fixture::empty();
    fixture.add_builder(FailingBuilder::cannot_construct::<String>("abstract"));

    let err = fixture.create::<String>().unwrap_err();
    assert!(matches!(
        err,
        FixtureError::Resolve(ResolveError::CannotConstruct { .. })
    ));

    // With the shield registered, the fault becomes ordinary
    // unresolvability instead.
    fixture.add_behavior(FaultShieldBehavior::new());
    let err = fixture.create::<String>().unwrap_err();
    assert!(err.is_unresolvable());
}

#[test]
fn member_resolution_traces_three_nested_levels() {
    let sink = SharedSink::new();
    let mut fixture = Fixture::new();
    fixture.add_behavior(TracingBehavior::new(sink.clone()));

    let value: u32 = fixture.create_member::<Widget, u32>("count").unwrap();
    assert_eq!(value, 1);

    let expected = "\
resolving: Widget::count: u32
  resolving: u32 (seed \"count\")
    resolving: u32
    produced: 1
  produced: 1
produced: 1
";
    assert_eq!(sink.contents(), expected);
}

#[test]
fn resolve_exposes_the_raw_sentinel() {
    let fixture = Fixture::empty();
    let specimen = fixture
        .resolve(&conjure_kernel::Request::of::<String>())
        .unwrap();
    assert!(specimen.is_no_specimen());
}
