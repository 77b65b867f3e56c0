use proptest::prelude::*;
use vis_resolver::api::{DomainState, resolve_domain};
use vis_resolver::core::{Domain, RawBounds};

fn domain_strategy() -> impl Strategy<Value = Option<Domain>> {
    proptest::option::of((-1e6f64..1e6, -1e6f64..1e6).prop_map(|(a, b)| Domain::new(a, b)))
}

proptest! {
    #[test]
    fn parsed_bounds_ignore_data(
        min in 1.0f64..1e6,
        span in 1.0f64..1e6,
        data in proptest::collection::vec(-1e9f64..1e9, 0..32)
    ) {
        let max = min + span;
        let bounds: RawBounds = [Some(min.to_string()), Some(max.to_string())];
        prop_assert_eq!(resolve_domain(Some(&bounds), &data), Some(Domain::new(min, max)));
    }

    #[test]
    fn unset_bounds_span_every_value(
        data in proptest::collection::vec(-1e9f64..1e9, 1..64)
    ) {
        let domain = resolve_domain(None, &data).expect("non-empty data");
        for value in &data {
            prop_assert!(domain.contains(*value));
        }
        prop_assert!(data.contains(&domain.min));
        prop_assert!(data.contains(&domain.max));
    }

    #[test]
    fn reset_after_any_overrides_restores_authoritative(
        data in proptest::collection::vec(-1e3f64..1e3, 0..16),
        overrides in proptest::collection::vec(domain_strategy(), 0..8)
    ) {
        let mut state = DomainState::from_settings(None, &data);
        for domain in overrides {
            state.set_current(domain);
        }
        state.reset_current();
        prop_assert_eq!(state.current(), state.authoritative());
        prop_assert!(!state.is_overridden());

        let revision = state.revision();
        state.reset_current();
        prop_assert_eq!(state.revision(), revision);
    }
}
