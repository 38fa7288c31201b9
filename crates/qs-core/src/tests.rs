//! Unit tests for qs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::default(), ResourceId::INVALID);
    }

    #[test]
    fn display_uses_readable_names() {
        assert_eq!(AgentId(7).to_string(), "agent-7");
        assert_eq!(ResourceId(3).to_string(), "resource-3");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_time_and_label() {
        assert_eq!(Tick::ZERO.time(0.25), 0.0);
        assert_eq!(Tick(8).time(0.25), 2.0);
        assert_eq!(Tick(8).to_string(), "T8");
    }

    #[test]
    fn clock_time_is_derived_from_tick_count() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.now(), 0.0);
        for _ in 0..4 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(4));
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn small_ticks_do_not_accumulate_drift() {
        let mut clock = SimClock::new(0.01);
        for _ in 0..10_000 {
            clock.advance();
        }
        assert_eq!(clock.now(), 10_000.0 * 0.01);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, CoreError, ServiceDistributions, SimRng};

    #[test]
    fn agent_rng_is_deterministic() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(3));
        for _ in 0..16 {
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = AgentRng::new(7, AgentId(0));
        let mut b = AgentRng::new(7, AgentId(1));
        let xs: Vec<f64> = (0..4).map(|_| a.unit()).collect();
        let ys: Vec<f64> = (0..4).map(|_| b.unit()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn sample_indices_are_distinct_and_in_range() {
        let mut rng = AgentRng::new(1, AgentId(0));
        let picked = rng.sample_indices(6, 4);
        assert_eq!(picked.len(), 4);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
        assert!(picked.iter().all(|&i| i < 6));
    }

    #[test]
    fn default_speeds_are_positive_and_centred_near_one() {
        let dist = ServiceDistributions::new(10.0, 0.1, 0.0, 1.0).unwrap();
        let mut rng = SimRng::new(99);
        let draws: Vec<f64> = (0..2_000).map(|_| dist.speed(rng.inner())).collect();
        assert!(draws.iter().all(|&s| s > 0.0));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - 1.0).abs() < 0.05, "mean speed {mean}");
    }

    #[test]
    fn service_draws_are_positive() {
        let dist = ServiceDistributions::new(10.0, 0.1, 0.0, 1.0).unwrap();
        let mut rng = SimRng::new(5);
        assert!((0..500).all(|_| dist.service(rng.inner()) > 0.0));
    }

    #[test]
    fn bad_parameters_are_rejected() {
        assert!(ServiceDistributions::new(-1.0, 0.1, 0.0, 1.0).is_err());
        assert!(ServiceDistributions::new(10.0, 0.1, 0.0, -1.0).is_err());
    }

    #[test]
    fn service_parameters_are_checked_before_sampling() {
        for (mu, sigma) in [(0.0, -0.5), (0.0, f64::NAN), (0.0, f64::INFINITY), (f64::NAN, 1.0)] {
            assert!(
                matches!(ServiceDistributions::new(10.0, 0.1, mu, sigma), Err(CoreError::Distribution(_))),
                "LogNormal({mu}, {sigma}) accepted"
            );
        }
        // A point mass is a valid service distribution.
        let dist = ServiceDistributions::new(10.0, 0.1, 0.0, 0.0).unwrap();
        let mut rng = SimRng::new(1);
        assert_eq!(dist.service(rng.inner()), 1.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, RunConfig, TopologyKind, WantSelection};

    #[test]
    fn bad_distribution_parameters_fail_validation() {
        let cfg = RunConfig { service_sigma: -1.0, ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Distribution(_))));
        let cfg = RunConfig { speed_shape: 0.0, ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Distribution(_))));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn counts_beyond_the_id_range_fail_validation() {
        let too_many = u32::MAX as usize + 1;
        let cfg = RunConfig { agent_count: too_many, ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        let cfg = RunConfig { resource_count: too_many, ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn default_config_uses_probability_selection() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.tick_size, 0.01);
        assert_eq!(cfg.validate().unwrap(), WantSelection::Probability(0.8));
    }

    #[test]
    fn both_selection_rules_are_rejected() {
        let cfg = RunConfig { p_want: Some(0.5), n_want: Some(2), ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn neither_selection_rule_is_rejected() {
        let cfg = RunConfig { p_want: None, n_want: None, ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn count_selection_is_bounded_by_resources() {
        let ok = RunConfig { p_want: None, n_want: Some(6), ..RunConfig::default() };
        assert_eq!(ok.validate().unwrap(), WantSelection::Count(6));
        let too_many = RunConfig { p_want: None, n_want: Some(7), ..RunConfig::default() };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        let cfg = RunConfig { p_want: Some(1.5), ..RunConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_tick_is_rejected() {
        for tick_size in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let cfg = RunConfig { tick_size, ..RunConfig::default() };
            assert!(cfg.validate().is_err(), "tick_size {tick_size} accepted");
        }
    }

    #[test]
    fn single_topology_needs_a_resource() {
        let cfg = RunConfig {
            resource_count: 0,
            topology: TopologyKind::Single,
            ..RunConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn topology_parses_case_insensitively() {
        assert_eq!("Separate".parse::<TopologyKind>().unwrap(), TopologyKind::Separate);
        assert_eq!("single".parse::<TopologyKind>().unwrap(), TopologyKind::Single);
        assert!("both".parse::<TopologyKind>().is_err());
        assert_eq!(TopologyKind::Single.to_string(), "single");
    }
}
