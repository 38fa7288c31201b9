//! Unit tests for qs-agent.

use qs_core::{AgentId, ResourceId};

use crate::{Agent, Resource};

fn agent(id: u32, wants: &[(u32, f64)]) -> Agent {
    let wants = wants.iter().map(|&(r, d)| (ResourceId(r), d)).collect();
    Agent::new(AgentId(id), 1.0, wants).unwrap()
}

fn resource(id: u32) -> Resource {
    Resource::new(ResourceId(id), 1.0, 1.0)
}

#[cfg(test)]
mod agent_state {
    use super::*;
    use crate::{AgentError, AgentState};

    #[test]
    fn new_agent_with_wants_is_idle() {
        let a = agent(0, &[(0, 1.0), (2, 3.0)]);
        assert_eq!(a.state(), AgentState::Idle);
        assert_eq!(a.wants(), &[ResourceId(0), ResourceId(2)]);
        assert_eq!(a.completed_at(), None);
        assert_eq!(a.service_time(), 4.0);
    }

    #[test]
    fn empty_want_set_is_done_at_zero() {
        let a = agent(0, &[]);
        assert_eq!(a.state(), AgentState::Done);
        assert_eq!(a.completed_at(), Some(0.0));
        assert_eq!(a.wait_time(), Some(0.0));
        assert!(a.service_time().is_sign_positive());
        assert!(a.wait_time().is_some_and(f64::is_sign_positive));
    }

    #[test]
    fn duplicate_want_is_rejected() {
        let wants = vec![(ResourceId(1), 1.0), (ResourceId(1), 2.0)];
        let err = Agent::new(AgentId(4), 1.0, wants).unwrap_err();
        assert_eq!(err, AgentError::DuplicateWant { agent: AgentId(4), resource: ResourceId(1) });
    }

    #[test]
    fn start_serving_twice_is_invalid() {
        let mut a = agent(0, &[(0, 1.0)]);
        a.start_serving(ResourceId(0), 0.0).unwrap();
        let err = a.start_serving(ResourceId(0), 0.5).unwrap_err();
        assert!(matches!(err, AgentError::InvalidState { found: "serving", .. }));
    }

    #[test]
    fn check_done_while_idle_is_invalid() {
        let mut a = agent(0, &[(0, 1.0)]);
        let err = a.check_done(1.0).unwrap_err();
        assert!(matches!(err, AgentError::InvalidState { found: "idle", .. }));
    }

    #[test]
    fn not_done_before_duration_and_unchanged() {
        let mut a = agent(0, &[(0, 2.0)]);
        a.start_serving(ResourceId(0), 1.0).unwrap();
        assert!(!a.check_done(2.5).unwrap());
        assert_eq!(a.state(), AgentState::Serving { resource: ResourceId(0), since: 1.0 });
        assert_eq!(a.wants().len(), 1);
    }

    #[test]
    fn exact_duration_counts_as_done() {
        let mut a = agent(0, &[(0, 2.0)]);
        a.start_serving(ResourceId(0), 1.0).unwrap();
        assert!(a.check_done(3.0).unwrap());
        assert_eq!(a.state(), AgentState::Done);
        assert_eq!(a.completed_at(), Some(3.0));
    }

    #[test]
    fn finishing_one_of_two_returns_to_idle() {
        let mut a = agent(0, &[(0, 1.0), (1, 1.0)]);
        a.start_serving(ResourceId(1), 0.0).unwrap();
        assert!(a.check_done(1.0).unwrap());
        assert_eq!(a.state(), AgentState::Idle);
        assert_eq!(a.wants(), &[ResourceId(0)]);
        assert_eq!(a.completed_at(), None);
    }

    #[test]
    fn unwanted_resource_completes_immediately_without_touching_wants() {
        let mut a = agent(0, &[(2, 5.0)]);
        a.start_serving(ResourceId(0), 0.0).unwrap();
        assert!(a.check_done(0.0).unwrap());
        assert_eq!(a.state(), AgentState::Idle);
        assert_eq!(a.wants(), &[ResourceId(2)]);
    }

    #[test]
    fn done_agent_can_pass_through_unwanted_resource() {
        let mut a = agent(0, &[]);
        a.start_serving(ResourceId(1), 4.0).unwrap();
        assert!(a.check_done(4.0).unwrap());
        assert_eq!(a.state(), AgentState::Done);
        assert_eq!(a.completed_at(), Some(0.0));
    }

    #[test]
    fn wait_time_excludes_service() {
        let mut a = agent(0, &[(0, 2.0)]);
        a.start_serving(ResourceId(0), 3.0).unwrap();
        assert!(a.check_done(5.0).unwrap());
        assert_eq!(a.wait_time(), Some(3.0));
    }
}

#[cfg(test)]
mod choose_next {
    use super::*;

    #[test]
    fn picks_shortest_wanted_queue() {
        let mut agents = vec![
            agent(0, &[(0, 9.0)]),
            agent(1, &[(0, 9.0)]),
            agent(2, &[(0, 1.0), (1, 1.0)]),
        ];
        let mut resources = vec![resource(0), resource(1)];
        resources[0].enqueue(AgentId(0), &mut agents, 0.0).unwrap();
        resources[0].enqueue(AgentId(1), &mut agents, 0.0).unwrap();
        assert_eq!(agents[2].choose_next(&resources), Some(ResourceId(1)));
    }

    #[test]
    fn ties_go_to_want_set_order() {
        let a = agent(0, &[(2, 1.0), (0, 1.0), (1, 1.0)]);
        let resources = vec![resource(0), resource(1), resource(2)];
        assert_eq!(a.choose_next(&resources), Some(ResourceId(2)));
    }

    #[test]
    fn none_when_nothing_left() {
        let a = agent(0, &[]);
        assert_eq!(a.choose_next(&[resource(0)]), None);
    }
}

#[cfg(test)]
mod resource_queue {
    use super::*;
    use crate::{AgentError, AgentState};

    #[test]
    fn first_arrival_starts_serving_immediately() {
        let mut agents = vec![agent(0, &[(0, 1.0)]), agent(1, &[(0, 1.0)])];
        let mut r = resource(0);
        r.enqueue(AgentId(0), &mut agents, 0.5).unwrap();
        r.enqueue(AgentId(1), &mut agents, 0.5).unwrap();
        assert_eq!(agents[0].state(), AgentState::Serving { resource: ResourceId(0), since: 0.5 });
        assert_eq!(agents[1].state(), AgentState::Idle);
        assert_eq!(r.head(), Some(AgentId(0)));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn failed_enqueue_leaves_agent_and_queue_untouched() {
        let mut agents = vec![agent(0, &[(0, 1.0), (1, 1.0)])];
        agents[0].start_serving(ResourceId(1), 0.0).unwrap();
        let mut r = resource(0);

        let err = r.enqueue(AgentId(0), &mut agents, 0.0).unwrap_err();
        assert!(matches!(err, AgentError::InvalidState { operation: "start serving", .. }));
        assert!(r.is_empty());
        assert_eq!(agents[0].queued_at(), None);
        assert!(agents[0].visited().is_empty());
    }

    #[test]
    fn poll_empty_queue_returns_none() {
        let mut agents: Vec<Agent> = vec![];
        let mut r = resource(0);
        assert_eq!(r.poll(&mut agents, 10.0).unwrap(), None);
    }

    #[test]
    fn poll_releases_head_and_starts_next() {
        let mut agents = vec![agent(0, &[(0, 1.0)]), agent(1, &[(0, 2.0)])];
        let mut r = resource(0);
        r.enqueue(AgentId(0), &mut agents, 0.0).unwrap();
        r.enqueue(AgentId(1), &mut agents, 0.0).unwrap();

        assert_eq!(r.poll(&mut agents, 0.5).unwrap(), None);
        assert_eq!(r.poll(&mut agents, 1.0).unwrap(), Some(AgentId(0)));
        assert_eq!(agents[0].queued_at(), None);
        assert_eq!(agents[1].state(), AgentState::Serving { resource: ResourceId(0), since: 1.0 });
        assert_eq!(r.poll(&mut agents, 3.0).unwrap(), Some(AgentId(1)));
        assert!(r.is_empty());
    }

    #[test]
    fn agent_cannot_join_two_queues() {
        let mut agents = vec![agent(0, &[(0, 1.0), (1, 1.0)])];
        let mut r0 = resource(0);
        let mut r1 = resource(1);
        r0.enqueue(AgentId(0), &mut agents, 0.0).unwrap();
        let err = r1.enqueue(AgentId(0), &mut agents, 0.0).unwrap_err();
        assert_eq!(err, AgentError::AlreadyQueued { agent: AgentId(0), resource: ResourceId(0) });
    }

    #[test]
    fn unknown_agent_is_reported() {
        let mut agents: Vec<Agent> = vec![];
        let mut r = resource(0);
        let err = r.enqueue(AgentId(3), &mut agents, 0.0).unwrap_err();
        assert_eq!(err, AgentError::AgentNotFound(AgentId(3)));
    }

    #[test]
    fn enqueue_records_visit() {
        let mut agents = vec![agent(0, &[(0, 1.0)])];
        let mut r = resource(0);
        r.enqueue(AgentId(0), &mut agents, 0.0).unwrap();
        assert_eq!(agents[0].visited(), &[ResourceId(0)]);
        assert_eq!(agents[0].queued_at(), Some(ResourceId(0)));
    }
}

#[cfg(test)]
mod population {
    use qs_core::{CoreError, RunConfig, ServiceDistributions, WantSelection};

    use super::*;
    use crate::{AgentError, Population, PopulationBuilder};

    #[test]
    fn mismatched_ids_are_rejected() {
        let err = Population::new(vec![resource(1)], vec![]).unwrap_err();
        assert!(matches!(err, AgentError::IdMismatch { what: "resource", position: 0, found: 1 }));
    }

    #[test]
    fn wants_must_reference_existing_resources() {
        let err = Population::new(vec![resource(0)], vec![agent(0, &[(3, 1.0)])]).unwrap_err();
        assert_eq!(err, AgentError::ResourceNotFound(ResourceId(3)));
    }

    #[test]
    fn enqueue_and_poll_through_population() {
        let mut pop = Population::new(vec![resource(0)], vec![agent(0, &[(0, 1.0)])]).unwrap();
        pop.enqueue(ResourceId(0), AgentId(0), 0.0).unwrap();
        assert_eq!(pop.queued(), 1);
        assert!(!pop.all_queues_empty());
        assert_eq!(pop.poll(ResourceId(0), 1.0).unwrap(), Some(AgentId(0)));
        assert!(pop.all_queues_empty());
        assert_eq!(pop.choose_next(AgentId(0)).unwrap(), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn builder_rejects_counts_beyond_the_id_range() {
        let dists = ServiceDistributions::new(10.0, 0.1, 0.0, 1.0).unwrap();
        let too_many = u32::MAX as usize + 1;

        let err = PopulationBuilder::new(too_many, 1, 0, WantSelection::Probability(0.5), dists.clone())
            .build()
            .unwrap_err();
        assert!(matches!(err, AgentError::Core(CoreError::Config(_))));

        let err = PopulationBuilder::new(1, too_many, 0, WantSelection::Probability(0.5), dists)
            .build()
            .unwrap_err();
        assert!(matches!(err, AgentError::Core(CoreError::Config(_))));
    }

    #[test]
    fn builder_is_deterministic_for_a_seed() {
        let cfg = RunConfig { seed: 11, ..RunConfig::default() };
        let a = PopulationBuilder::from_config(&cfg).unwrap().build().unwrap();
        let b = PopulationBuilder::from_config(&cfg).unwrap().build().unwrap();
        for (x, y) in a.agents.iter().zip(&b.agents) {
            assert_eq!(x.speed.to_bits(), y.speed.to_bits());
            assert_eq!(x.wants(), y.wants());
            for r in x.wants() {
                assert_eq!(x.duration_at(*r), y.duration_at(*r));
            }
        }
        for (x, y) in a.resources.iter().zip(&b.resources) {
            assert_eq!(x.speed.to_bits(), y.speed.to_bits());
        }
    }

    #[test]
    fn count_selection_gives_exact_want_count() {
        let cfg = RunConfig { p_want: None, n_want: Some(3), ..RunConfig::default() };
        let pop = PopulationBuilder::from_config(&cfg).unwrap().build().unwrap();
        assert!(pop.agents.iter().all(|a| a.wants().len() == 3));
        assert!(pop.resources.iter().all(|r| r.admission == 0.5));
    }

    #[test]
    fn probability_extremes() {
        let all = RunConfig { p_want: Some(1.0), ..RunConfig::default() };
        let pop = PopulationBuilder::from_config(&all).unwrap().build().unwrap();
        assert!(pop.agents.iter().all(|a| a.wants().len() == 6));

        let none = RunConfig { p_want: Some(0.0), ..RunConfig::default() };
        let pop = PopulationBuilder::from_config(&none).unwrap().build().unwrap();
        assert!(pop.agents.iter().all(|a| a.wants().is_empty()));
    }

    #[test]
    fn durations_scale_with_both_speeds() {
        let cfg = RunConfig { agent_count: 20, p_want: Some(1.0), ..RunConfig::default() };
        let pop = PopulationBuilder::from_config(&cfg).unwrap().build().unwrap();
        for a in &pop.agents {
            for r in &pop.resources {
                let d = a.duration_at(r.id).unwrap();
                assert!(d > 0.0 && d.is_finite());
            }
        }
    }

    #[test]
    fn builder_rejects_oversized_count() {
        let dists = ServiceDistributions::new(10.0, 0.1, 0.0, 1.0).unwrap();
        let result = PopulationBuilder::new(1, 2, 0, WantSelection::Count(3), dists).build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let cfg = RunConfig { p_want: Some(0.5), n_want: Some(2), ..RunConfig::default() };
        assert!(PopulationBuilder::from_config(&cfg).is_err());
    }
}
