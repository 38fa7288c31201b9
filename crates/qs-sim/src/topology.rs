//! The `Topology` trait and the two queue layouts being compared.

use qs_agent::Population;
use qs_core::{AgentId, ResourceId, TopologyKind};

use crate::SimResult;

/// Routing rule applied whenever an agent needs a queue.
///
/// `entry` is asked once per agent when the run starts; `next` is asked each
/// time an agent leaves the head of a queue.  Returning `None` means the
/// agent does not (re)join any queue.
pub trait Topology {
    /// Which topology this is, for results and logging.
    fn kind(&self) -> TopologyKind;

    /// Resource `agent` joins at the start of the run.
    fn entry(&self, agent: AgentId, population: &Population) -> SimResult<Option<ResourceId>>;

    /// Resource `agent` joins after finishing at `from`.
    fn next(
        &self,
        agent:      AgentId,
        from:       ResourceId,
        population: &Population,
    ) -> SimResult<Option<ResourceId>>;
}

// ── SeparateQueues ────────────────────────────────────────────────────────────

/// One queue per resource.  Agents always join the shortest queue among the
/// resources they still want; see [`qs_agent::Agent::choose_next`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SeparateQueues;

impl Topology for SeparateQueues {
    fn kind(&self) -> TopologyKind {
        TopologyKind::Separate
    }

    fn entry(&self, agent: AgentId, population: &Population) -> SimResult<Option<ResourceId>> {
        Ok(population.choose_next(agent)?)
    }

    fn next(
        &self,
        agent:      AgentId,
        _from:      ResourceId,
        population: &Population,
    ) -> SimResult<Option<ResourceId>> {
        Ok(population.choose_next(agent)?)
    }
}

// ── SingleChain ───────────────────────────────────────────────────────────────

/// One chained line past every resource in id order.
///
/// The want-set is never consulted: agents visit every resource, and the ones
/// they did not want complete on the tick they reach the head.
#[derive(Copy, Clone, Debug, Default)]
pub struct SingleChain;

impl Topology for SingleChain {
    fn kind(&self) -> TopologyKind {
        TopologyKind::Single
    }

    fn entry(&self, _agent: AgentId, population: &Population) -> SimResult<Option<ResourceId>> {
        Ok(population.resource(ResourceId(0)).map(|r| r.id))
    }

    fn next(
        &self,
        _agent:     AgentId,
        from:       ResourceId,
        population: &Population,
    ) -> SimResult<Option<ResourceId>> {
        let next = ResourceId(from.0 + 1);
        Ok(population.resource(next).map(|r| r.id))
    }
}
