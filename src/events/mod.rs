use anyhow::Result;
use substreams_ethereum::{pb::eth::v2::Log, Event};

use crate::{
    abi::allowlist_voting::events as abi,
    constants::ADDRESS_ZERO,
    entities::address_id,
    params::DaoContext,
    pb::allowlist_voting::v1::{
        voting_event, ConfigUpdated, TrustedForwarderSet, UsersAdded, UsersRemoved, VoteCast,
        VoteExecuted, VoteStarted,
    },
    reader::ContractReader,
    store::EntityStore,
};

pub mod config_updated;
pub mod trusted_forwarder_set;
pub mod users_added;
pub mod users_removed;
pub mod vote_cast;
pub mod vote_executed;
pub mod vote_started;

/// Position and origin of the log a payload was decoded from.
#[derive(Clone, Copy, Debug)]
pub struct EventMeta<'a> {
    pub address: &'a [u8],
    pub block_timestamp: u64,
    pub ordinal: u64,
}

impl EventMeta<'_> {
    pub fn package_id(&self) -> String {
        address_id(self.address)
    }
}

/// Everything a handler may touch while applying an event.
pub struct HandlerContext<'a> {
    pub store: &'a mut dyn EntityStore,
    pub reader: &'a dyn ContractReader,
    pub daos: &'a dyn DaoContext,
}

impl HandlerContext<'_> {
    /// Owning dao of a package, the zero address when the context does not know it.
    pub fn dao_of(&self, package: &[u8]) -> String {
        self.daos
            .dao_for(package)
            .unwrap_or_else(|| ADDRESS_ZERO.to_string())
    }
}

/// A state transition applied to the entity store for one decoded event.
pub trait EventTrait {
    /// Applies the event.
    ///
    /// Missing entities and unavailable read-calls only degrade the result. An `Err` is
    /// reserved for malformed payloads and store failures.
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()>;
}

impl voting_event::Event {
    pub fn as_event_trait(&self) -> &dyn EventTrait {
        match self {
            voting_event::Event::VoteStarted(e) => e,
            voting_event::Event::VoteCast(e) => e,
            voting_event::Event::VoteExecuted(e) => e,
            voting_event::Event::ConfigUpdated(e) => e,
            voting_event::Event::UsersAdded(e) => e,
            voting_event::Event::UsersRemoved(e) => e,
            voting_event::Event::TrustedForwarderSet(e) => e,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            voting_event::Event::VoteStarted(_) => "VoteStarted",
            voting_event::Event::VoteCast(_) => "VoteCast",
            voting_event::Event::VoteExecuted(_) => "VoteExecuted",
            voting_event::Event::ConfigUpdated(_) => "ConfigUpdated",
            voting_event::Event::UsersAdded(_) => "UsersAdded",
            voting_event::Event::UsersRemoved(_) => "UsersRemoved",
            voting_event::Event::TrustedForwarderSet(_) => "TrustedForwarderSet",
        }
    }

    /// Id of the vote the payload refers to, if any.
    pub fn vote_id(&self) -> Option<&str> {
        match self {
            voting_event::Event::VoteStarted(e) => Some(&e.vote_id),
            voting_event::Event::VoteCast(e) => Some(&e.vote_id),
            voting_event::Event::VoteExecuted(e) => Some(&e.vote_id),
            _ => None,
        }
    }
}

impl From<abi::VoteStarted> for voting_event::Event {
    fn from(event: abi::VoteStarted) -> Self {
        voting_event::Event::VoteStarted(VoteStarted {
            vote_id: event.vote_id.to_string(),
            creator: event.creator,
            metadata: String::from_utf8_lossy(&event.description).into_owned(),
        })
    }
}

impl From<abi::VoteCast> for voting_event::Event {
    fn from(event: abi::VoteCast) -> Self {
        voting_event::Event::VoteCast(VoteCast {
            vote_id: event.vote_id.to_string(),
            voter: event.voter,
            // uint8 on chain
            voter_state: event.voter_state.to_u64() as u32,
            voter_weight: event.voter_weight.to_string(),
        })
    }
}

impl From<abi::VoteExecuted> for voting_event::Event {
    fn from(event: abi::VoteExecuted) -> Self {
        voting_event::Event::VoteExecuted(VoteExecuted {
            vote_id: event.vote_id.to_string(),
            exec_results: event.exec_results,
        })
    }
}

impl From<abi::ConfigUpdated> for voting_event::Event {
    fn from(event: abi::ConfigUpdated) -> Self {
        voting_event::Event::ConfigUpdated(ConfigUpdated {
            participation_required_pct: event.participation_required_pct.to_u64(),
            support_required_pct: event.support_required_pct.to_u64(),
            min_duration: event.min_duration.to_u64(),
        })
    }
}

impl From<abi::UsersAdded> for voting_event::Event {
    fn from(event: abi::UsersAdded) -> Self {
        voting_event::Event::UsersAdded(UsersAdded { users: event.users })
    }
}

impl From<abi::UsersRemoved> for voting_event::Event {
    fn from(event: abi::UsersRemoved) -> Self {
        voting_event::Event::UsersRemoved(UsersRemoved { users: event.users })
    }
}

impl From<abi::TrustedForwarderSet> for voting_event::Event {
    fn from(event: abi::TrustedForwarderSet) -> Self {
        voting_event::Event::TrustedForwarderSet(TrustedForwarderSet { forwarder: event.forwarder })
    }
}

/// Decodes a given log into one of the voting package events.
pub fn decode_event(log: &Log) -> Option<voting_event::Event> {
    [
        abi::VoteStarted::match_and_decode(log).map(voting_event::Event::from),
        abi::VoteCast::match_and_decode(log).map(voting_event::Event::from),
        abi::VoteExecuted::match_and_decode(log).map(voting_event::Event::from),
        abi::ConfigUpdated::match_and_decode(log).map(voting_event::Event::from),
        abi::UsersAdded::match_and_decode(log).map(voting_event::Event::from),
        abi::UsersRemoved::match_and_decode(log).map(voting_event::Event::from),
        abi::TrustedForwarderSet::match_and_decode(log).map(voting_event::Event::from),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}
