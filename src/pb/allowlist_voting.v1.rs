// @generated
/// Decoded AllowlistVoting logs of one block, in chain order.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VotingEvents {
    #[prost(message, repeated, tag="1")]
    pub events: ::prost::alloc::vec::Vec<VotingEvent>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VotingEvent {
    /// Address of the emitting voting package.
    #[prost(bytes="vec", tag="1")]
    pub address: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="2")]
    pub tx_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag="3")]
    pub block_number: u64,
    /// Block timestamp in seconds.
    #[prost(uint64, tag="4")]
    pub block_timestamp: u64,
    #[prost(uint64, tag="5")]
    pub log_ordinal: u64,
    #[prost(oneof="voting_event::Event", tags="10, 11, 12, 13, 14, 15, 16")]
    pub event: ::core::option::Option<voting_event::Event>,
    /// getVote(vote_id) read at this block. Unset when the call failed or the event
    /// carries no vote id.
    #[prost(message, optional, tag="20")]
    pub vote_state: ::core::option::Option<VoteStateSnapshot>,
    /// votesLength() read at this block, set on VoteStarted only.
    #[prost(string, optional, tag="21")]
    pub votes_length: ::core::option::Option<::prost::alloc::string::String>,
}
/// Nested message and enum types in `VotingEvent`.
pub mod voting_event {
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Event {
        #[prost(message, tag="10")]
        VoteStarted(super::VoteStarted),
        #[prost(message, tag="11")]
        VoteCast(super::VoteCast),
        #[prost(message, tag="12")]
        VoteExecuted(super::VoteExecuted),
        #[prost(message, tag="13")]
        ConfigUpdated(super::ConfigUpdated),
        #[prost(message, tag="14")]
        UsersAdded(super::UsersAdded),
        #[prost(message, tag="15")]
        UsersRemoved(super::UsersRemoved),
        #[prost(message, tag="16")]
        TrustedForwarderSet(super::TrustedForwarderSet),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteStateSnapshot {
    #[prost(bool, tag="1")]
    pub open: bool,
    #[prost(bool, tag="2")]
    pub executed: bool,
    #[prost(uint64, tag="3")]
    pub start_date: u64,
    #[prost(uint64, tag="4")]
    pub end_date: u64,
    #[prost(uint64, tag="5")]
    pub snapshot_block: u64,
    #[prost(uint64, tag="6")]
    pub support_required: u64,
    #[prost(uint64, tag="7")]
    pub participation_required: u64,
    #[prost(string, tag="8")]
    pub voting_power: ::prost::alloc::string::String,
    #[prost(string, tag="9")]
    pub yea: ::prost::alloc::string::String,
    #[prost(string, tag="10")]
    pub nay: ::prost::alloc::string::String,
    #[prost(string, tag="11")]
    pub abstain: ::prost::alloc::string::String,
    #[prost(message, repeated, tag="12")]
    pub actions: ::prost::alloc::vec::Vec<ActionSnapshot>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionSnapshot {
    #[prost(bytes="vec", tag="1")]
    pub to: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="2")]
    pub value: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="3")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteStarted {
    #[prost(string, tag="1")]
    pub vote_id: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="2")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="3")]
    pub metadata: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteCast {
    #[prost(string, tag="1")]
    pub vote_id: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="2")]
    pub voter: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint32, tag="3")]
    pub voter_state: u32,
    #[prost(string, tag="4")]
    pub voter_weight: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteExecuted {
    #[prost(string, tag="1")]
    pub vote_id: ::prost::alloc::string::String,
    #[prost(bytes="vec", repeated, tag="2")]
    pub exec_results: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigUpdated {
    #[prost(uint64, tag="1")]
    pub participation_required_pct: u64,
    #[prost(uint64, tag="2")]
    pub support_required_pct: u64,
    #[prost(uint64, tag="3")]
    pub min_duration: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UsersAdded {
    #[prost(bytes="vec", repeated, tag="1")]
    pub users: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UsersRemoved {
    #[prost(bytes="vec", repeated, tag="1")]
    pub users: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrustedForwarderSet {
    #[prost(bytes="vec", tag="1")]
    pub forwarder: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Proposal {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub dao: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub pkg: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub vote_id: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="5")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="6")]
    pub metadata: ::prost::alloc::string::String,
    #[prost(bool, optional, tag="7")]
    pub open: ::core::option::Option<bool>,
    #[prost(bool, optional, tag="8")]
    pub executed: ::core::option::Option<bool>,
    #[prost(uint64, optional, tag="9")]
    pub start_date: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag="10")]
    pub end_date: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag="11")]
    pub snapshot_block: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag="12")]
    pub support_required_pct: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag="13")]
    pub participation_required: ::core::option::Option<u64>,
    #[prost(string, optional, tag="14")]
    pub voting_power: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="15")]
    pub yea: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="16")]
    pub nay: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="17")]
    pub abstain: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(uint64, tag="18")]
    pub created_at: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vote {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub voter: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub proposal: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub vote: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub weight: ::prost::alloc::string::String,
    #[prost(uint64, tag="6")]
    pub created_at: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub dao: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub proposal: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="4")]
    pub to: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="5")]
    pub value: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="6")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", optional, tag="7")]
    pub exec_result: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Voter {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub pkg: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Package {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub dao: ::prost::alloc::string::String,
    #[prost(uint64, optional, tag="3")]
    pub participation_required_pct: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag="4")]
    pub support_required_pct: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag="5")]
    pub min_duration: ::core::option::Option<u64>,
    #[prost(string, optional, tag="6")]
    pub votes_length: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bytes="vec", optional, tag="7")]
    pub trusted_forwarder: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entity {
    #[prost(oneof="entity::Kind", tags="1, 2, 3, 4, 5")]
    pub kind: ::core::option::Option<entity::Kind>,
}
/// Nested message and enum types in `Entity`.
pub mod entity {
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(message, tag="1")]
        Proposal(super::Proposal),
        #[prost(message, tag="2")]
        Vote(super::Vote),
        #[prost(message, tag="3")]
        Action(super::Action),
        #[prost(message, tag="4")]
        Voter(super::Voter),
        #[prost(message, tag="5")]
        Package(super::Package),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntityRecord {
    #[prost(uint64, tag="1")]
    pub version: u64,
    #[prost(uint64, tag="2")]
    pub ordinal: u64,
    #[prost(message, optional, tag="3")]
    pub entity: ::core::option::Option<Entity>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntitySnapshot {
    #[prost(message, repeated, tag="1")]
    pub records: ::prost::alloc::vec::Vec<EntityRecord>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoterState {
    None = 0,
    Abstain = 1,
    Yes = 2,
    No = 3,
}
impl VoterState {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            VoterState::None => "VOTER_STATE_NONE",
            VoterState::Abstain => "VOTER_STATE_ABSTAIN",
            VoterState::Yes => "VOTER_STATE_YES",
            VoterState::No => "VOTER_STATE_NO",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "VOTER_STATE_NONE" => Some(Self::None),
            "VOTER_STATE_ABSTAIN" => Some(Self::Abstain),
            "VOTER_STATE_YES" => Some(Self::Yes),
            "VOTER_STATE_NO" => Some(Self::No),
            _ => None,
        }
    }
}
// @@protoc_insertion_point(module)
