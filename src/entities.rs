use anyhow::{anyhow, Result};
use num_bigint::BigUint;
use std::str::FromStr;
use substreams::scalar::BigInt;

use crate::{
    constants::{
        ACTION_TABLE, ID_SEPARATOR, PACKAGE_TABLE, PROPOSAL_TABLE, VOTER_TABLE, VOTE_TABLE,
    },
    pb::allowlist_voting::v1::{
        entity::Kind, Action, Entity, Package, Proposal, Vote, Voter, VoterState,
    },
};

/// The entity tables maintained by the indexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Proposal,
    Vote,
    Action,
    Voter,
    Package,
}

impl EntityKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Proposal => PROPOSAL_TABLE,
            EntityKind::Vote => VOTE_TABLE,
            EntityKind::Action => ACTION_TABLE,
            EntityKind::Voter => VOTER_TABLE,
            EntityKind::Package => PACKAGE_TABLE,
        }
    }
}

/// A typed entity that can be stored as a type-erased [`Entity`].
pub trait StoredEntity: Sized {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn into_entity(self) -> Entity;

    fn from_entity(entity: Entity) -> Option<Self>;
}

macro_rules! stored_entity {
    ($ty:ident) => {
        impl StoredEntity for $ty {
            const KIND: EntityKind = EntityKind::$ty;

            fn id(&self) -> &str {
                &self.id
            }

            fn into_entity(self) -> Entity {
                Entity { kind: Some(Kind::$ty(self)) }
            }

            fn from_entity(entity: Entity) -> Option<Self> {
                match entity.kind {
                    Some(Kind::$ty(inner)) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

stored_entity!(Proposal);
stored_entity!(Vote);
stored_entity!(Action);
stored_entity!(Voter);
stored_entity!(Package);

impl Entity {
    pub fn entity_kind(&self) -> Option<EntityKind> {
        self.kind.as_ref().map(|kind| match kind {
            Kind::Proposal(_) => EntityKind::Proposal,
            Kind::Vote(_) => EntityKind::Vote,
            Kind::Action(_) => EntityKind::Action,
            Kind::Voter(_) => EntityKind::Voter,
            Kind::Package(_) => EntityKind::Package,
        })
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.kind.as_ref().map(|kind| match kind {
            Kind::Proposal(e) => e.id.as_str(),
            Kind::Vote(e) => e.id.as_str(),
            Kind::Action(e) => e.id.as_str(),
            Kind::Voter(e) => e.id.as_str(),
            Kind::Package(e) => e.id.as_str(),
        })
    }
}

impl VoterState {
    /// Label stored on `Vote.vote`.
    pub fn label(&self) -> &'static str {
        match self {
            VoterState::None => "None",
            VoterState::Abstain => "Abstain",
            VoterState::Yes => "Yes",
            VoterState::No => "No",
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        i32::try_from(code)
            .ok()
            .and_then(VoterState::from_i32)
    }
}

/// Lowercase `0x` hex rendering of an address, used as package and voter id.
pub fn address_id(address: &[u8]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Renders a decimal on-chain id as minimal lowercase `0x` hex (`1` -> `0x1`).
pub fn vote_id_hex(vote_id: &str) -> Result<String> {
    let value = BigUint::from_str(vote_id)
        .map_err(|e| anyhow!("invalid vote id {:?}: {}", vote_id, e))?;
    Ok(format!("{:#x}", value))
}

pub fn parse_bigint(value: &str) -> Result<BigInt> {
    BigInt::from_str(value).map_err(|_| anyhow!("invalid integer {:?}", value))
}

pub fn proposal_id(package: &[u8], vote_id: &str) -> Result<String> {
    Ok([address_id(package), vote_id_hex(vote_id)?].join(ID_SEPARATOR))
}

pub fn vote_entity_id(voter: &[u8], proposal_id: &str) -> String {
    [address_id(voter).as_str(), proposal_id].join(ID_SEPARATOR)
}

pub fn action_id(proposal_id: &str, index: usize) -> String {
    format!("{proposal_id}{ID_SEPARATOR}{index}")
}

/// Position of an action inside its proposal, read back from the id suffix.
pub fn action_index(action_id: &str) -> Option<usize> {
    action_id
        .rsplit(ID_SEPARATOR)
        .next()
        .and_then(|index| index.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE: [u8; 20] = [0xaa; 20];

    #[test]
    fn test_proposal_id_uses_hex_vote_id() {
        let id = proposal_id(&PACKAGE, "26").unwrap();
        assert_eq!(id, format!("0x{}_0x1a", "aa".repeat(20)));
    }

    #[test]
    fn test_proposal_id_is_deterministic() {
        assert_eq!(proposal_id(&PACKAGE, "1").unwrap(), proposal_id(&PACKAGE, "1").unwrap());
        assert_eq!(vote_id_hex("0").unwrap(), "0x0");
    }

    #[test]
    fn test_invalid_vote_id() {
        assert!(proposal_id(&PACKAGE, "0x1").is_err());
        assert!(proposal_id(&PACKAGE, "").is_err());
    }

    #[test]
    fn test_action_ids_round_trip_index() {
        let proposal = proposal_id(&PACKAGE, "1").unwrap();
        let id = action_id(&proposal, 12);
        assert_eq!(id, format!("{proposal}_12"));
        assert_eq!(action_index(&id), Some(12));
        assert_eq!(action_index(&proposal), None);
    }

    #[test]
    fn test_vote_entity_id() {
        let proposal = proposal_id(&PACKAGE, "1").unwrap();
        let id = vote_entity_id(&[0xcc; 20], &proposal);
        assert_eq!(id, format!("0x{}_{}", "cc".repeat(20), proposal));
    }

    #[test]
    fn test_voter_state_labels() {
        let labels: Vec<_> = (0..4)
            .map(|code| VoterState::from_code(code).map(|state| state.label()))
            .collect();
        assert_eq!(labels, vec![Some("None"), Some("Abstain"), Some("Yes"), Some("No")]);
        assert_eq!(VoterState::from_code(4), None);
    }

    #[test]
    fn test_entity_wrapper() {
        let voter = Voter { id: "0x01".to_string(), pkg: "0x02".to_string() };
        let entity = voter.clone().into_entity();
        assert_eq!(entity.entity_kind(), Some(EntityKind::Voter));
        assert_eq!(entity.entity_id(), Some("0x01"));
        assert_eq!(Voter::from_entity(entity.clone()), Some(voter));
        assert_eq!(Package::from_entity(entity), None);
    }
}
