use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Result};
use itertools::Itertools;
use prost::Message;
use substreams::Hex;
use substreams_entity_change::{
    pb::entity::EntityChanges,
    tables::{Row, Tables},
};

use crate::{
    entities::{action_index, parse_bigint, EntityKind, StoredEntity},
    pb::allowlist_voting::v1::{
        entity::Kind, Action, Entity, EntityRecord, EntitySnapshot, Proposal, Vote, Voter,
    },
};

/// Keyed storage of the derived entities.
///
/// Writes carry the ordinal of the log that caused them. Implementations must treat a
/// failed write as unrecoverable.
pub trait EntityStore {
    fn get(&self, kind: EntityKind, id: &str) -> Option<Entity>;

    fn set(&mut self, ordinal: u64, entity: Entity) -> Result<()>;

    /// Returns whether an entity was removed.
    fn delete(&mut self, ordinal: u64, kind: EntityKind, id: &str) -> Result<bool>;
}

/// Typed access on top of [`EntityStore`].
pub trait EntityStoreExt: EntityStore {
    fn load<T: StoredEntity>(&self, id: &str) -> Option<T> {
        self.get(T::KIND, id)
            .and_then(T::from_entity)
    }

    fn save<T: StoredEntity>(&mut self, ordinal: u64, entity: T) -> Result<()> {
        self.set(ordinal, entity.into_entity())
    }

    fn remove<T: StoredEntity>(&mut self, ordinal: u64, id: &str) -> Result<bool> {
        self.delete(ordinal, T::KIND, id)
    }
}

impl<S: EntityStore + ?Sized> EntityStoreExt for S {}

type Key = (EntityKind, String);

/// In-memory [`EntityStore`] that journals the keys touched since the last flush.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<Key, EntityRecord>,
    // key -> whether it existed before the first write of the current flush window
    journal: BTreeMap<Key, bool>,
}

impl EntityStore for MemoryStore {
    fn get(&self, kind: EntityKind, id: &str) -> Option<Entity> {
        self.records
            .get(&(kind, id.to_string()))
            .and_then(|record| record.entity.clone())
    }

    fn set(&mut self, ordinal: u64, entity: Entity) -> Result<()> {
        let kind = entity
            .entity_kind()
            .ok_or_else(|| anyhow!("cannot store an entity without a kind"))?;
        let id = entity
            .entity_id()
            .unwrap_or_default()
            .to_string();
        if id.is_empty() {
            bail!("cannot store {} with an empty id", kind.table_name());
        }

        let key = (kind, id);
        let previous = self.records.get(&key);
        let version = previous.map_or(1, |record| record.version + 1);
        self.journal
            .entry(key.clone())
            .or_insert(previous.is_some());
        self.records
            .insert(key, EntityRecord { version, ordinal, entity: Some(entity) });
        Ok(())
    }

    fn delete(&mut self, _ordinal: u64, kind: EntityKind, id: &str) -> Result<bool> {
        let key = (kind, id.to_string());
        if !self.records.contains_key(&key) {
            return Ok(false);
        }
        self.journal
            .entry(key.clone())
            .or_insert(true);
        self.records.remove(&key);
        Ok(true)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self, kind: EntityKind, id: &str) -> Option<u64> {
        self.records
            .get(&(kind, id.to_string()))
            .map(|record| record.version)
    }

    pub fn iter<T: StoredEntity>(&self) -> impl Iterator<Item = T> + '_ {
        self.records
            .range((T::KIND, String::new())..)
            .take_while(|((kind, _), _)| *kind == T::KIND)
            .filter_map(|(_, record)| {
                record
                    .entity
                    .clone()
                    .and_then(T::from_entity)
            })
    }

    pub fn votes_for_proposal(&self, proposal_id: &str) -> Vec<Vote> {
        self.iter::<Vote>()
            .filter(|vote| vote.proposal == proposal_id)
            .collect()
    }

    /// Actions of a proposal in their on-chain order.
    pub fn actions_for_proposal(&self, proposal_id: &str) -> Vec<Action> {
        self.iter::<Action>()
            .filter(|action| action.proposal == proposal_id)
            .sorted_by_key(|action| action_index(&action.id))
            .collect()
    }

    pub fn voters_for_package(&self, package_id: &str) -> Vec<Voter> {
        self.iter::<Voter>()
            .filter(|voter| voter.pkg == package_id)
            .collect()
    }

    pub fn proposals_for_package(&self, package_id: &str) -> Vec<Proposal> {
        self.iter::<Proposal>()
            .filter(|proposal| proposal.pkg == package_id)
            .collect()
    }

    /// Number of keys written or deleted since the last flush.
    pub fn pending_changes(&self) -> usize {
        self.journal.len()
    }

    /// Drains the journal into entity changes.
    ///
    /// A key created and removed within the same window produces nothing.
    pub fn flush_entity_changes(&mut self) -> Result<EntityChanges> {
        let mut tables = Tables::new();
        for ((kind, id), existed) in std::mem::take(&mut self.journal) {
            let current = self
                .records
                .get(&(kind, id.clone()))
                .and_then(|record| record.entity.as_ref());
            match (current, existed) {
                (None, false) => {}
                (None, true) => {
                    tables.delete_row(kind.table_name(), id);
                }
                (Some(entity), false) => {
                    write_fields(tables.create_row(kind.table_name(), id), entity)?;
                }
                (Some(entity), true) => {
                    write_fields(tables.update_row(kind.table_name(), id), entity)?;
                }
            }
        }
        Ok(tables.to_entity_changes())
    }

    pub fn snapshot(&self) -> Vec<u8> {
        EntitySnapshot { records: self.records.values().cloned().collect() }.encode_to_vec()
    }

    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let snapshot = EntitySnapshot::decode(bytes)?;
        let mut records = BTreeMap::new();
        for record in snapshot.records {
            let entity = record
                .entity
                .as_ref()
                .ok_or_else(|| anyhow!("snapshot record without entity"))?;
            let kind = entity
                .entity_kind()
                .ok_or_else(|| anyhow!("snapshot entity without kind"))?;
            let id = entity
                .entity_id()
                .unwrap_or_default()
                .to_string();
            if id.is_empty() {
                bail!("snapshot {} without id", kind.table_name());
            }
            records.insert((kind, id), record);
        }
        Ok(Self { records, journal: BTreeMap::new() })
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    format!("0x{}", Hex(bytes))
}

fn write_fields(row: &mut Row, entity: &Entity) -> Result<()> {
    let Some(kind) = &entity.kind else {
        return Ok(());
    };
    match kind {
        Kind::Proposal(proposal) => {
            row.set("dao", proposal.dao.clone())
                .set("pkg", proposal.pkg.clone())
                .set("voteId", parse_bigint(&proposal.vote_id)?)
                .set("creator", hex_bytes(&proposal.creator))
                .set("metadata", proposal.metadata.clone())
                .set("createdAt", proposal.created_at);
            if let Some(open) = proposal.open {
                row.set("open", open);
            }
            if let Some(executed) = proposal.executed {
                row.set("executed", executed);
            }
            let dates = [
                ("startDate", proposal.start_date),
                ("endDate", proposal.end_date),
                ("snapshotBlock", proposal.snapshot_block),
                ("supportRequiredPct", proposal.support_required_pct),
                ("participationRequired", proposal.participation_required),
            ];
            for (name, value) in dates {
                if let Some(value) = value {
                    row.set(name, value);
                }
            }
            let amounts = [
                ("votingPower", &proposal.voting_power),
                ("yea", &proposal.yea),
                ("nay", &proposal.nay),
                ("abstain", &proposal.abstain),
            ];
            for (name, value) in amounts {
                if let Some(value) = value {
                    row.set(name, parse_bigint(value)?);
                }
            }
        }
        Kind::Vote(vote) => {
            row.set("voter", vote.voter.clone())
                .set("proposal", vote.proposal.clone())
                .set("vote", vote.vote.clone())
                .set("weight", parse_bigint(&vote.weight)?)
                .set("createdAt", vote.created_at);
        }
        Kind::Action(action) => {
            row.set("dao", action.dao.clone())
                .set("proposal", action.proposal.clone())
                .set("to", hex_bytes(&action.to))
                .set("value", parse_bigint(&action.value)?)
                .set("data", hex_bytes(&action.data));
            if let Some(result) = &action.exec_result {
                row.set("execResult", hex_bytes(result));
            }
        }
        Kind::Voter(voter) => {
            row.set("pkg", voter.pkg.clone());
        }
        Kind::Package(package) => {
            row.set("dao", package.dao.clone());
            let config = [
                ("participationRequiredPct", package.participation_required_pct),
                ("supportRequiredPct", package.support_required_pct),
                ("minDuration", package.min_duration),
            ];
            for (name, value) in config {
                if let Some(value) = value {
                    row.set(name, value);
                }
            }
            if let Some(votes_length) = &package.votes_length {
                row.set("votesLength", parse_bigint(votes_length)?);
            }
            if let Some(forwarder) = &package.trusted_forwarder {
                row.set("trustedForwarder", hex_bytes(forwarder));
            }
        }
    }
    Ok(())
}
