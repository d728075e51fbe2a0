use std::collections::HashMap;

use anyhow::Result;
use substreams::log;
use substreams_entity_change::pb::entity::EntityChanges;

use crate::{
    entities::address_id,
    events::{EventMeta, HandlerContext},
    params::{DaoContext, IndexerParams},
    pb::allowlist_voting::v1::{Package, VotingEvent, VotingEvents},
    store::{EntityStore, EntityStoreExt, MemoryStore},
};

/// Applies decoded voting events to an entity store, one at a time.
///
/// Contract reads are served from the state attached to each record when it was decoded,
/// so the indexer itself never issues calls.
pub struct Indexer<S, C> {
    store: S,
    context: C,
    // last (block number, log ordinal) seen per emitting address
    positions: HashMap<Vec<u8>, (u64, u64)>,
    out_of_order: u64,
}

impl<S, C> Indexer<S, C>
where
    S: EntityStore,
    C: DaoContext,
{
    pub fn new(store: S, context: C) -> Self {
        Self { store, context, positions: HashMap::new(), out_of_order: 0 }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Events that arrived behind an already processed position of the same address.
    pub fn out_of_order_events(&self) -> u64 {
        self.out_of_order
    }

    /// Registers packages created outside of the event stream. Packages already in the
    /// store are kept as they are. Returns how many were added.
    pub fn register_packages(&mut self, packages: Vec<Package>) -> Result<usize> {
        let mut added = 0;
        for package in packages {
            if self
                .store
                .load::<Package>(&package.id)
                .is_some()
            {
                continue;
            }
            self.store.save(0, package)?;
            added += 1;
        }
        Ok(added)
    }

    pub fn process(&mut self, events: &VotingEvents) -> Result<()> {
        for event in &events.events {
            self.process_event(event)?;
        }
        Ok(())
    }

    /// Applies a single decoded event.
    ///
    /// Events emitted by the same address must arrive in non-decreasing
    /// `(block_number, log_ordinal)` order. A regression is counted and logged, then
    /// processed anyway; the resulting state is not guaranteed to be consistent.
    ///
    /// Errors only come from malformed payloads or the store, and must halt indexing.
    pub fn process_event(&mut self, event: &VotingEvent) -> Result<()> {
        let Some(payload) = &event.event else {
            log::debug!("record at {}:{} has no payload", event.block_number, event.log_ordinal);
            return Ok(());
        };
        self.track_position(event);

        log::debug!(
            "{} from {} at {}:{}",
            payload.name(),
            address_id(&event.address),
            event.block_number,
            event.log_ordinal
        );
        let meta = EventMeta {
            address: &event.address,
            block_timestamp: event.block_timestamp,
            ordinal: event.log_ordinal,
        };
        let mut ctx = HandlerContext {
            store: &mut self.store,
            reader: event,
            daos: &self.context,
        };
        payload
            .as_event_trait()
            .apply(&meta, &mut ctx)
    }

    fn track_position(&mut self, event: &VotingEvent) {
        let position = (event.block_number, event.log_ordinal);
        let last = self
            .positions
            .entry(event.address.clone())
            .or_insert(position);
        if position < *last {
            self.out_of_order += 1;
            log::info!(
                "out of order event from {}: {:?} after {:?}",
                address_id(&event.address),
                position,
                last
            );
        } else {
            *last = position;
        }
    }
}

impl<S> Indexer<S, IndexerParams>
where
    S: EntityStore,
{
    /// Builds an indexer with every package listed in the params registered.
    pub fn from_params(store: S, params: IndexerParams) -> Result<Self> {
        let packages = params.registered_packages();
        let mut indexer = Self::new(store, params);
        indexer.register_packages(packages)?;
        Ok(indexer)
    }
}

impl<C> Indexer<MemoryStore, C>
where
    C: DaoContext,
{
    /// Processes one block worth of events and returns the resulting entity changes.
    pub fn process_block(&mut self, events: &VotingEvents) -> Result<EntityChanges> {
        self.process(events)?;
        self.store.flush_entity_changes()
    }
}
