mod abi;
pub mod constants;
pub mod entities;
pub mod events;
pub mod indexer;
pub mod modules;
pub mod params;
pub mod pb;
pub mod reader;
pub mod store;
#[cfg(test)]
mod testing;

substreams_ethereum::init!();

pub mod prelude {
    pub use crate::{
        entities::{EntityKind, StoredEntity},
        indexer::Indexer,
        params::{DaoContext, IndexerParams},
        reader::{ContractReader, ReadCall, VoteState},
        store::{EntityStore, EntityStoreExt, MemoryStore},
    };
}
