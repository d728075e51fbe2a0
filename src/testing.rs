//! Fixtures shared by the unit tests.
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use anyhow::Result;
use ethabi::Token;
use substreams::scalar::BigInt;
use substreams_ethereum::pb::eth::v2::{
    Block, BlockHeader, Log, TransactionReceipt, TransactionTrace, TransactionTraceStatus,
};
use tiny_keccak::{Hasher, Keccak};

use crate::{
    events::{EventMeta, HandlerContext},
    modules::attach_reads,
    params::{IndexerParams, PackageParams},
    pb::allowlist_voting::v1::{
        voting_event::Event, ConfigUpdated, TrustedForwarderSet, UsersAdded, UsersRemoved,
        VoteCast, VoteExecuted, VoteStarted, VotingEvent,
    },
    reader::{ActionCall, ContractReader, ReadCall, VoteState},
    store::{EntityStoreExt, MemoryStore},
};

pub const PACKAGE: [u8; 20] = [0xaa; 20];
pub const OTHER_PACKAGE: [u8; 20] = [0xab; 20];
pub const DAO: [u8; 20] = [0xda; 20];
pub const CREATOR: [u8; 20] = [0xbb; 20];
pub const VOTER: [u8; 20] = [0xcc; 20];
pub const TIMESTAMP: u64 = 1_700_000_000;

pub fn hex_id(address: &[u8]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Canned contract state. Interior mutability lets a test change the answers while an
/// indexer borrows the reader.
#[derive(Default)]
pub struct MockReader {
    votes: RefCell<HashMap<(Vec<u8>, String), VoteState>>,
    lengths: RefCell<HashMap<Vec<u8>, BigInt>>,
    calls: Cell<usize>,
}

impl MockReader {
    pub fn set_vote(&self, package: &[u8], vote_id: u64, state: VoteState) {
        self.votes
            .borrow_mut()
            .insert((package.to_vec(), vote_id.to_string()), state);
    }

    /// Makes `getVote` revert.
    pub fn fail_vote(&self, package: &[u8], vote_id: u64) {
        self.votes
            .borrow_mut()
            .remove(&(package.to_vec(), vote_id.to_string()));
    }

    pub fn set_votes_length(&self, package: &[u8], length: u64) {
        self.lengths
            .borrow_mut()
            .insert(package.to_vec(), BigInt::from(length));
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ContractReader for MockReader {
    fn get_vote(&self, package: &[u8], vote_id: &BigInt) -> ReadCall<VoteState> {
        self.calls.set(self.calls.get() + 1);
        self.votes
            .borrow()
            .get(&(package.to_vec(), vote_id.to_string()))
            .cloned()
            .into()
    }

    fn votes_length(&self, package: &[u8]) -> ReadCall<BigInt> {
        self.calls.set(self.calls.get() + 1);
        self.lengths
            .borrow()
            .get(package)
            .cloned()
            .into()
    }
}

pub fn vote_state(yea: u64, nay: u64, abstain: u64, actions: usize) -> VoteState {
    VoteState {
        open: true,
        executed: false,
        start_date: TIMESTAMP,
        end_date: TIMESTAMP + 3600,
        snapshot_block: 100,
        support_required: 50,
        participation_required: 20,
        voting_power: BigInt::from(1_000u64),
        yea: BigInt::from(yea),
        nay: BigInt::from(nay),
        abstain: BigInt::from(abstain),
        actions: (0..actions)
            .map(|index| ActionCall {
                to: vec![index as u8 + 1; 20],
                value: BigInt::from(index as u64),
                data: vec![0xca, 0xfe, index as u8],
            })
            .collect(),
    }
}

pub fn params() -> IndexerParams {
    IndexerParams {
        packages: vec![PackageParams {
            address: PACKAGE.to_vec(),
            dao: DAO.to_vec(),
            participation_required_pct: Some(20),
            support_required_pct: Some(50),
            min_duration: Some(3600),
        }],
    }
}

/// A store, reader and dao context with `PACKAGE` registered.
pub struct TestEnv {
    pub store: MemoryStore,
    pub reader: MockReader,
    pub params: IndexerParams,
    ordinal: u64,
}

impl TestEnv {
    pub fn new() -> Self {
        let params = params();
        let mut store = MemoryStore::new();
        for package in params.registered_packages() {
            store.save(0, package).unwrap();
        }
        Self { store, reader: MockReader::default(), params, ordinal: 0 }
    }

    pub fn apply(&mut self, event: Event) -> Result<()> {
        self.apply_at(&PACKAGE, event)
    }

    pub fn apply_at(&mut self, address: &[u8], event: Event) -> Result<()> {
        self.ordinal += 1;
        let meta = EventMeta { address, block_timestamp: TIMESTAMP, ordinal: self.ordinal };
        let mut ctx = HandlerContext {
            store: &mut self.store,
            reader: &self.reader,
            daos: &self.params,
        };
        event
            .as_event_trait()
            .apply(&meta, &mut ctx)
    }
}

pub fn vote_started(vote_id: u64, metadata: &str) -> Event {
    Event::VoteStarted(VoteStarted {
        vote_id: vote_id.to_string(),
        creator: CREATOR.to_vec(),
        metadata: metadata.to_string(),
    })
}

pub fn vote_cast(vote_id: u64, voter: &[u8], voter_state: u32, weight: u64) -> Event {
    Event::VoteCast(VoteCast {
        vote_id: vote_id.to_string(),
        voter: voter.to_vec(),
        voter_state,
        voter_weight: weight.to_string(),
    })
}

pub fn vote_executed(vote_id: u64, exec_results: Vec<Vec<u8>>) -> Event {
    Event::VoteExecuted(VoteExecuted { vote_id: vote_id.to_string(), exec_results })
}

pub fn config_updated(participation: u64, support: u64, min_duration: u64) -> Event {
    Event::ConfigUpdated(ConfigUpdated {
        participation_required_pct: participation,
        support_required_pct: support,
        min_duration,
    })
}

pub fn users_added(users: &[[u8; 20]]) -> Event {
    Event::UsersAdded(UsersAdded { users: users.iter().map(|u| u.to_vec()).collect() })
}

pub fn users_removed(users: &[[u8; 20]]) -> Event {
    Event::UsersRemoved(UsersRemoved { users: users.iter().map(|u| u.to_vec()).collect() })
}

pub fn trusted_forwarder_set(forwarder: &[u8]) -> Event {
    Event::TrustedForwarderSet(TrustedForwarderSet { forwarder: forwarder.to_vec() })
}

pub fn record(block_number: u64, log_ordinal: u64, address: &[u8], event: Event) -> VotingEvent {
    VotingEvent {
        address: address.to_vec(),
        tx_hash: vec![block_number as u8; 32],
        block_number,
        block_timestamp: TIMESTAMP + block_number * 12,
        log_ordinal,
        event: Some(event),
        ..Default::default()
    }
}

/// Attaches the reads `reader` answers, as the block decoder does.
pub fn with_reads(mut record: VotingEvent, reader: &MockReader) -> VotingEvent {
    attach_reads(&mut record, reader);
    record
}

pub fn topic(signature: &str) -> Vec<u8> {
    let mut output = [0u8; 32];
    let mut hasher = Keccak::v256();
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    output.to_vec()
}

fn uint_word(value: u64) -> Vec<u8> {
    ethabi::encode(&[Token::Uint(value.into())])
}

fn address_token(address: &[u8]) -> Token {
    Token::Address(ethabi::Address::from_slice(address))
}

pub fn log(address: &[u8], topics: Vec<Vec<u8>>, data: Vec<u8>, ordinal: u64) -> Log {
    Log { address: address.to_vec(), topics, data, ordinal, ..Default::default() }
}

pub fn vote_started_log(
    address: &[u8],
    vote_id: u64,
    creator: &[u8],
    description: &str,
    ordinal: u64,
) -> Log {
    log(
        address,
        vec![
            topic("VoteStarted(uint256,address,bytes)"),
            uint_word(vote_id),
            ethabi::encode(&[address_token(creator)]),
        ],
        ethabi::encode(&[Token::Bytes(description.as_bytes().to_vec())]),
        ordinal,
    )
}

pub fn vote_cast_log(
    address: &[u8],
    vote_id: u64,
    voter: &[u8],
    voter_state: u64,
    weight: u64,
    ordinal: u64,
) -> Log {
    log(
        address,
        vec![
            topic("VoteCast(uint256,address,uint8,uint256)"),
            uint_word(vote_id),
            ethabi::encode(&[address_token(voter)]),
        ],
        ethabi::encode(&[Token::Uint(voter_state.into()), Token::Uint(weight.into())]),
        ordinal,
    )
}

pub fn vote_executed_log(
    address: &[u8],
    vote_id: u64,
    exec_results: &[Vec<u8>],
    ordinal: u64,
) -> Log {
    let results = exec_results
        .iter()
        .cloned()
        .map(Token::Bytes)
        .collect();
    log(
        address,
        vec![topic("VoteExecuted(uint256,bytes[])"), uint_word(vote_id)],
        ethabi::encode(&[Token::Array(results)]),
        ordinal,
    )
}

pub fn config_updated_log(
    address: &[u8],
    participation: u64,
    support: u64,
    min_duration: u64,
    ordinal: u64,
) -> Log {
    log(
        address,
        vec![topic("ConfigUpdated(uint64,uint64,uint64)")],
        ethabi::encode(&[
            Token::Uint(participation.into()),
            Token::Uint(support.into()),
            Token::Uint(min_duration.into()),
        ]),
        ordinal,
    )
}

pub fn users_added_log(address: &[u8], users: &[[u8; 20]], ordinal: u64) -> Log {
    let users = users
        .iter()
        .map(|user| address_token(user))
        .collect();
    log(
        address,
        vec![topic("UsersAdded(address[])")],
        ethabi::encode(&[Token::Array(users)]),
        ordinal,
    )
}

pub fn block(number: u64, timestamp: i64, transactions: Vec<TransactionTrace>) -> Block {
    let mut header = BlockHeader { number, ..Default::default() };
    header.timestamp = Some(Default::default());
    if let Some(ts) = header.timestamp.as_mut() {
        ts.seconds = timestamp;
    }
    Block { number, header: Some(header), transaction_traces: transactions, ..Default::default() }
}

pub fn transaction(hash: u8, succeeded: bool, logs: Vec<Log>) -> TransactionTrace {
    let status = if succeeded {
        TransactionTraceStatus::Succeeded
    } else {
        TransactionTraceStatus::Reverted
    };
    TransactionTrace {
        hash: vec![hash; 32],
        status: status as i32,
        receipt: Some(TransactionReceipt { logs, ..Default::default() }),
        ..Default::default()
    }
}
