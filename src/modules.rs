use anyhow::Result;
use itertools::Itertools;
use substreams::{log, scalar::BigInt};
use substreams_ethereum::pb::eth::v2 as eth;

use crate::{
    abi::allowlist_voting::functions::{GetVote, VotesLength},
    entities::{address_id, parse_bigint},
    events::decode_event,
    params::IndexerParams,
    pb::allowlist_voting::v1::{voting_event, VoteStateSnapshot, VotingEvent, VotingEvents},
    reader::{ContractReader, ReadCall, VoteState},
};

#[substreams::handlers::map]
pub fn map_voting_events(params: String, block: eth::Block) -> Result<VotingEvents> {
    let params = IndexerParams::parse(&params)?;
    Ok(extract_voting_events(&params, &block, &RpcContractReader))
}

/// Reads through `eth_call` at the block being processed.
struct RpcContractReader;

impl ContractReader for RpcContractReader {
    fn get_vote(&self, package: &[u8], vote_id: &BigInt) -> ReadCall<VoteState> {
        let call = GetVote { vote_id: vote_id.clone() };
        match call.call(package.to_vec()) {
            Some(output) => ReadCall::Success(output.into()),
            None => {
                log::info!("getVote({}) unavailable on {}", vote_id, address_id(package));
                ReadCall::Unavailable
            }
        }
    }

    fn votes_length(&self, package: &[u8]) -> ReadCall<BigInt> {
        let length = VotesLength {}.call(package.to_vec());
        if length.is_none() {
            log::info!("votesLength() unavailable on {}", address_id(package));
        }
        length.into()
    }
}

/// Decodes the logs emitted by tracked packages in successful transactions, in log
/// ordinal order, with the contract reads their handlers need attached.
pub fn extract_voting_events(
    params: &IndexerParams,
    block: &eth::Block,
    reader: &dyn ContractReader,
) -> VotingEvents {
    let block_timestamp = block.timestamp_seconds();

    let events = block
        .logs()
        .filter(|log| params.is_tracked(log.address()))
        .filter_map(|log| {
            let event = decode_event(log.log)?;
            log::debug!(
                "decoded {} from {} at ordinal {}",
                event.name(),
                address_id(log.address()),
                log.ordinal()
            );
            let mut record = VotingEvent {
                address: log.address().to_vec(),
                tx_hash: log.receipt.transaction.hash.clone(),
                block_number: block.number,
                block_timestamp,
                log_ordinal: log.ordinal(),
                event: Some(event),
                ..Default::default()
            };
            attach_reads(&mut record, reader);
            Some(record)
        })
        .sorted_by_key(|event| event.log_ordinal)
        .collect();

    VotingEvents { events }
}

/// Reads `getVote` for events that refer to a vote, and `votesLength` for `VoteStarted`.
/// Failed reads are left unset.
pub(crate) fn attach_reads(record: &mut VotingEvent, reader: &dyn ContractReader) {
    let Some(payload) = &record.event else {
        return;
    };
    let Some(vote_id) = payload
        .vote_id()
        .and_then(|id| parse_bigint(id).ok())
    else {
        return;
    };
    let started = matches!(payload, voting_event::Event::VoteStarted(_));

    record.vote_state = reader
        .get_vote(&record.address, &vote_id)
        .ok()
        .as_ref()
        .map(VoteStateSnapshot::from);
    if started {
        record.votes_length = reader
            .votes_length(&record.address)
            .ok()
            .map(|length| length.to_string());
    }
}
