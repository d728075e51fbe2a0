use anyhow::Result;
use substreams::{log, scalar::BigInt};

use crate::{
    entities::{address_id, parse_bigint},
    pb::allowlist_voting::v1::{ActionSnapshot, Proposal, VoteStateSnapshot, VotingEvent},
};

/// Outcome of a best-effort read against contract state.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadCall<T> {
    Success(T),
    /// The call failed, or no result was attached to the record.
    Unavailable,
}

impl<T> ReadCall<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            ReadCall::Success(value) => Some(value),
            ReadCall::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for ReadCall<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ReadCall::Unavailable, ReadCall::Success)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionCall {
    pub to: Vec<u8>,
    pub value: BigInt,
    pub data: Vec<u8>,
}

/// Decoded `getVote` output.
#[derive(Clone, Debug, PartialEq)]
pub struct VoteState {
    pub open: bool,
    pub executed: bool,
    pub start_date: u64,
    pub end_date: u64,
    pub snapshot_block: u64,
    pub support_required: u64,
    pub participation_required: u64,
    pub voting_power: BigInt,
    pub yea: BigInt,
    pub nay: BigInt,
    pub abstain: BigInt,
    pub actions: Vec<ActionCall>,
}

type GetVoteOutput = (
    bool,
    bool,
    BigInt,
    BigInt,
    BigInt,
    BigInt,
    BigInt,
    BigInt,
    BigInt,
    BigInt,
    BigInt,
    Vec<(Vec<u8>, BigInt, Vec<u8>)>,
);

impl From<GetVoteOutput> for VoteState {
    fn from(output: GetVoteOutput) -> Self {
        let (
            open,
            executed,
            start_date,
            end_date,
            snapshot_block,
            support_required,
            participation_required,
            voting_power,
            yea,
            nay,
            abstain,
            actions,
        ) = output;
        VoteState {
            open,
            executed,
            start_date: start_date.to_u64(),
            end_date: end_date.to_u64(),
            snapshot_block: snapshot_block.to_u64(),
            support_required: support_required.to_u64(),
            participation_required: participation_required.to_u64(),
            voting_power,
            yea,
            nay,
            abstain,
            actions: actions
                .into_iter()
                .map(|(to, value, data)| ActionCall { to, value, data })
                .collect(),
        }
    }
}

impl VoteState {
    /// Copies every field `getVote` reports onto the proposal.
    pub fn fill_proposal(&self, proposal: &mut Proposal) {
        proposal.open = Some(self.open);
        proposal.executed = Some(self.executed);
        proposal.start_date = Some(self.start_date);
        proposal.end_date = Some(self.end_date);
        proposal.snapshot_block = Some(self.snapshot_block);
        proposal.support_required_pct = Some(self.support_required);
        proposal.participation_required = Some(self.participation_required);
        proposal.voting_power = Some(self.voting_power.to_string());
        self.fill_tally(proposal);
    }

    pub fn fill_tally(&self, proposal: &mut Proposal) {
        proposal.yea = Some(self.yea.to_string());
        proposal.nay = Some(self.nay.to_string());
        proposal.abstain = Some(self.abstain.to_string());
    }
}

/// Read-only view of a voting package's on-chain state.
pub trait ContractReader {
    fn get_vote(&self, package: &[u8], vote_id: &BigInt) -> ReadCall<VoteState>;

    fn votes_length(&self, package: &[u8]) -> ReadCall<BigInt>;
}

impl From<&VoteState> for VoteStateSnapshot {
    fn from(state: &VoteState) -> Self {
        VoteStateSnapshot {
            open: state.open,
            executed: state.executed,
            start_date: state.start_date,
            end_date: state.end_date,
            snapshot_block: state.snapshot_block,
            support_required: state.support_required,
            participation_required: state.participation_required,
            voting_power: state.voting_power.to_string(),
            yea: state.yea.to_string(),
            nay: state.nay.to_string(),
            abstain: state.abstain.to_string(),
            actions: state
                .actions
                .iter()
                .map(|action| ActionSnapshot {
                    to: action.to.clone(),
                    value: action.value.to_string(),
                    data: action.data.clone(),
                })
                .collect(),
        }
    }
}

impl TryFrom<&VoteStateSnapshot> for VoteState {
    type Error = anyhow::Error;

    fn try_from(snapshot: &VoteStateSnapshot) -> Result<Self> {
        let actions = snapshot
            .actions
            .iter()
            .map(|action| {
                Ok(ActionCall {
                    to: action.to.clone(),
                    value: parse_bigint(&action.value)?,
                    data: action.data.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(VoteState {
            open: snapshot.open,
            executed: snapshot.executed,
            start_date: snapshot.start_date,
            end_date: snapshot.end_date,
            snapshot_block: snapshot.snapshot_block,
            support_required: snapshot.support_required,
            participation_required: snapshot.participation_required,
            voting_power: parse_bigint(&snapshot.voting_power)?,
            yea: parse_bigint(&snapshot.yea)?,
            nay: parse_bigint(&snapshot.nay)?,
            abstain: parse_bigint(&snapshot.abstain)?,
            actions,
        })
    }
}

/// Serves the reads attached to a record when it was decoded. Only the emitting package,
/// and for `getVote` only the vote the payload refers to, can be answered.
impl ContractReader for VotingEvent {
    fn get_vote(&self, package: &[u8], vote_id: &BigInt) -> ReadCall<VoteState> {
        let requested = vote_id.to_string();
        let refers_to_vote = self
            .event
            .as_ref()
            .and_then(|event| event.vote_id())
            == Some(requested.as_str());
        if package != self.address.as_slice() || !refers_to_vote {
            return ReadCall::Unavailable;
        }
        match self.vote_state.as_ref().map(VoteState::try_from) {
            Some(Ok(state)) => ReadCall::Success(state),
            Some(Err(err)) => {
                log::info!(
                    "unreadable getVote({}) attached for {}: {}",
                    requested,
                    address_id(package),
                    err
                );
                ReadCall::Unavailable
            }
            None => ReadCall::Unavailable,
        }
    }

    fn votes_length(&self, package: &[u8]) -> ReadCall<BigInt> {
        if package != self.address.as_slice() {
            return ReadCall::Unavailable;
        }
        self.votes_length
            .as_deref()
            .and_then(|length| parse_bigint(length).ok())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pb::allowlist_voting::v1::{voting_event::Event, VoteCast};

    fn output() -> GetVoteOutput {
        (
            true,
            false,
            BigInt::from(100),
            BigInt::from(200),
            BigInt::from(12),
            BigInt::from(50),
            BigInt::from(20),
            BigInt::from(1000),
            BigInt::from(2),
            BigInt::from(1),
            BigInt::from(0),
            vec![(vec![0x11; 20], BigInt::from(5), vec![0xde, 0xad])],
        )
    }

    #[test]
    fn test_read_call_from_option() {
        assert_eq!(ReadCall::from(Some(1)), ReadCall::Success(1));
        assert_eq!(ReadCall::<u8>::from(None), ReadCall::Unavailable);
        assert_eq!(ReadCall::Success(3).ok(), Some(3));
        assert_eq!(ReadCall::<u8>::Unavailable.ok(), None);
    }

    #[test]
    fn test_vote_state_from_call_output() {
        let state = VoteState::from(output());
        assert!(state.open);
        assert_eq!(state.end_date, 200);
        assert_eq!(state.support_required, 50);
        assert_eq!(
            state.actions,
            vec![ActionCall { to: vec![0x11; 20], value: BigInt::from(5), data: vec![0xde, 0xad] }]
        );
    }

    #[test]
    fn test_fill_proposal() {
        let mut proposal = Proposal::default();
        VoteState::from(output()).fill_proposal(&mut proposal);

        assert_eq!(proposal.open, Some(true));
        assert_eq!(proposal.executed, Some(false));
        assert_eq!(proposal.snapshot_block, Some(12));
        assert_eq!(proposal.voting_power.as_deref(), Some("1000"));
        assert_eq!(proposal.yea.as_deref(), Some("2"));
        assert_eq!(proposal.nay.as_deref(), Some("1"));
        assert_eq!(proposal.abstain.as_deref(), Some("0"));
    }

    fn attached(vote_id: &str) -> VotingEvent {
        VotingEvent {
            address: vec![0xaa; 20],
            event: Some(Event::VoteCast(VoteCast {
                vote_id: vote_id.to_string(),
                voter: vec![0xcc; 20],
                voter_state: 2,
                voter_weight: "1".to_string(),
            })),
            vote_state: Some(VoteStateSnapshot::from(&VoteState::from(output()))),
            votes_length: Some("4".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_attached_reads_round_trip() {
        let record = attached("1");

        assert_eq!(
            record.get_vote(&[0xaa; 20], &BigInt::from(1)),
            ReadCall::Success(VoteState::from(output()))
        );
        assert_eq!(ContractReader::votes_length(&record, &[0xaa; 20]), ReadCall::Success(BigInt::from(4)));
    }

    #[test]
    fn test_attached_reads_scoped_to_record() {
        let record = attached("1");

        assert_eq!(record.get_vote(&[0xaa; 20], &BigInt::from(2)), ReadCall::Unavailable);
        assert_eq!(record.get_vote(&[0xab; 20], &BigInt::from(1)), ReadCall::Unavailable);
        assert_eq!(ContractReader::votes_length(&record, &[0xab; 20]), ReadCall::Unavailable);
    }

    #[test]
    fn test_missing_or_unreadable_reads_are_unavailable() {
        let mut record = attached("1");
        record
            .vote_state
            .as_mut()
            .unwrap()
            .yea = "lots".to_string();
        record.votes_length = None;

        assert_eq!(record.get_vote(&[0xaa; 20], &BigInt::from(1)), ReadCall::Unavailable);
        assert_eq!(ContractReader::votes_length(&record, &[0xaa; 20]), ReadCall::Unavailable);

        record.vote_state = None;
        assert_eq!(record.get_vote(&[0xaa; 20], &BigInt::from(1)), ReadCall::Unavailable);
    }
}
