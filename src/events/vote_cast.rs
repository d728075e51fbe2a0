use anyhow::Result;
use substreams::log;

use crate::{
    entities::{address_id, parse_bigint, proposal_id, vote_entity_id},
    events::{EventMeta, EventTrait, HandlerContext},
    pb::allowlist_voting::v1::{Proposal, Vote, VoteCast, VoterState},
    reader::ReadCall,
    store::EntityStoreExt,
};

impl EventTrait for VoteCast {
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
        let vote_id = parse_bigint(&self.vote_id)?;
        let proposal_id = proposal_id(meta.address, &self.vote_id)?;

        match VoterState::from_code(self.voter_state) {
            Some(state) => {
                let vote = Vote {
                    id: vote_entity_id(&self.voter, &proposal_id),
                    voter: address_id(&self.voter),
                    proposal: proposal_id.clone(),
                    vote: state.label().to_string(),
                    weight: parse_bigint(&self.voter_weight)?.to_string(),
                    created_at: meta.block_timestamp,
                };
                ctx.store.save(meta.ordinal, vote)?;
            }
            None => {
                log::info!(
                    "unknown voter state {} from {} on {}, vote left untouched",
                    self.voter_state,
                    address_id(&self.voter),
                    proposal_id
                );
            }
        }

        let Some(mut proposal) = ctx.store.load::<Proposal>(&proposal_id) else {
            log::info!("proposal {} not found, tally not updated", proposal_id);
            return Ok(());
        };
        match ctx.reader.get_vote(meta.address, &vote_id) {
            ReadCall::Success(state) => {
                state.fill_tally(&mut proposal);
                ctx.store.save(meta.ordinal, proposal)
            }
            ReadCall::Unavailable => {
                log::debug!("getVote unavailable, tally of {} not refreshed", proposal_id);
                Ok(())
            }
        }
    }
}
