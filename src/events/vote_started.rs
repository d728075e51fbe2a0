use anyhow::Result;
use substreams::log;

use crate::{
    entities::{action_id, parse_bigint, proposal_id},
    events::{EventMeta, EventTrait, HandlerContext},
    pb::allowlist_voting::v1::{Action, Package, Proposal, VoteStarted},
    reader::ReadCall,
    store::EntityStoreExt,
};

impl EventTrait for VoteStarted {
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
        let vote_id = parse_bigint(&self.vote_id)?;
        let dao = ctx.dao_of(meta.address);
        let mut proposal = Proposal {
            id: proposal_id(meta.address, &self.vote_id)?,
            dao: dao.clone(),
            pkg: meta.package_id(),
            vote_id: self.vote_id.clone(),
            creator: self.creator.clone(),
            metadata: self.metadata.clone(),
            created_at: meta.block_timestamp,
            ..Default::default()
        };

        match ctx.reader.get_vote(meta.address, &vote_id) {
            ReadCall::Success(state) => {
                state.fill_proposal(&mut proposal);
                for (index, action) in state.actions.iter().enumerate() {
                    let action = Action {
                        id: action_id(&proposal.id, index),
                        dao: dao.clone(),
                        proposal: proposal.id.clone(),
                        to: action.to.clone(),
                        value: action.value.to_string(),
                        data: action.data.clone(),
                        exec_result: None,
                    };
                    ctx.store.save(meta.ordinal, action)?;
                }
            }
            ReadCall::Unavailable => {
                log::debug!("getVote unavailable, {} stored without vote state", proposal.id);
            }
        }
        ctx.store.save(meta.ordinal, proposal)?;

        refresh_votes_length(meta, ctx)
    }
}

fn refresh_votes_length(meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
    let package_id = meta.package_id();
    let Some(mut package) = ctx.store.load::<Package>(&package_id) else {
        log::info!("package {} not registered, votesLength not cached", package_id);
        return Ok(());
    };
    match ctx.reader.votes_length(meta.address) {
        ReadCall::Success(length) => {
            package.votes_length = Some(length.to_string());
            ctx.store.save(meta.ordinal, package)
        }
        ReadCall::Unavailable => {
            log::debug!("votesLength unavailable for {}", package_id);
            Ok(())
        }
    }
}
