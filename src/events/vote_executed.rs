use anyhow::Result;
use substreams::log;

use crate::{
    entities::{action_id, parse_bigint, proposal_id},
    events::{EventMeta, EventTrait, HandlerContext},
    pb::allowlist_voting::v1::{Action, Proposal, VoteExecuted},
    reader::ReadCall,
    store::EntityStoreExt,
};

impl EventTrait for VoteExecuted {
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
        let vote_id = parse_bigint(&self.vote_id)?;
        let proposal_id = proposal_id(meta.address, &self.vote_id)?;

        match ctx.store.load::<Proposal>(&proposal_id) {
            Some(mut proposal) => {
                proposal.executed = Some(true);
                ctx.store.save(meta.ordinal, proposal)?;
            }
            None => {
                log::info!("proposal {} not found, not marked executed", proposal_id);
            }
        }

        let ReadCall::Success(state) = ctx.reader.get_vote(meta.address, &vote_id) else {
            log::debug!("getVote unavailable, exec results of {} not stored", proposal_id);
            return Ok(());
        };
        // Only indices present on both sides; lengths may disagree.
        for (index, (_, result)) in state
            .actions
            .iter()
            .zip(&self.exec_results)
            .enumerate()
        {
            let id = action_id(&proposal_id, index);
            match ctx.store.load::<Action>(&id) {
                Some(mut action) => {
                    action.exec_result = Some(result.clone());
                    ctx.store.save(meta.ordinal, action)?;
                }
                None => {
                    log::debug!("action {} not found, exec result dropped", id);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        entities::proposal_id,
        pb::allowlist_voting::v1::Proposal,
        store::EntityStoreExt,
        testing::*,
    };

    #[test]
    fn test_vote_executed() {
        let mut env = TestEnv::new();
        env.reader.set_vote(&PACKAGE, 1, vote_state(2, 0, 0, 2));
        env.apply(vote_started(1, "ipfs://x")).unwrap();

        env.apply(vote_executed(1, vec![vec![0x01], vec![0x02]])).unwrap();
        env.apply(vote_executed(1, vec![vec![0x01], vec![0x02]])).unwrap();

        let id = proposal_id(&PACKAGE, "1").unwrap();
        let proposal: Proposal = env.store.load(&id).unwrap();
        assert_eq!(proposal.executed, Some(true));
        let results: Vec<_> = env
            .store
            .actions_for_proposal(&id)
            .into_iter()
            .map(|action| action.exec_result)
            .collect();
        assert_eq!(results, vec![Some(vec![0x01]), Some(vec![0x02])]);
    }

    #[test]
    fn test_vote_executed_fewer_results_than_actions() {
        let mut env = TestEnv::new();
        env.reader.set_vote(&PACKAGE, 1, vote_state(0, 0, 0, 3));
        env.apply(vote_started(1, "ipfs://x")).unwrap();

        env.apply(vote_executed(1, vec![vec![0xaa]])).unwrap();

        let id = proposal_id(&PACKAGE, "1").unwrap();
        let results: Vec<_> = env
            .store
            .actions_for_proposal(&id)
            .into_iter()
            .map(|action| action.exec_result)
            .collect();
        assert_eq!(results, vec![Some(vec![0xaa]), None, None]);
    }

    #[test]
    fn test_vote_executed_more_results_than_actions() {
        let mut env = TestEnv::new();
        env.reader.set_vote(&PACKAGE, 1, vote_state(0, 0, 0, 1));
        env.apply(vote_started(1, "ipfs://x")).unwrap();
        // the contract now reports more actions than were materialized at start
        env.reader.set_vote(&PACKAGE, 1, vote_state(0, 0, 0, 3));

        env.apply(vote_executed(1, vec![vec![0x01], vec![0x02], vec![0x03]])).unwrap();

        let id = proposal_id(&PACKAGE, "1").unwrap();
        let actions = env.store.actions_for_proposal(&id);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].exec_result, Some(vec![0x01]));
    }

    #[test]
    fn test_vote_executed_unknown_proposal() {
        let mut env = TestEnv::new();
        env.reader.set_vote(&PACKAGE, 5, vote_state(0, 0, 0, 1));
        let before = env.store.len();

        env.apply(vote_executed(5, vec![vec![0x01]])).unwrap();

        assert_eq!(env.store.len(), before);
    }

    #[test]
    fn test_vote_executed_call_unavailable() {
        let mut env = TestEnv::new();
        env.reader.set_vote(&PACKAGE, 1, vote_state(0, 0, 0, 1));
        env.apply(vote_started(1, "ipfs://x")).unwrap();
        env.reader.fail_vote(&PACKAGE, 1);

        env.apply(vote_executed(1, vec![vec![0x01]])).unwrap();

        let id = proposal_id(&PACKAGE, "1").unwrap();
        let proposal: Proposal = env.store.load(&id).unwrap();
        assert_eq!(proposal.executed, Some(true));
        assert_eq!(env.store.actions_for_proposal(&id)[0].exec_result, None);
    }
}
