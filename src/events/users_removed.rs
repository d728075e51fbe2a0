use anyhow::Result;

use crate::{
    entities::address_id,
    events::{EventMeta, EventTrait, HandlerContext},
    pb::allowlist_voting::v1::{UsersRemoved, Voter},
    store::EntityStoreExt,
};

impl EventTrait for UsersRemoved {
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
        for user in &self.users {
            ctx.store
                .remove::<Voter>(meta.ordinal, &address_id(user))?;
        }
        Ok(())
    }
}
