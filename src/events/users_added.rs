use anyhow::Result;

use crate::{
    entities::address_id,
    events::{EventMeta, EventTrait, HandlerContext},
    pb::allowlist_voting::v1::{UsersAdded, Voter},
    store::EntityStoreExt,
};

impl EventTrait for UsersAdded {
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
        let package_id = meta.package_id();
        for user in &self.users {
            let id = address_id(user);
            // first package to add a user keeps it
            if ctx.store.load::<Voter>(&id).is_none() {
                ctx.store
                    .save(meta.ordinal, Voter { id, pkg: package_id.clone() })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{pb::allowlist_voting::v1::Voter, store::EntityStoreExt, testing::*};

    #[test]
    fn test_users_added() {
        let mut env = TestEnv::new();

        env.apply(users_added(&[[0x01; 20], [0x02; 20]])).unwrap();

        let voters = env.store.voters_for_package(&hex_id(&PACKAGE));
        assert_eq!(voters.len(), 2);
        assert_eq!(voters[0].id, hex_id(&[0x01; 20]));
    }

    #[test]
    fn test_users_added_first_writer_wins() {
        let mut env = TestEnv::new();
        env.apply(users_added(&[[0x01; 20]])).unwrap();

        env.apply_at(&OTHER_PACKAGE, users_added(&[[0x01; 20], [0x03; 20]]))
            .unwrap();

        let voter: Voter = env.store.load(&hex_id(&[0x01; 20])).unwrap();
        assert_eq!(voter.pkg, hex_id(&PACKAGE));
        let voter: Voter = env.store.load(&hex_id(&[0x03; 20])).unwrap();
        assert_eq!(voter.pkg, hex_id(&OTHER_PACKAGE));
    }
}
