use anyhow::Result;
use substreams::log;

use crate::{
    events::{EventMeta, EventTrait, HandlerContext},
    pb::allowlist_voting::v1::{ConfigUpdated, Package},
    store::EntityStoreExt,
};

impl EventTrait for ConfigUpdated {
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
        let package_id = meta.package_id();
        let Some(mut package) = ctx.store.load::<Package>(&package_id) else {
            log::info!("package {} not registered, config update skipped", package_id);
            return Ok(());
        };
        package.participation_required_pct = Some(self.participation_required_pct);
        package.support_required_pct = Some(self.support_required_pct);
        package.min_duration = Some(self.min_duration);
        ctx.store.save(meta.ordinal, package)
    }
}
