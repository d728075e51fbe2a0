use anyhow::Result;
use substreams::log;

use crate::{
    events::{EventMeta, EventTrait, HandlerContext},
    pb::allowlist_voting::v1::{Package, TrustedForwarderSet},
    store::EntityStoreExt,
};

impl EventTrait for TrustedForwarderSet {
    fn apply(&self, meta: &EventMeta, ctx: &mut HandlerContext) -> Result<()> {
        let package_id = meta.package_id();
        let Some(mut package) = ctx.store.load::<Package>(&package_id) else {
            log::info!("package {} not registered, forwarder not set", package_id);
            return Ok(());
        };
        package.trusted_forwarder = Some(self.forwarder.clone());
        ctx.store.save(meta.ordinal, package)
    }
}
