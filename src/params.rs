use anyhow::{anyhow, Result};
use serde::{
    de::{self, Deserializer},
    Deserialize,
};

use crate::{entities::address_id, pb::allowlist_voting::v1::Package};

pub type Address = Vec<u8>;

/// Side-channel lookup of the dao owning a voting package.
pub trait DaoContext {
    fn dao_for(&self, package: &[u8]) -> Option<String>;
}

pub fn decode_addr(s: &str) -> Result<Address> {
    let trimmed = s.trim();
    let hex_str = trimmed
        .strip_prefix("0x")
        .unwrap_or(trimmed);
    if hex_str.len() != 40 {
        return Err(anyhow!(
            "address must be 20 bytes (40 hex chars), got len={}",
            hex_str.len()
        ));
    }
    hex::decode(hex_str).map_err(|e| anyhow!("invalid address hex {:?}: {}", s, e))
}

fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    decode_addr(&s).map_err(|e| de::Error::custom(e.to_string()))
}

/// A voting package registered for a dao, with the governance settings it was deployed with.
#[derive(Debug, Deserialize, PartialEq)]
pub struct PackageParams {
    #[serde(deserialize_with = "deserialize_address")]
    pub address: Address,
    #[serde(deserialize_with = "deserialize_address")]
    pub dao: Address,
    #[serde(default)]
    pub participation_required_pct: Option<u64>,
    #[serde(default)]
    pub support_required_pct: Option<u64>,
    #[serde(default)]
    pub min_duration: Option<u64>,
}

impl PackageParams {
    pub fn to_package(&self) -> Package {
        Package {
            id: address_id(&self.address),
            dao: address_id(&self.dao),
            participation_required_pct: self.participation_required_pct,
            support_required_pct: self.support_required_pct,
            min_duration: self.min_duration,
            ..Default::default()
        }
    }
}

/// Module params, e.g.
/// `{"packages":[{"address":"0x..","dao":"0x..","min_duration":3600}]}`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct IndexerParams {
    #[serde(default)]
    pub packages: Vec<PackageParams>,
}

impl IndexerParams {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(input).map_err(|e| anyhow!("Failed to parse params: {}", e))
    }

    pub fn is_tracked(&self, address: &[u8]) -> bool {
        self.packages
            .iter()
            .any(|package| package.address == address)
    }

    /// The package entities produced by the registration flow.
    pub fn registered_packages(&self) -> Vec<Package> {
        self.packages
            .iter()
            .map(PackageParams::to_package)
            .collect()
    }
}

impl DaoContext for IndexerParams {
    fn dao_for(&self, package: &[u8]) -> Option<String> {
        self.packages
            .iter()
            .find(|params| params.address == package)
            .map(|params| address_id(&params.dao))
    }
}
