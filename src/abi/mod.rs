#![allow(clippy::all)]
pub mod allowlist_voting;
