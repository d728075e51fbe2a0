/// Dao id stamped on entities of packages missing from the dao context.
pub const ADDRESS_ZERO: &str = "0x0000000000000000000000000000000000000000";

/// Separator between the parts of a composite entity id.
pub const ID_SEPARATOR: &str = "_";

pub const PROPOSAL_TABLE: &str = "AllowlistProposal";
pub const VOTE_TABLE: &str = "AllowlistVote";
pub const ACTION_TABLE: &str = "Action";
pub const VOTER_TABLE: &str = "AllowlistVoter";
pub const PACKAGE_TABLE: &str = "AllowlistPackage";
