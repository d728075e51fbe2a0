// @generated
pub mod allowlist_voting {
    // @@protoc_insertion_point(attribute:allowlist_voting.v1)
    pub mod v1 {
        include!("allowlist_voting.v1.rs");
        // @@protoc_insertion_point(allowlist_voting.v1)
    }
}
