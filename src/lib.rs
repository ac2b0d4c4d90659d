//! # Labgrid (Student Lab Registration & Authentication)
//!
//! `labgrid` registers students for lab access, hands out sequential lab
//! identifiers, and authenticates students with password login and short-lived
//! bearer tokens.
//!
//! ## Lab Identifiers
//!
//! Every registered student receives a `LAB-NN` identifier (zero-padded to at
//! least two digits). Allocation is a single-row atomic upsert-increment in
//! PostgreSQL, so identifiers stay unique and strictly increasing even with
//! several service instances running against the same database. A caller that
//! fails after allocation leaves a gap in the sequence; gaps are expected and
//! identifiers are never reused.
//!
//! ## Authentication
//!
//! Passwords are stored as salted argon2id hashes. Login issues an HS256 JWT
//! whose subject is the lab identifier; `GET /me` resolves a bearer token back
//! to the student's public profile. Unknown identifiers and wrong passwords
//! produce identical responses to prevent account enumeration.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
