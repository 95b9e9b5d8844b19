//! Changeset API Integration Tests
//!
//! End-to-end coverage of the public surface: building changesets,
//! operation semantics, the collaborator contract, and concurrent use.

mod common;

mod basic_ops;
mod execute_contract;
