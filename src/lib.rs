//! Workspace-level integration tests for the fibbuddy workspace.
//!
//! See `tests/` for the scenario tests; the member crates live under
//! `crates/`.
