//! E2E test suite entry point.

#[path = "../common/mod.rs"]
mod common;
mod config_workflow;
mod data_workflow;
