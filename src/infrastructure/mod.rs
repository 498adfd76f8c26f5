//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so paths
//! from the user's configuration need translating before use.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
