//! toucan - job application tracker
//!
//! This library provides the board state engine behind the toucan CLI.
//!
//! # Core Concepts
//!
//! - **Records**: job applications as served by the job service
//! - **Columns**: applied / interview / offer lanes derived from free-text status
//! - **Board**: the authoritative collection plus view and sort flags
//! - **Job source**: the remote fetch/delete contract the board depends on
//!
//! # Module Organization
//!
//! - `board`: Board state, moves, removals, load tracking
//! - `classify`: Status to column classification
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.toucan.toml`
//! - `error`: Error types and result aliases
//! - `integrations`: HTTP job source over reqwest
//! - `normalize`: Company name normalization and logo keys
//! - `output`: Human and JSON output envelopes
//! - `record`: Job record type and collection decoding
//! - `render`: Plain-text table and lane rendering
//! - `sort`: Date ordering
//! - `sync`: Job source contract and network errors

pub mod board;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod integrations;
pub mod normalize;
pub mod output;
pub mod record;
pub mod render;
pub mod sort;
pub mod sync;

pub use board::{Board, Columns, LoadState, ViewMode};
pub use classify::{classify, Column};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use record::{JobRecord, RecordId};
pub use sort::{sort_by_date, SortDirection};
pub use sync::{JobSource, NetworkError};
