//! Concrete collaborators for the job service contract.

pub mod api;

pub use api::HttpJobSource;
