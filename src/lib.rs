//! ca - Career Advisor
//!
//! Assesses a user's skills through a threshold-gated decision tree, maps the
//! result to a career recommendation, then enriches it with ranked learning
//! resources and static market statistics.
//!
//! The core of the crate is the course discovery pipeline in [`search`]:
//! query derivation, provider fetching with politeness delays, regex parsing
//! with relevance filters, fallback injection, multi-factor ranking, and a
//! staleness-evicting result cache.

pub mod app;
pub mod assessment;
pub mod cli;
pub mod config;
pub mod error;
pub mod market;
pub mod search;

pub use error::{CaError, Result};
