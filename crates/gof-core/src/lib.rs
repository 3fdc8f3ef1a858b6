//! Core types shared by the goodness-of-fit crates
//!
//! Every crate in the workspace reports failures through the single
//! [`Error`] enum defined here, so callers can match on one type regardless
//! of whether a failure came from bin merging, distribution construction or
//! the chi-square evaluation itself.

pub mod error;

pub use error::{Error, Result};
