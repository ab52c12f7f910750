//! Core types - pure abstractions shared across the codebase.

mod asset;
mod failure;

pub use asset::{AssetRef, Resolution};
pub use failure::CheckFailure;
