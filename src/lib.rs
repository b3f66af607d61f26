#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod models;
pub mod names;
pub mod render;

pub use builder::{BuildSummary, StoreAssetBuilder};
pub use config::{BuilderConfig, NameFallback};
pub use names::NameTable;
