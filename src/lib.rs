#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod exclusions;
pub mod helper;
pub mod models;
pub mod request;
pub mod resolver;
pub mod shared;
pub mod tags;

pub use config::SmartAssetsConfig;
pub use error::{Result, SmartAssetsError};
pub use exclusions::Exclusions;
pub use helper::SmartAssets;
pub use models::{AssetKind, CandidateSets, Media, TagOptions};
pub use request::{RequestAssets, RequestContext};
pub use resolver::{AssetResolver, PublicDirResolver};
