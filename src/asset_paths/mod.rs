//! Helpers for deriving and normalising asset basenames.
//!
//! Generation of conventional basenames, extension sniffing for exclusion entries, and
//! controller scoping of barewords live in separate submodules so each rule can be tested on
//! its own.

mod candidates;
mod filters;
mod scoping;

pub use candidates::{CandidateList, generate_basenames};
pub use filters::split_asset_extension;
pub use scoping::{normalise_basename, scope_to_controller};
