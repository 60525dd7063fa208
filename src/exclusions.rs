//! Caller-supplied exclusion lists split by the asset kind they apply to.

use std::collections::BTreeSet;

use crate::asset_paths::{normalise_basename, split_asset_extension};
use crate::models::AssetKind;

/// Exclusion entries partitioned into global and kind-specific buckets.
///
/// `application` excludes the basename from both kinds, `foo/bar.css` only from stylesheets and
/// `foo/bar.js` only from scripts. Recognised extensions are stripped so entries compare
/// directly against basenames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
  global: BTreeSet<String>,
  stylesheets: BTreeSet<String>,
  javascripts: BTreeSet<String>,
}

impl Exclusions {
  /// Partition raw entries. Blank entries are ignored; unrecognised extensions are global.
  pub fn partition<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut exclusions = Self::default();
    exclusions.extend(entries);
    exclusions
  }

  /// Add further entries to the existing buckets.
  pub fn extend<I, S>(&mut self, entries: I)
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    for entry in entries {
      let value = normalise_basename(entry.as_ref());
      if value.is_empty() {
        continue;
      }

      let (stem, kind) = split_asset_extension(value);
      let bucket = match kind {
        None => &mut self.global,
        Some(AssetKind::Stylesheet) => &mut self.stylesheets,
        Some(AssetKind::Javascript) => &mut self.javascripts,
      };
      bucket.insert(stem.to_string());
    }
  }

  /// True when `basename` must not be included as an asset of `kind`.
  pub fn excludes(&self, kind: AssetKind, basename: &str) -> bool {
    let key = normalise_basename(basename);
    let specific = match kind {
      AssetKind::Stylesheet => &self.stylesheets,
      AssetKind::Javascript => &self.javascripts,
    };
    self.global.contains(key) || specific.contains(key)
  }

  /// Returns true when no exclusion rules are active.
  pub fn is_empty(&self) -> bool {
    self.global.is_empty() && self.stylesheets.is_empty() && self.javascripts.is_empty()
  }
}
