//! Data structures shared by candidate assembly and rendering.

use std::fmt;

/// The two kinds of asset the helper knows how to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
  /// A `.css` file under the stylesheets directory.
  Stylesheet,
  /// A `.js` file under the javascripts directory.
  Javascript,
}

impl AssetKind {
  /// File extension without the leading dot.
  pub fn extension(self) -> &'static str {
    match self {
      Self::Stylesheet => "css",
      Self::Javascript => "js",
    }
  }

  /// Conventional directory name below the public root.
  pub fn default_dir(self) -> &'static str {
    match self {
      Self::Stylesheet => "stylesheets",
      Self::Javascript => "javascripts",
    }
  }
}

impl fmt::Display for AssetKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Stylesheet => f.write_str("stylesheet"),
      Self::Javascript => f.write_str("javascript"),
    }
  }
}

/// Stylesheet media variants, probed in declaration order.
///
/// A plain `home.css` targets `screen`; `home_all.css` and `home_print.css`
/// target `all` and `print` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
  /// No filename suffix.
  Screen,
  /// `_all` suffix.
  All,
  /// `_print` suffix.
  Print,
}

impl Media {
  /// Every variant in probing order.
  pub const ALL: [Media; 3] = [Media::Screen, Media::All, Media::Print];

  /// Value used for the `media` attribute.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Screen => "screen",
      Self::All => "all",
      Self::Print => "print",
    }
  }

  /// Suffix appended to a basename to locate this variant on disk.
  pub fn suffix(self) -> &'static str {
    match self {
      Self::Screen => "",
      Self::All => "_all",
      Self::Print => "_print",
    }
  }

  /// Append the variant suffix to a basename.
  pub fn apply(self, basename: &str) -> String {
    format!("{basename}{}", self.suffix())
  }
}

/// Extra attributes passed to [`crate::AssetResolver::render_tag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions {
  /// Media attribute for stylesheet links.
  pub media: Option<Media>,
}

impl TagOptions {
  /// Options for a stylesheet link targeting the given medium.
  pub fn media(media: Media) -> Self {
    Self { media: Some(media) }
  }
}

/// Final, deduplicated candidate basenames for one request.
///
/// Produced by [`crate::SmartAssets::gather_paths_to_try`] and only borrowed while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSets {
  /// Stylesheet basenames in emission order.
  pub stylesheets: Vec<String>,
  /// Script basenames in emission order.
  pub javascripts: Vec<String>,
}

impl CandidateSets {
  /// Candidates for the given asset kind.
  pub fn for_kind(&self, kind: AssetKind) -> &[String] {
    match kind {
      AssetKind::Stylesheet => &self.stylesheets,
      AssetKind::Javascript => &self.javascripts,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn media_variants_probe_screen_first() {
    let names: Vec<String> = Media::ALL.iter().map(|media| media.apply("home")).collect();
    assert_eq!(names, vec!["home", "home_all", "home_print"]);
  }

  #[test]
  fn asset_kinds_map_to_conventional_locations() {
    assert_eq!(AssetKind::Stylesheet.extension(), "css");
    assert_eq!(AssetKind::Javascript.default_dir(), "javascripts");
  }
}
