//! Application configuration describing where public assets live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SmartAssetsError};
use crate::models::AssetKind;

/// File name searched for in the application root by [`SmartAssetsConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "smart_assets.config.json";

/// Discoverable configuration describing the public asset layout and naming conventions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmartAssetsConfig {
  /// Directory, relative to the application root, that is served publicly.
  pub public_dir: String,
  /// Stylesheet directory below the public root.
  pub stylesheets_dir: String,
  /// Script directory below the public root.
  pub javascripts_dir: String,
  /// Basename included for every request.
  pub root_basename: String,
  /// Framework scripts emitted unconditionally between stylesheets and scripts.
  ///
  /// A conventional script with the same name is not emitted again.
  pub default_javascripts: Vec<String>,
  /// Exclusion entries merged into every call.
  pub always_exclude: Vec<String>,
  /// Append `?<mtime>` to rendered URLs.
  pub append_timestamps: bool,
}

impl Default for SmartAssetsConfig {
  fn default() -> Self {
    Self {
      public_dir: "public".into(),
      stylesheets_dir: AssetKind::Stylesheet.default_dir().into(),
      javascripts_dir: AssetKind::Javascript.default_dir().into(),
      root_basename: "application".into(),
      default_javascripts: Vec::new(),
      always_exclude: Vec::new(),
      append_timestamps: false,
    }
  }
}

impl SmartAssetsConfig {
  /// Attempt to load configuration from the application root.
  ///
  /// A missing or malformed file falls back to the defaults; malformed files are logged.
  pub fn discover(app_root: &Path) -> Self {
    let candidate = app_root.join(DEFAULT_CONFIG_FILE);
    match Self::load_from_path(&candidate) {
      Ok(config) => config,
      Err(err) => {
        tracing::warn!("{err}; using default smart asset configuration");
        Self::default()
      }
    }
  }

  /// Read configuration from a specific JSON file. A missing file yields the defaults.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
        return Ok(Self::default());
      }
      Err(err) => return Err(SmartAssetsError::io(path, err)),
    };

    serde_json::from_str(&contents).map_err(|source| SmartAssetsError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Absolute location of the public directory for the given application root.
  pub fn public_root(&self, app_root: &Path) -> PathBuf {
    app_root.join(&self.public_dir)
  }

  /// Directory name below the public root holding assets of `kind`.
  pub fn dir_for(&self, kind: AssetKind) -> &str {
    match kind {
      AssetKind::Stylesheet => &self.stylesheets_dir,
      AssetKind::Javascript => &self.javascripts_dir,
    }
  }
}
