//! Capability interface for locating and rendering assets, plus a filesystem implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::config::SmartAssetsConfig;
use crate::error::{Result, SmartAssetsError};
use crate::models::{AssetKind, TagOptions};
use crate::tags::asset_tag;

/// Framework services the resolution algorithm depends on.
///
/// Names passed in are basenames without extension, relative to the asset directory of `kind`.
pub trait AssetResolver {
  /// Public URL path for a name, e.g. `/stylesheets/home.css`.
  fn public_path(&self, kind: AssetKind, name: &str) -> String {
    format!("/{}/{name}.{}", kind.default_dir(), kind.extension())
  }

  /// Whether the backing file exists. Absence is `Ok(false)`; other failures are errors.
  fn exists(&self, kind: AssetKind, name: &str) -> Result<bool>;

  /// Render the inclusion tag for a name, or an empty string when it cannot be resolved.
  fn render_tag(&self, kind: AssetKind, name: &str, options: &TagOptions) -> String {
    asset_tag(kind, &self.public_path(kind, name), options.media)
  }

  /// File names directly inside `subdir` of the asset directory for `kind`.
  ///
  /// A missing directory yields an empty list.
  fn list_assets(&self, kind: AssetKind, subdir: &str) -> Result<Vec<String>>;
}

/// [`AssetResolver`] backed by a public directory on disk.
#[derive(Debug, Clone)]
pub struct PublicDirResolver {
  public_root: PathBuf,
  stylesheets_dir: String,
  javascripts_dir: String,
  append_timestamps: bool,
}

impl PublicDirResolver {
  /// Resolver for the given public directory using the layout described by `config`.
  pub fn new(public_root: impl Into<PathBuf>, config: &SmartAssetsConfig) -> Self {
    Self {
      public_root: public_root.into(),
      stylesheets_dir: config.stylesheets_dir.clone(),
      javascripts_dir: config.javascripts_dir.clone(),
      append_timestamps: config.append_timestamps,
    }
  }

  /// Resolver for the public directory of an application root.
  pub fn for_app_root(app_root: &Path, config: &SmartAssetsConfig) -> Self {
    Self::new(config.public_root(app_root), config)
  }

  /// Public directory this resolver reads from.
  pub fn public_root(&self) -> &Path {
    &self.public_root
  }

  fn dir_for(&self, kind: AssetKind) -> &str {
    match kind {
      AssetKind::Stylesheet => &self.stylesheets_dir,
      AssetKind::Javascript => &self.javascripts_dir,
    }
  }

  /// On-disk location of a name. Any query string is ignored.
  pub fn file_path(&self, kind: AssetKind, name: &str) -> PathBuf {
    let name = strip_query(name).trim_start_matches('/');
    self
      .public_root
      .join(self.dir_for(kind))
      .join(format!("{name}.{}", kind.extension()))
  }

  fn modified_seconds(&self, kind: AssetKind, name: &str) -> Option<u64> {
    let metadata = fs::metadata(self.file_path(kind, name)).ok()?;
    let modified = metadata.modified().ok()?;
    modified
      .duration_since(UNIX_EPOCH)
      .ok()
      .map(|duration| duration.as_secs())
  }
}

impl AssetResolver for PublicDirResolver {
  fn public_path(&self, kind: AssetKind, name: &str) -> String {
    format!(
      "/{}/{}.{}",
      self.dir_for(kind).trim_matches('/'),
      strip_query(name).trim_start_matches('/'),
      kind.extension()
    )
  }

  fn exists(&self, kind: AssetKind, name: &str) -> Result<bool> {
    let path = self.file_path(kind, name);
    match fs::metadata(&path) {
      Ok(metadata) => Ok(metadata.is_file()),
      Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
        Ok(false)
      }
      Err(err) => Err(SmartAssetsError::io(path, err)),
    }
  }

  fn render_tag(&self, kind: AssetKind, name: &str, options: &TagOptions) -> String {
    let mut url = self.public_path(kind, name);
    if self.append_timestamps {
      let Some(seconds) = self.modified_seconds(kind, name) else {
        return String::new();
      };
      url = format!("{url}?{seconds}");
    }
    asset_tag(kind, &url, options.media)
  }

  fn list_assets(&self, kind: AssetKind, subdir: &str) -> Result<Vec<String>> {
    let dir = self
      .public_root
      .join(self.dir_for(kind))
      .join(subdir.trim_matches('/'));

    let entries = match fs::read_dir(&dir) {
      Ok(entries) => entries,
      Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
        return Ok(Vec::new());
      }
      Err(err) => return Err(SmartAssetsError::io(dir, err)),
    };

    let mut names = Vec::new();
    for entry in entries {
      let entry = entry.map_err(|err| SmartAssetsError::io(&dir, err))?;
      let file_type = entry
        .file_type()
        .map_err(|err| SmartAssetsError::io(entry.path(), err))?;
      if !file_type.is_file() {
        continue;
      }
      if let Some(name) = entry.file_name().to_str() {
        names.push(name.to_string());
      }
    }

    names.sort();
    Ok(names)
  }
}

fn strip_query(name: &str) -> &str {
  name.split_once('?').map_or(name, |(path, _)| path)
}
