//! Per-request inputs: the controller context and runtime asset registrations.

/// Read-only description of the controller handling the current request.
///
/// The framework supplies the ancestry explicitly: `ancestors` holds the controller paths of
/// every superclass, nearest first, stopping before the root application controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
  controller_path: String,
  ancestors: Vec<String>,
  action: String,
  layout: Option<String>,
}

impl RequestContext {
  /// Context for `controller_path` (e.g. `blog/admin/public`) handling `action`.
  pub fn new(controller_path: impl Into<String>, action: impl Into<String>) -> Self {
    Self {
      controller_path: controller_path.into().trim_matches('/').to_string(),
      ancestors: Vec::new(),
      action: action.into(),
      layout: None,
    }
  }

  /// Set the layout in effect for this request.
  pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
    self.layout = Some(layout.into());
    self
  }

  /// Set the ancestor controller paths, nearest first.
  pub fn with_ancestors<I, S>(mut self, ancestors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.ancestors = ancestors
      .into_iter()
      .map(|value| value.into().trim_matches('/').to_string())
      .filter(|value| !value.is_empty())
      .collect();
    self
  }

  /// Full controller path, e.g. `blog/admin/public`.
  pub fn controller_path(&self) -> &str {
    &self.controller_path
  }

  /// Short controller name, e.g. `public` for `blog/admin/public`.
  pub fn controller_name(&self) -> &str {
    self
      .controller_path
      .rsplit('/')
      .next()
      .unwrap_or(&self.controller_path)
  }

  /// Parent namespace of the controller with a trailing slash, or `""` at the top level.
  pub fn controller_subdir(&self) -> String {
    match self.controller_path.rsplit_once('/') {
      Some((parent, _)) => format!("{parent}/"),
      None => String::new(),
    }
  }

  /// Every prefix of the controller path: `a/b/c` yields `a`, `a/b`, `a/b/c`.
  pub fn namespace_prefixes(&self) -> Vec<String> {
    let segments: Vec<&str> = self
      .controller_path
      .split('/')
      .filter(|segment| !segment.is_empty())
      .collect();

    (1..=segments.len())
      .map(|end| segments[..end].join("/"))
      .collect()
  }

  /// Ancestor controller paths, nearest first.
  pub fn ancestors(&self) -> &[String] {
    &self.ancestors
  }

  /// Current action name.
  pub fn action(&self) -> &str {
    &self.action
  }

  /// Layout in effect, if any.
  pub fn layout(&self) -> Option<&str> {
    self.layout.as_deref()
  }
}

/// Extra assets registered by view code while a single request is being handled.
///
/// Owned by the request; drop it when the response is complete. Registration appends without
/// deduplicating, that happens during candidate assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestAssets {
  stylesheets: Vec<String>,
  javascripts: Vec<String>,
}

impl RequestAssets {
  /// Empty registration store for a fresh request.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register additional stylesheet basenames for this request.
  pub fn add_to_stylesheets<I, S>(&mut self, names: I) -> &mut Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.stylesheets.extend(names.into_iter().map(Into::into));
    self
  }

  /// Register additional script basenames for this request.
  pub fn add_to_javascripts<I, S>(&mut self, names: I) -> &mut Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.javascripts.extend(names.into_iter().map(Into::into));
    self
  }

  /// Stylesheets registered so far, in registration order.
  pub fn stylesheets(&self) -> &[String] {
    &self.stylesheets
  }

  /// Scripts registered so far, in registration order.
  pub fn javascripts(&self) -> &[String] {
    &self.javascripts
  }

  /// True when nothing has been registered.
  pub fn is_empty(&self) -> bool {
    self.stylesheets.is_empty() && self.javascripts.is_empty()
  }
}
