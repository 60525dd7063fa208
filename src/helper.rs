//! View helper that assembles conventional asset candidates and renders their tags.

use crate::asset_paths::{
  CandidateList, generate_basenames, normalise_basename, scope_to_controller,
};
use crate::config::SmartAssetsConfig;
use crate::error::Result;
use crate::exclusions::Exclusions;
use crate::models::{AssetKind, CandidateSets, Media, TagOptions};
use crate::request::{RequestAssets, RequestContext};
use crate::resolver::AssetResolver;
use crate::shared::shared_basenames;

/// Convention-based asset inclusion for a single application.
///
/// The helper holds no per-request state; pass the [`RequestContext`] and the request's
/// [`RequestAssets`] to each call.
pub struct SmartAssets<'a, R: AssetResolver + ?Sized> {
  resolver: &'a R,
  config: &'a SmartAssetsConfig,
}

impl<'a, R: AssetResolver + ?Sized> SmartAssets<'a, R> {
  /// Create a helper using `resolver` for filesystem and tag services.
  pub fn new(resolver: &'a R, config: &'a SmartAssetsConfig) -> Self {
    Self { resolver, config }
  }

  /// Render every conventional, shared and registered asset that exists for this request.
  ///
  /// `except` entries remove basenames from both kinds, or from one kind when they carry a
  /// `.css` or `.js` extension. Stylesheets are emitted first, then the configured framework
  /// scripts, then the remaining scripts, one tag per line.
  pub fn smart_asset_includes<I, S>(
    &self,
    context: &RequestContext,
    extras: &RequestAssets,
    except: I,
  ) -> Result<String>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut exclusions = self.configured_exclusions();
    exclusions.extend(except);

    let candidates = self.gather_paths_to_try(context, extras, &exclusions)?;

    let framework = self.framework_scripts(&exclusions);
    let javascripts: Vec<String> = candidates
      .javascripts
      .iter()
      .filter(|name| {
        !framework
          .iter()
          .any(|script| normalise_basename(script) == normalise_basename(name))
      })
      .cloned()
      .collect();

    let mut out = String::new();
    self.render_kind(AssetKind::Stylesheet, context, &candidates.stylesheets, &mut out)?;
    self.render_framework_scripts(&framework, &mut out);
    self.render_kind(AssetKind::Javascript, context, &javascripts, &mut out)?;
    Ok(out)
  }

  /// Render only the assets registered on `extras` during this request.
  pub fn extra_asset_includes(
    &self,
    context: &RequestContext,
    extras: &RequestAssets,
  ) -> Result<String> {
    let exclusions = self.configured_exclusions();
    let candidates = CandidateSets {
      stylesheets: assemble(AssetKind::Stylesheet, [extras.stylesheets()], &exclusions),
      javascripts: assemble(AssetKind::Javascript, [extras.javascripts()], &exclusions),
    };
    self.render(context, &candidates)
  }

  /// Conventional basenames for the request, before extras and exclusions.
  pub fn default_basenames(&self, context: &RequestContext) -> Vec<String> {
    generate_basenames(context, &self.config.root_basename)
  }

  /// Combine conventional, registered and shared basenames into the final candidate sets.
  pub fn gather_paths_to_try(
    &self,
    context: &RequestContext,
    extras: &RequestAssets,
    exclusions: &Exclusions,
  ) -> Result<CandidateSets> {
    let defaults = self.default_basenames(context);
    let shared_stylesheets = shared_basenames(self.resolver, AssetKind::Stylesheet, context)?;
    let shared_javascripts = shared_basenames(self.resolver, AssetKind::Javascript, context)?;

    Ok(CandidateSets {
      stylesheets: assemble(
        AssetKind::Stylesheet,
        [defaults.as_slice(), extras.stylesheets(), shared_stylesheets.as_slice()],
        exclusions,
      ),
      javascripts: assemble(
        AssetKind::Javascript,
        [defaults.as_slice(), extras.javascripts(), shared_javascripts.as_slice()],
        exclusions,
      ),
    })
  }

  /// Render tags for already assembled candidates, stylesheets first.
  pub fn render(&self, context: &RequestContext, candidates: &CandidateSets) -> Result<String> {
    let mut out = String::new();
    for kind in [AssetKind::Stylesheet, AssetKind::Javascript] {
      self.render_kind(kind, context, candidates.for_kind(kind), &mut out)?;
    }
    Ok(out)
  }

  fn configured_exclusions(&self) -> Exclusions {
    Exclusions::partition(&self.config.always_exclude)
  }

  fn render_kind(
    &self,
    kind: AssetKind,
    context: &RequestContext,
    basenames: &[String],
    out: &mut String,
  ) -> Result<()> {
    for basename in basenames {
      match kind {
        AssetKind::Stylesheet => {
          for media in Media::ALL {
            self.render_if_exists(kind, context, &media.apply(basename), Some(media), out)?;
          }
        }
        AssetKind::Javascript => {
          self.render_if_exists(kind, context, basename, None, out)?;
        }
      }
    }
    Ok(())
  }

  fn render_if_exists(
    &self,
    kind: AssetKind,
    context: &RequestContext,
    name: &str,
    media: Option<Media>,
    out: &mut String,
  ) -> Result<()> {
    let path = scope_to_controller(name, context.controller_path(), |candidate| {
      self.resolver.exists(kind, candidate)
    })?;

    tracing::trace!(kind = %kind, path = %path, "probing asset");
    if !self.resolver.exists(kind, &path)? {
      tracing::debug!(kind = %kind, path = %path, "skipping missing asset");
      return Ok(());
    }

    let tag = self.resolver.render_tag(kind, &path, &TagOptions { media });
    if !tag.is_empty() {
      out.push_str(&tag);
      out.push('\n');
    }
    Ok(())
  }

  /// Configured framework scripts that survive the exclusions, without repeats.
  fn framework_scripts(&self, exclusions: &Exclusions) -> Vec<String> {
    assemble(
      AssetKind::Javascript,
      [self.config.default_javascripts.as_slice()],
      exclusions,
    )
  }

  fn render_framework_scripts(&self, names: &[String], out: &mut String) {
    for name in names {
      let tag = self
        .resolver
        .render_tag(AssetKind::Javascript, name, &TagOptions::default());
      if !tag.is_empty() {
        out.push_str(&tag);
        out.push('\n');
      }
    }
  }
}

fn assemble<const N: usize>(
  kind: AssetKind,
  sources: [&[String]; N],
  exclusions: &Exclusions,
) -> Vec<String> {
  let mut list = CandidateList::new();
  list.extend(
    sources
      .into_iter()
      .flatten()
      .map(|name| name.trim())
      .filter(|name| !exclusions.excludes(kind, name)),
  );
  list.finish()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::resolver::memory::MemoryResolver;

  fn link(name: &str, media: &str) -> String {
    format!(
      r#"<link href="/stylesheets/{name}.css" media="{media}" rel="stylesheet" type="text/css" />"#
    )
  }

  fn script(name: &str) -> String {
    format!(r#"<script src="/javascripts/{name}.js" type="text/javascript"></script>"#)
  }

  fn no_exceptions() -> [&'static str; 0] {
    []
  }

  #[test]
  fn renders_existing_conventional_assets_in_order() {
    let resolver = MemoryResolver::default()
      .with_stylesheets(&["application", "blog", "blog/admin/public/index_print"])
      .with_javascripts(&["application", "blog/admin/public"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("blog/admin/public", "index");

    let markup = helper
      .smart_asset_includes(&context, &RequestAssets::new(), no_exceptions())
      .unwrap();

    let expected = [
      link("application", "screen"),
      link("blog", "screen"),
      link("blog/admin/public/index_print", "print"),
      script("application"),
      script("blog/admin/public"),
    ]
    .map(|line| line + "\n")
    .concat();
    assert_eq!(markup, expected);
  }

  #[test]
  fn probes_every_media_variant() {
    let resolver = MemoryResolver::default().with_stylesheets(&["home", "home_all", "home_print"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("home", "index");

    let candidates = CandidateSets {
      stylesheets: vec!["home".into()],
      javascripts: Vec::new(),
    };
    let markup = helper.render(&context, &candidates).unwrap();

    assert_eq!(
      markup,
      format!(
        "{}\n{}\n{}\n",
        link("home", "screen"),
        link("home_all", "all"),
        link("home_print", "print")
      )
    );
  }

  #[test]
  fn excludes_global_and_kind_specific_entries() {
    let resolver = MemoryResolver::default();
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("foo/bar", "show");

    let exclusions = Exclusions::partition(["application", "foo/bar.css"]);
    let candidates = helper
      .gather_paths_to_try(&context, &RequestAssets::new(), &exclusions)
      .unwrap();

    assert_eq!(candidates.stylesheets, vec!["foo", "foo/bar/show"]);
    assert_eq!(candidates.javascripts, vec!["foo", "foo/bar", "foo/bar/show"]);
  }

  #[test]
  fn except_application_keeps_other_conventional_entries() {
    let resolver = MemoryResolver::default()
      .with_stylesheets(&["application", "shop"])
      .with_javascripts(&["application", "shop/items"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("shop/items", "index");

    let markup = helper
      .smart_asset_includes(&context, &RequestAssets::new(), ["application"])
      .unwrap();

    assert!(!markup.contains("application"));
    assert!(markup.contains(&link("shop", "screen")));
    assert!(markup.contains(&script("shop/items")));
  }

  #[test]
  fn registered_extras_are_deduplicated_and_scoped() {
    let resolver = MemoryResolver::default()
      .with_stylesheets(&["shop/items/bar"])
      .with_javascripts(&["shop/items/bar", "shop/items"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("shop/items", "index");

    let mut extras = RequestAssets::new();
    extras.add_to_stylesheets(["bar", "bar"]);
    extras.add_to_javascripts(["bar", "shop/items"]);

    let candidates = helper
      .gather_paths_to_try(&context, &extras, &Exclusions::default())
      .unwrap();
    assert_eq!(candidates.stylesheets.iter().filter(|name| *name == "bar").count(), 1);
    assert_eq!(
      candidates.javascripts.iter().filter(|name| *name == "shop/items").count(),
      1
    );

    let markup = helper.smart_asset_includes(&context, &extras, no_exceptions()).unwrap();
    assert_eq!(markup.matches(&link("shop/items/bar", "screen")).count(), 1);
    assert_eq!(markup.matches(&script("shop/items/bar")).count(), 1);
    assert_eq!(markup.matches(&script("shop/items")).count(), 1);
  }

  #[test]
  fn extra_asset_includes_renders_only_registered_assets() {
    let resolver = MemoryResolver::default()
      .with_stylesheets(&["application", "print_only"])
      .with_javascripts(&["application", "shop/items/widgets"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("shop/items", "index");

    let mut extras = RequestAssets::new();
    extras.add_to_stylesheets(["print_only"]);
    extras.add_to_javascripts(["widgets"]);

    let markup = helper.extra_asset_includes(&context, &extras).unwrap();
    assert_eq!(
      markup,
      format!("{}\n{}\n", link("print_only", "screen"), script("shop/items/widgets"))
    );
  }

  #[test]
  fn includes_shared_assets_for_matching_controller() {
    let resolver = MemoryResolver::default().with_stylesheets(&["order--checkout"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);

    for action in ["index", "show", "edit"] {
      let context = RequestContext::new("order", action);
      let markup = helper
        .smart_asset_includes(&context, &RequestAssets::new(), no_exceptions())
        .unwrap();
      assert_eq!(markup, format!("{}\n", link("order--checkout", "screen")));
    }
  }

  #[test]
  fn framework_scripts_sit_between_stylesheets_and_scripts() {
    let resolver = MemoryResolver::default()
      .with_stylesheets(&["application"])
      .with_javascripts(&["application"]);
    let config = SmartAssetsConfig {
      default_javascripts: vec!["prototype".into(), "effects".into()],
      ..SmartAssetsConfig::default()
    };
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("home", "index");

    let markup = helper
      .smart_asset_includes(&context, &RequestAssets::new(), ["effects.js"])
      .unwrap();
    assert_eq!(
      markup,
      format!(
        "{}\n{}\n{}\n",
        link("application", "screen"),
        script("prototype"),
        script("application")
      )
    );
  }

  #[test]
  fn leading_slash_entries_do_not_repeat_conventional_ones() {
    let resolver = MemoryResolver::default().with_stylesheets(&["shop/items", "application"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("shop/items", "index");

    let mut extras = RequestAssets::new();
    extras.add_to_stylesheets(["/shop/items", "/application"]);

    let markup = helper
      .smart_asset_includes(&context, &extras, no_exceptions())
      .unwrap();
    assert_eq!(markup.matches(&link("application", "screen")).count(), 1);
    assert_eq!(markup.matches(&link("shop/items", "screen")).count(), 1);

    let candidates = helper
      .gather_paths_to_try(&context, &extras, &Exclusions::default())
      .unwrap();
    assert_eq!(candidates.stylesheets, vec![
      "application",
      "shop",
      "shop/items",
      "shop/items/index"
    ]);
  }

  #[test]
  fn framework_scripts_are_not_repeated_by_conventional_scripts() {
    let resolver = MemoryResolver::default().with_javascripts(&["application", "home"]);
    let config = SmartAssetsConfig {
      default_javascripts: vec!["application".into(), "prototype".into(), "/prototype".into()],
      ..SmartAssetsConfig::default()
    };
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("home", "index");

    let markup = helper
      .smart_asset_includes(&context, &RequestAssets::new(), no_exceptions())
      .unwrap();
    assert_eq!(
      markup,
      format!(
        "{}\n{}\n{}\n",
        script("application"),
        script("prototype"),
        script("home")
      )
    );
  }

  #[test]
  fn configured_exclusions_apply_to_every_call() {
    let resolver = MemoryResolver::default().with_stylesheets(&["application", "home"]);
    let config = SmartAssetsConfig {
      always_exclude: vec!["application.css".into()],
      ..SmartAssetsConfig::default()
    };
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("home", "index");

    let markup = helper
      .smart_asset_includes(&context, &RequestAssets::new(), no_exceptions())
      .unwrap();
    assert_eq!(markup, format!("{}\n", link("home", "screen")));
  }

  #[test]
  fn rendering_is_idempotent() {
    let resolver = MemoryResolver::default()
      .with_stylesheets(&["application", "layouts_main", "admin/users"])
      .with_javascripts(&["admin/users/edit"]);
    let config = SmartAssetsConfig::default();
    let helper = SmartAssets::new(&resolver, &config);
    let context = RequestContext::new("admin/users", "edit").with_layout("layouts_main");
    let extras = RequestAssets::new();

    let first = helper.smart_asset_includes(&context, &extras, ["x.js"]).unwrap();
    let second = helper.smart_asset_includes(&context, &extras, ["x.js"]).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
  }
}
