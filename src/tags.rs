//! HTML inclusion tags for stylesheets and scripts.

use crate::models::{AssetKind, Media};

/// Render a `<link>` tag for a stylesheet URL.
pub fn stylesheet_link_tag(href: &str, media: Media) -> String {
  format!(
    r#"<link href="{href}" media="{media}" rel="stylesheet" type="text/css" />"#,
    href = escape_attribute(href),
    media = media.as_str(),
  )
}

/// Render a `<script>` tag for a script URL.
pub fn javascript_include_tag(src: &str) -> String {
  format!(
    r#"<script src="{src}" type="text/javascript"></script>"#,
    src = escape_attribute(src),
  )
}

/// Render the tag appropriate for `kind`. Stylesheets default to `screen` media.
pub fn asset_tag(kind: AssetKind, url: &str, media: Option<Media>) -> String {
  match kind {
    AssetKind::Stylesheet => stylesheet_link_tag(url, media.unwrap_or(Media::Screen)),
    AssetKind::Javascript => javascript_include_tag(url),
  }
}

fn escape_attribute(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for ch in value.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      _ => escaped.push(ch),
    }
  }
  escaped
}
