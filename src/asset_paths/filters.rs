use regex::Regex;

use crate::models::AssetKind;

fn asset_extension_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^(.+)\.(css|js)$").expect("invalid asset extension regex"))
}

/// Split a recognised asset extension from a path.
///
/// Only the final extension is inspected, case-insensitively. `jquery.min.js` becomes
/// `("jquery.min", Some(Javascript))`; anything without `.css` or `.js` is returned untouched.
pub fn split_asset_extension(value: &str) -> (&str, Option<AssetKind>) {
    let Some(captures) = asset_extension_pattern().captures(value) else {
        return (value, None);
    };

    let (Some(stem), Some(extension)) = (captures.get(1), captures.get(2)) else {
        return (value, None);
    };

    let kind = if extension.as_str().eq_ignore_ascii_case("css") {
        AssetKind::Stylesheet
    } else {
        AssetKind::Javascript
    };

    (stem.as_str(), Some(kind))
}
