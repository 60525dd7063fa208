//! Shared assets named after several controllers, e.g. `order--checkout.css`.

use crate::error::Result;
use crate::models::AssetKind;
use crate::request::RequestContext;
use crate::resolver::AssetResolver;

/// Separator between controller names in a shared asset file name.
pub const SHARED_ASSET_DELIMITER: &str = "--";

/// Collect shared asset basenames that mention the current controller.
///
/// The search is limited to the controller's namespace directory: `admin/order--checkout.css`
/// is picked up for `admin/order` and `admin/checkout`, but not for a top-level `order`.
/// Returned basenames carry the namespace prefix. A missing directory yields nothing.
pub fn shared_basenames<R: AssetResolver + ?Sized>(
    resolver: &R,
    kind: AssetKind,
    context: &RequestContext,
) -> Result<Vec<String>> {
    let subdir = context.controller_subdir();
    let controller_name = context.controller_name();
    let extension = format!(".{}", kind.extension());

    let basenames: Vec<String> = resolver
        .list_assets(kind, &subdir)?
        .into_iter()
        .filter_map(|file_name| {
            let stem = file_name.strip_suffix(&extension)?;
            names_controller(stem, controller_name).then(|| format!("{subdir}{stem}"))
        })
        .collect();

    if !basenames.is_empty() {
        tracing::trace!(
            kind = %kind,
            controller = context.controller_path(),
            count = basenames.len(),
            "matched shared assets"
        );
    }

    Ok(basenames)
}

/// True when `stem` is a `--` delimited list of controller names that includes `controller`.
pub fn names_controller(stem: &str, controller: &str) -> bool {
    stem.contains(SHARED_ASSET_DELIMITER)
        && stem
            .split(SHARED_ASSET_DELIMITER)
            .any(|token| token == controller)
}
