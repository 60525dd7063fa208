/// Normalise a basename for comparison: trimmed, without a leading slash.
pub fn normalise_basename(value: &str) -> &str {
    value.trim().trim_start_matches('/')
}

/// Resolve a candidate name to the path that should be probed on disk.
///
/// A bareword (no `/`) that does not exist at the root of the asset directory is treated as
/// belonging to the current controller, so registering `bar` from `shop/items` resolves to
/// `shop/items/bar`. Names containing a slash are kept as-is apart from a leading `/`, which
/// marks an explicitly root-scoped name.
pub fn scope_to_controller<E>(
    name: &str,
    controller_path: &str,
    exists_at_root: impl FnOnce(&str) -> Result<bool, E>,
) -> Result<String, E> {
    if name.contains('/') || exists_at_root(name)? {
        return Ok(normalise_basename(name).to_string());
    }

    let controller_path = controller_path.trim_matches('/');
    if controller_path.is_empty() {
        return Ok(name.to_string());
    }

    Ok(format!("{controller_path}/{name}"))
}
