use std::path::{Component, Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    NotFound,
    Forbidden,
    BadPath,
}

/// Turn a request path under `route_prefix` into a safe relative path.
///
/// The result has only normal components: no traversal, no root, no prefix.
pub fn relative_static_path(route_prefix: &str, request_path: &str) -> Result<PathBuf, ResolveError> {
    // Sanity checks
    if !request_path.starts_with('/') || !route_prefix.starts_with('/') {
        return Err(ResolveError::BadPath);
    }

    let prefix = route_prefix.trim_end_matches('/');
    let rel = request_path
        .strip_prefix(prefix)
        .ok_or(ResolveError::NotFound)?;

    // "/staticfoo" must not match "/static"
    if !rel.is_empty() && !rel.starts_with('/') {
        return Err(ResolveError::NotFound);
    }

    // Percent-decode ONCE
    let decoded = percent_encoding::percent_decode_str(rel)
        .decode_utf8()
        .map_err(|_| ResolveError::BadPath)?;

    let decoded = decoded.trim_start_matches('/');
    if decoded.is_empty() {
        return Err(ResolveError::NotFound);
    }

    let relative_path = PathBuf::from(decoded);

    for component in relative_path.components() {
        match component {
            Component::Normal(_) => {}
            Component::CurDir => {}
            _ => {
                // ParentDir, RootDir, Prefix (Windows) are all forbidden
                return Err(ResolveError::Forbidden);
            }
        }
    }

    Ok(relative_path)
}

/// Locate `relative_path` inside `base_dir`, refusing anything that escapes it.
pub fn resolve_on_disk(base_dir: &Path, relative_path: &Path) -> Result<PathBuf, ResolveError> {
    let base_canon = base_dir
        .canonicalize()
        .map_err(|_| ResolveError::NotFound)?;

    let target_canon = base_dir
        .join(relative_path)
        .canonicalize()
        .map_err(|_| ResolveError::NotFound)?;

    // Enforce containment (symlinks may point outside)
    if !target_canon.starts_with(&base_canon) {
        return Err(ResolveError::Forbidden);
    }

    if !target_canon.is_file() {
        return Err(ResolveError::NotFound);
    }

    Ok(target_canon)
}
