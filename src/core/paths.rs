use std::path::{Component, Path, PathBuf};

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "VIDEO_CREATOR_CONFIG";
/// Config file name looked up in the resource roots.
pub const CONFIG_FILE_NAME: &str = "video-creator.json";

fn resource_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            roots.push(parent.to_path_buf());
        }
    }
    let manifest_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if manifest_root.exists() {
        roots.push(manifest_root);
    }
    roots
}

/// Resolve a relative resource path against the executable directory, then
/// the crate directory. Falls back to the first root when nothing exists.
pub fn resolve_resource_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let roots = resource_roots();
    for root in &roots {
        let candidate = root.join(path);
        if candidate.exists() {
            return candidate;
        }
    }
    roots
        .first()
        .map(|root| root.join(path))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Where the runtime config is read from.
pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => resolve_resource_path(Path::new(CONFIG_FILE_NAME)),
    }
}

/// True when a request path stays inside the resource roots: relative, and
/// free of `..` and root/prefix components.
pub fn is_contained_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
