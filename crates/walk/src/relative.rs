use std::path::{Component, Path};

/// Renders `path` relative to `root` with a leading `/`.
///
/// The root itself maps to `/`. Current-directory components are ignored on
/// both sides, so `.` and `./web` relate the same way `/srv` and `/srv/web`
/// do. A path outside `root` is rendered from its own components.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use walk::relative_path;
///
/// assert_eq!(relative_path(Path::new("/root"), Path::new("/root/something")), "/something");
/// assert_eq!(relative_path(Path::new("/root"), Path::new("/root/")), "/");
/// assert_eq!(relative_path(Path::new("."), Path::new(".")), "/");
/// assert_eq!(relative_path(Path::new("."), Path::new("./something")), "/something");
/// ```
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> String {
    let root_parts: Vec<Component<'_>> = significant(root).collect();
    let path_parts: Vec<Component<'_>> = significant(path).collect();

    let remainder = if path_parts.starts_with(&root_parts) {
        &path_parts[root_parts.len()..]
    } else {
        &path_parts[..]
    };

    let mut rendered = String::new();
    for component in remainder {
        match component {
            Component::RootDir | Component::Prefix(_) => continue,
            other => {
                rendered.push('/');
                rendered.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }

    if rendered.is_empty() {
        rendered.push('/');
    }
    rendered
}

fn significant(path: &Path) -> impl Iterator<Item = Component<'_>> {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_child_gets_leading_slash() {
        assert_eq!(
            relative_path(Path::new("/root"), Path::new("/root/something")),
            "/something"
        );
    }

    #[test]
    fn trailing_separator_on_root_maps_to_slash() {
        assert_eq!(relative_path(Path::new("/root"), Path::new("/root/")), "/");
        assert_eq!(relative_path(Path::new("/root/"), Path::new("/root")), "/");
    }

    #[test]
    fn current_directory_root() {
        assert_eq!(relative_path(Path::new("."), Path::new(".")), "/");
        assert_eq!(
            relative_path(Path::new("."), Path::new("./something")),
            "/something"
        );
    }

    #[test]
    fn nested_paths_keep_every_segment() {
        assert_eq!(
            relative_path(Path::new("/srv"), Path::new("/srv/app/web/build")),
            "/app/web/build"
        );
        assert_eq!(
            relative_path(Path::new("."), Path::new("./a/./b")),
            "/a/b"
        );
    }

    #[test]
    fn hidden_directories_keep_their_dot() {
        assert_eq!(
            relative_path(Path::new("/srv"), Path::new("/srv/.next")),
            "/.next"
        );
        assert_eq!(relative_path(Path::new("."), Path::new("./.cache")), "/.cache");
    }

    #[test]
    fn relative_root_without_dot_prefix() {
        assert_eq!(
            relative_path(Path::new("proj"), Path::new("proj/node_modules")),
            "/node_modules"
        );
    }
}
