//! Route derivation from file-based routing conventions
//!
//! A views file's location and name determine its route:
//! - `(group)` directories do not contribute to the path
//! - segments starting with `_` or `+` are private or special
//! - a trailing `index` collapses into its parent route

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Role of a views file, signalled by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialKind {
    /// `_layout` wrapper
    Layout,
    /// `+not-found` handler
    NotFound,
    /// `+html` raw document wrapper
    RawDocument,
    /// `modal` entry
    Modal,
    /// Any other `+` file
    Other,
}

impl SpecialKind {
    /// Classify the last path segment (extension already stripped)
    pub fn from_basename(base: &str) -> Option<Self> {
        match base {
            "_layout" => Some(SpecialKind::Layout),
            "+not-found" => Some(SpecialKind::NotFound),
            "+html" => Some(SpecialKind::RawDocument),
            "modal" => Some(SpecialKind::Modal),
            b if b.starts_with('+') => Some(SpecialKind::Other),
            _ => None,
        }
    }

    /// Tag shown in the report
    pub fn label(&self) -> &'static str {
        match self {
            SpecialKind::Layout => "layout",
            SpecialKind::NotFound => "not-found",
            SpecialKind::RawDocument => "html",
            SpecialKind::Modal => "modal",
            SpecialKind::Other => "special",
        }
    }
}

impl std::fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Route metadata for one views file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Path relative to the views root, `/`-separated, extension kept
    pub relative_path: String,
    /// Logical route, always starting with `/`
    pub route: String,
    /// Special role, if the file name signals one
    pub special: Option<SpecialKind>,
}

/// Derive the route of `path` under `views_root`.
///
/// Never fails: a path outside the root or without an extension still
/// yields a best-effort route.
pub fn derive_route<P: AsRef<Path>, R: AsRef<Path>>(path: P, views_root: R) -> RouteEntry {
    let path = path.as_ref();
    let relative_path = path
        .strip_prefix(views_root.as_ref())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");

    let without_ext = strip_source_extension(&relative_path);
    let segments: Vec<&str> = without_ext.split('/').collect();

    let special = segments
        .last()
        .and_then(|base| SpecialKind::from_basename(base));

    let mut kept: Vec<&str> = segments
        .into_iter()
        .filter(|s| !is_group_segment(s))
        .filter(|s| !s.starts_with('_') && !s.starts_with('+'))
        .collect();
    if kept.last() == Some(&"index") {
        kept.pop();
    }

    RouteEntry {
        route: normalize_route(&kept.join("/")),
        relative_path,
        special,
    }
}

/// Strip a trailing `.js`, `.jsx`, `.ts` or `.tsx`
fn strip_source_extension(path: &str) -> &str {
    for ext in [".tsx", ".jsx", ".ts", ".js"] {
        if let Some(stripped) = path.strip_suffix(ext) {
            return stripped;
        }
    }
    path
}

/// `(name)` directories group routes without adding a path segment
fn is_group_segment(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('(') && segment.ends_with(')')
}

fn normalize_route(joined: &str) -> String {
    let mut route = String::with_capacity(joined.len() + 1);
    route.push('/');
    for c in joined.chars() {
        if c == '/' && route.ends_with('/') {
            continue;
        }
        route.push(c);
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn route_of(rel: &str) -> RouteEntry {
        let root = PathBuf::from("/project/app");
        derive_route(root.join(rel), &root)
    }

    #[test]
    fn test_index_collapses() {
        assert_eq!(route_of("profile/index.tsx").route, "/profile");
        assert_eq!(route_of("index.tsx").route, "/");
    }

    #[test]
    fn test_group_segments_dropped() {
        assert_eq!(route_of("(tabs)/home.tsx").route, "/home");
        assert_eq!(route_of("(auth)/(modals)/login.jsx").route, "/login");
        assert_eq!(route_of("(tabs)/index.tsx").route, "/");
    }

    #[test]
    fn test_layout_file() {
        let entry = route_of("_layout.tsx");
        assert_eq!(entry.route, "/");
        assert_eq!(entry.special, Some(SpecialKind::Layout));

        let nested = route_of("settings/_layout.tsx");
        assert_eq!(nested.route, "/settings");
        assert_eq!(nested.special, Some(SpecialKind::Layout));
    }

    #[test]
    fn test_special_files() {
        assert_eq!(route_of("+not-found.tsx").special, Some(SpecialKind::NotFound));
        assert_eq!(route_of("+html.tsx").special, Some(SpecialKind::RawDocument));
        assert_eq!(route_of("+api.ts").special, Some(SpecialKind::Other));
        assert_eq!(route_of("+html.tsx").route, "/");

        let modal = route_of("modal.tsx");
        assert_eq!(modal.special, Some(SpecialKind::Modal));
        assert_eq!(modal.route, "/modal");

        assert_eq!(route_of("for-parents.tsx").special, None);
    }

    #[test]
    fn test_special_kind_only_from_last_segment() {
        let entry = route_of("+private/screen.tsx");
        assert_eq!(entry.special, None);
        assert_eq!(entry.route, "/screen");
    }

    #[test]
    fn test_dynamic_segments_kept() {
        assert_eq!(route_of("users/[id].tsx").route, "/users/[id]");
        assert_eq!(route_of("[...rest].tsx").route, "/[...rest]");
    }

    #[test]
    fn test_relative_path_keeps_extension() {
        let entry = route_of("(tabs)/home.tsx");
        assert_eq!(entry.relative_path, "(tabs)/home.tsx");
    }

    #[test]
    fn test_index_only_dropped_when_last() {
        assert_eq!(route_of("index/about.tsx").route, "/index/about");
    }

    #[test]
    fn test_missing_extension_best_effort() {
        assert_eq!(route_of("about").route, "/about");
        assert_eq!(route_of("notes.md").route, "/notes.md");
    }

    #[test]
    fn test_duplicate_slashes_collapsed() {
        let entry = derive_route("/project/app//a//b.tsx", "/elsewhere");
        assert_eq!(entry.route, "/project/app/a/b");
    }

    #[test]
    fn test_path_outside_root() {
        let entry = derive_route("other/screen.tsx", "/project/app");
        assert_eq!(entry.relative_path, "other/screen.tsx");
        assert_eq!(entry.route, "/other/screen");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(route_of("(tabs)/profile/index.tsx"), route_of("(tabs)/profile/index.tsx"));
    }

    #[test]
    fn test_special_kind_labels() {
        assert_eq!(SpecialKind::Layout.to_string(), "layout");
        assert_eq!(SpecialKind::NotFound.label(), "not-found");
        assert_eq!(SpecialKind::RawDocument.label(), "html");
        assert_eq!(SpecialKind::Modal.label(), "modal");
        assert_eq!(SpecialKind::Other.label(), "special");
    }
}
