//! Report Builder
//!
//! Collects the views and components trees, derives routes, scans every
//! file once, and renders the UI overview:
//!
//! ```text
//! # UI Overview (auto-generated)
//! ## Routes (app/)
//! ## Shared Components (components/)
//! ## Asset & Icon Signals
//! ```

use crate::collector::{collect, SourceFile};
use crate::config::ReportConfig;
use crate::route::{derive_route, RouteEntry};
use crate::scanner::{scan, RuleSet, ScanResult, SignalSet};
use crate::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A views file with its route and scan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedScreen {
    #[serde(flatten)]
    pub entry: RouteEntry,
    pub scan: ScanResult,
}

/// Shared component files under one top-level directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentGroup {
    /// First path segment under the components root
    pub name: String,
    /// Relative paths, in collector order
    pub files: Vec<String>,
}

/// Group component files by their first path segment, in first-encounter order
pub fn group_components<P: AsRef<Path>>(files: &[PathBuf], components_root: P) -> Vec<ComponentGroup> {
    let root = components_root.as_ref();
    let mut groups: Vec<ComponentGroup> = Vec::new();

    for path in files {
        let rel = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let top = rel.split('/').next().unwrap_or_default().to_string();

        match groups.iter_mut().find(|g| g.name == top) {
            Some(group) => group.files.push(rel),
            None => groups.push(ComponentGroup {
                name: top,
                files: vec![rel],
            }),
        }
    }

    groups
}

/// Builder for a UI overview report
pub struct ReportBuilder {
    config: ReportConfig,
    rules: RuleSet,
    view_files: Vec<PathBuf>,
    component_files: Vec<PathBuf>,
    routes: Vec<RoutedScreen>,
    components: Vec<ComponentGroup>,
    signals: SignalSet,
}

impl ReportBuilder {
    /// Create a builder with the built-in rule tables
    pub fn new(config: ReportConfig) -> Result<Self> {
        let rules = RuleSet::new()?.with_max_style_samples(config.max_style_samples);
        Ok(Self::with_rules(config, rules))
    }

    /// Create a builder with an explicit rule set
    pub fn with_rules(config: ReportConfig, rules: RuleSet) -> Self {
        Self {
            config,
            rules,
            view_files: Vec::new(),
            component_files: Vec::new(),
            routes: Vec::new(),
            components: Vec::new(),
            signals: SignalSet::new(),
        }
    }

    /// Collect the views and components trees
    pub fn collect(&mut self) -> &mut Self {
        tracing::info!("Collecting source files under {:?}", self.config.root);

        self.view_files = collect(self.config.views_root());
        self.component_files = collect(self.config.components_root());

        tracing::info!(
            "Found {} view files and {} component files",
            self.view_files.len(),
            self.component_files.len()
        );

        self
    }

    /// Derive routes and scan every collected file
    pub fn scan(&mut self) -> &mut Self {
        let views_root = self.config.views_root();
        let components_root = self.config.components_root();

        self.routes.clear();
        self.signals = SignalSet::new();

        for path in &self.view_files {
            let entry = derive_route(path, &views_root);
            let scanned = match SourceFile::read(path) {
                Ok(file) => {
                    self.signals.extend(self.rules.asset_signals(&file.content));
                    scan(&file.content, &self.rules)
                }
                Err(e) => {
                    tracing::warn!("Skipping scan of {:?}: {}", path, e);
                    ScanResult::default()
                }
            };
            tracing::debug!("{} <- {}", entry.route, entry.relative_path);
            self.routes.push(RoutedScreen {
                entry,
                scan: scanned,
            });
        }

        for path in &self.component_files {
            match SourceFile::read(path) {
                Ok(file) => self.signals.extend(self.rules.asset_signals(&file.content)),
                Err(e) => tracing::warn!("Skipping scan of {:?}: {}", path, e),
            }
        }
        self.components = group_components(&self.component_files, &components_root);

        tracing::info!(
            "Scanned {} routes, {} component groups, {} asset signals",
            self.routes.len(),
            self.components.len(),
            self.signals.len()
        );

        self
    }

    /// Assemble the report
    pub fn build(&self, generated_at: DateTime<Utc>) -> Report {
        Report {
            generated_at,
            views_label: self.config.views_dir.clone(),
            components_label: self.config.components_dir.clone(),
            routes: self.routes.clone(),
            components: self.components.clone(),
            signals: self.signals.clone(),
            max_group_files: self.config.max_group_files,
        }
    }
}

/// A generated UI overview
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub views_label: String,
    pub components_label: String,
    pub routes: Vec<RoutedScreen>,
    pub components: Vec<ComponentGroup>,
    pub signals: SignalSet,
    #[serde(skip)]
    pub max_group_files: usize,
}

impl Report {
    /// Render the Markdown document
    pub fn to_markdown(&self) -> String {
        build_report(self)
    }

    /// Render the report as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a report as Markdown. Output depends only on the report's data.
pub fn build_report(report: &Report) -> String {
    let mut md = format!(
        "# UI Overview (auto-generated)\n\nGenerated: {}\n",
        report.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );

    md.push_str(&section(&format!("Routes ({}/)", report.views_label)));
    if report.routes.is_empty() {
        md.push_str(&format!("- No files found under `{}/`.\n", report.views_label));
    }
    for screen in &report.routes {
        render_route(&mut md, screen, &report.views_label);
    }

    md.push_str(&section(&format!(
        "Shared Components ({}/)",
        report.components_label
    )));
    if report.components.is_empty() {
        md.push_str(&format!(
            "- No files found under `{}/`.\n",
            report.components_label
        ));
    }
    for group in &report.components {
        render_group(&mut md, group, report.max_group_files);
    }

    md.push_str(&section("Asset & Icon Signals"));
    if report.signals.is_empty() {
        md.push_str("- No obvious asset/icon usage detected.\n");
    }
    for signal in report.signals.iter() {
        md.push_str(&format!("- {}\n", signal.label()));
    }

    md
}

fn section(title: &str) -> String {
    format!("\n## {}\n", title)
}

fn render_route(md: &mut String, screen: &RoutedScreen, views_label: &str) {
    let RoutedScreen { entry, scan } = screen;

    let mut tags: Vec<&str> = Vec::new();
    if let Some(special) = entry.special {
        tags.push(special.label());
    }
    tags.extend(scan.imports.iter().map(|s| s.tag()));

    let tag_str = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };
    let name_str = scan
        .name
        .as_ref()
        .map(|n| format!(" — **{}**", n))
        .unwrap_or_default();

    md.push_str(&format!(
        "- `{}` ← `{}/{}`{}{}\n",
        entry.route, views_label, entry.relative_path, name_str, tag_str
    ));

    let features: Vec<String> = scan
        .features()
        .iter()
        .map(|(construct, n)| format!("{}:{}", construct.label(), n))
        .collect();
    if features.is_empty() && scan.style_samples.is_empty() {
        return;
    }

    let features = if features.is_empty() {
        "—".to_string()
    } else {
        features.join(", ")
    };
    md.push_str(&format!("  - features: {}\n", features));
    if !scan.style_samples.is_empty() {
        md.push_str(&format!(
            "  - tailwind sample: `{}`\n",
            scan.style_samples.join(" | ")
        ));
    }
}

fn render_group(md: &mut String, group: &ComponentGroup, max_files: usize) {
    md.push_str(&format!(
        "- **{}/** ({} files)\n",
        group.name,
        group.files.len()
    ));
    for file in group.files.iter().take(max_files) {
        md.push_str(&format!("  - `{}`\n", file));
    }
    if group.files.len() > max_files {
        md.push_str(&format!("  - … +{} more\n", group.files.len() - max_files));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::SpecialKind;
    use crate::scanner::{AssetSignal, Construct, ImportSignal};
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    fn empty_report() -> Report {
        Report {
            generated_at: timestamp(),
            views_label: "app".to_string(),
            components_label: "components".to_string(),
            routes: Vec::new(),
            components: Vec::new(),
            signals: SignalSet::new(),
            max_group_files: 8,
        }
    }

    fn screen(rel: &str, route: &str, special: Option<SpecialKind>) -> RoutedScreen {
        RoutedScreen {
            entry: RouteEntry {
                relative_path: rel.to_string(),
                route: route.to_string(),
                special,
            },
            scan: ScanResult::default(),
        }
    }

    #[test]
    fn test_empty_report() {
        let md = empty_report().to_markdown();
        assert!(md.starts_with("# UI Overview (auto-generated)\n\nGenerated: 2024-05-01T12:30:00.000Z\n"));
        assert!(md.contains("\n## Routes (app/)\n- No files found under `app/`.\n"));
        assert!(md.contains(
            "\n## Shared Components (components/)\n- No files found under `components/`.\n"
        ));
        assert!(md.ends_with("\n## Asset & Icon Signals\n- No obvious asset/icon usage detected.\n"));
    }

    #[test]
    fn test_route_line_with_name_and_tags() {
        let mut s = screen("_layout.tsx", "/", Some(SpecialKind::Layout));
        s.scan.name = Some("RootLayout".to_string());
        s.scan.imports.insert(ImportSignal::Svg);
        s.scan.imports.insert(ImportSignal::UiKit);

        let mut report = empty_report();
        report.routes.push(s);
        let md = report.to_markdown();

        assert!(md.contains(
            "- `/` ← `app/_layout.tsx` — **RootLayout** [layout, gluestack-ui, react-native-svg]\n"
        ));
        assert!(!md.contains("features:"));
    }

    #[test]
    fn test_route_line_plain() {
        let mut report = empty_report();
        report.routes.push(screen("about.tsx", "/about", None));
        assert!(report.to_markdown().contains("- `/about` ← `app/about.tsx`\n"));
    }

    #[test]
    fn test_features_and_samples() {
        let mut s = screen("index.tsx", "/", None);
        s.scan.counts.insert(Construct::Buttons, 2);
        s.scan.counts.insert(Construct::Navigation, 1);
        s.scan.style_samples = vec!["flex-1".to_string(), "p-4".to_string()];

        let mut report = empty_report();
        report.routes.push(s);
        let md = report.to_markdown();

        assert!(md.contains("  - features: buttons:2, nav:1\n"));
        assert!(md.contains("  - tailwind sample: `flex-1 | p-4`\n"));
    }

    #[test]
    fn test_samples_without_features() {
        let mut s = screen("index.tsx", "/", None);
        s.scan.style_samples = vec!["flex-1".to_string()];

        let mut report = empty_report();
        report.routes.push(s);
        assert!(report.to_markdown().contains("  - features: —\n"));
    }

    #[test]
    fn test_group_truncation() {
        let files: Vec<PathBuf> = (0..10)
            .map(|i| PathBuf::from(format!("/p/components/ui/c{}.tsx", i)))
            .collect();
        let mut report = empty_report();
        report.components = group_components(&files, "/p/components");
        let md = report.to_markdown();

        assert!(md.contains("- **ui/** (10 files)\n"));
        assert!(md.contains("  - `ui/c7.tsx`\n"));
        assert!(!md.contains("`ui/c8.tsx`"));
        assert!(md.contains("  - … +2 more\n"));
    }

    #[test]
    fn test_group_components_first_encounter_order() {
        let files = vec![
            PathBuf::from("/p/components/Screen.tsx"),
            PathBuf::from("/p/components/forms/Input.tsx"),
            PathBuf::from("/p/components/ui/Card.tsx"),
            PathBuf::from("/p/components/forms/Select.tsx"),
        ];
        let groups = group_components(&files, "/p/components");

        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Screen.tsx", "forms", "ui"]);
        assert_eq!(groups[1].files, vec!["forms/Input.tsx", "forms/Select.tsx"]);
    }

    #[test]
    fn test_signals_rendered_in_discovery_order() {
        let mut report = empty_report();
        report.signals.insert(AssetSignal::ImageAssets);
        report.signals.insert(AssetSignal::LucideIcons);
        let md = report.to_markdown();

        assert!(md.ends_with(
            "## Asset & Icon Signals\n- assets/images/* referenced\n- lucide-react-native icons\n"
        ));
    }

    #[test]
    fn test_custom_labels() {
        let mut report = empty_report();
        report.views_label = "screens".to_string();
        let md = report.to_markdown();
        assert!(md.contains("## Routes (screens/)\n- No files found under `screens/`.\n"));
    }

    #[test]
    fn test_to_json() {
        let mut report = empty_report();
        report.routes.push(screen("(tabs)/home.tsx", "/home", None));
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["routes"][0]["route"], "/home");
        assert_eq!(json["routes"][0]["relative_path"], "(tabs)/home.tsx");
        assert!(json.get("max_group_files").is_none());
    }
}
