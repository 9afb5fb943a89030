//! screenmap - UI overview for file-routed projects
//!
//! Walks the views tree and the shared components tree of a project,
//! derives each screen's route from its location, and scans file text
//! for UI-library signals to produce a Markdown report.

pub mod collector;
pub mod config;
pub mod error;
pub mod report;
pub mod route;
pub mod scanner;

pub use collector::{collect, SourceFile};
pub use config::ReportConfig;
pub use error::{Result, ScreenmapError};
pub use report::{build_report, group_components, ComponentGroup, Report, ReportBuilder, RoutedScreen};
pub use route::{derive_route, RouteEntry, SpecialKind};
pub use scanner::{scan, AssetSignal, Construct, ImportSignal, RuleSet, ScanResult, SignalSet};

/// screenmap version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source extensions picked up by the collector
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Check if a file extension is a recognized source module
pub fn is_source_file(ext: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&ext)
}
