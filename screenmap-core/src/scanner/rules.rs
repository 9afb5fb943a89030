use crate::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Style literals kept per file unless configured otherwise
pub const DEFAULT_MAX_STYLE_SAMPLES: usize = 6;

/// Import-origin signals, in report checklist order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportSignal {
    /// `@gluestack-ui/*` UI kit
    UiKit,
    /// nativewind, or any `className` usage
    StyleEngine,
    /// lucide-react-native icons
    LucideIcons,
    /// @expo/vector-icons
    VectorIcons,
    /// expo-image
    ExpoImage,
    /// expo-web-browser
    WebBrowser,
    /// react-native-svg
    Svg,
}

impl ImportSignal {
    pub const ALL: [ImportSignal; 7] = [
        ImportSignal::UiKit,
        ImportSignal::StyleEngine,
        ImportSignal::LucideIcons,
        ImportSignal::VectorIcons,
        ImportSignal::ExpoImage,
        ImportSignal::WebBrowser,
        ImportSignal::Svg,
    ];

    /// Tag shown next to a route
    pub fn tag(&self) -> &'static str {
        match self {
            ImportSignal::UiKit => "gluestack-ui",
            ImportSignal::StyleEngine => "tailwind",
            ImportSignal::LucideIcons => "lucide-icons",
            ImportSignal::VectorIcons => "expo-vector-icons",
            ImportSignal::ExpoImage => "expo-image",
            ImportSignal::WebBrowser => "expo-web-browser",
            ImportSignal::Svg => "react-native-svg",
        }
    }
}

/// Structural UI element categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Construct {
    Buttons,
    Cards,
    Lists,
    Images,
    FormControls,
    Modals,
    Navigation,
}

impl Construct {
    pub const ALL: [Construct; 7] = [
        Construct::Buttons,
        Construct::Cards,
        Construct::Lists,
        Construct::Images,
        Construct::FormControls,
        Construct::Modals,
        Construct::Navigation,
    ];

    /// Label used in the features line
    pub fn label(&self) -> &'static str {
        match self {
            Construct::Buttons => "buttons",
            Construct::Cards => "cards",
            Construct::Lists => "lists",
            Construct::Images => "images",
            Construct::FormControls => "form-controls",
            Construct::Modals => "modals",
            Construct::Navigation => "nav",
        }
    }
}

/// Project-wide asset and icon usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetSignal {
    LucideIcons,
    VectorIcons,
    ExpoImage,
    ImageAssets,
    IconAssets,
}

impl AssetSignal {
    /// Bullet text in the signals section
    pub fn label(&self) -> &'static str {
        match self {
            AssetSignal::LucideIcons => "lucide-react-native icons",
            AssetSignal::VectorIcons => "@expo/vector-icons",
            AssetSignal::ExpoImage => "expo-image",
            AssetSignal::ImageAssets => "assets/images/* referenced",
            AssetSignal::IconAssets => "assets/Icons/* referenced",
        }
    }
}

impl std::fmt::Display for AssetSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const STYLE_ATTRIBUTE: &str = r#"className\s*=\s*["'`]"#;
const STYLE_LITERAL: &str = r#"className\s*=\s*["'`]([^"'`]+)["'`]"#;

const IMPORT_RULES: &[(ImportSignal, &[&str])] = &[
    (ImportSignal::UiKit, &[r#"from\s+['"]@gluestack-ui/"#]),
    (ImportSignal::StyleEngine, &[r#"from\s+['"]nativewind"#, r"className="]),
    (ImportSignal::LucideIcons, &[r#"from\s+['"]lucide-react-native['"]"#]),
    (ImportSignal::VectorIcons, &[r#"from\s+['"]@expo/vector-icons['"]"#]),
    (ImportSignal::ExpoImage, &[r#"from\s+['"]expo-image['"]"#]),
    (ImportSignal::WebBrowser, &[r#"from\s+['"]expo-web-browser['"]"#]),
    (ImportSignal::Svg, &[r#"from\s+['"]react-native-svg['"]"#]),
];

const CONSTRUCT_RULES: &[(Construct, &[&str])] = &[
    (Construct::Buttons, &[r"<Button[\s/>]"]),
    (Construct::Cards, &[r"<Card[\s/>]"]),
    (Construct::Lists, &[r"<FlatList[\s/>]", r"<SectionList[\s/>]"]),
    (Construct::Images, &[r"<Image[\s/>]"]),
    (
        Construct::FormControls,
        &[
            r"<Input[\s/>]",
            r"<Select[\s/>]",
            r"<Textarea[\s/>]",
            r"<Checkbox[\s/>]",
            r"<Radio[\s/>]",
        ],
    ),
    (Construct::Modals, &[r"<Modal[\s/>]", r"<AlertDialog[\s/>]"]),
    (Construct::Navigation, &[r"<Link[\s/>]", r"useRouter\(", r"router\."]),
];

// Priority order: the first rule that matches anywhere wins.
const NAME_RULES: &[&str] = &[
    r"export\s+default\s+function\s+([A-Za-z0-9_]+)",
    r"function\s+([A-Za-z0-9_]+)\s*\(",
    r"const\s+([A-Za-z0-9_]+)\s*=\s*\(",
];

const ASSET_RULES: &[(AssetSignal, &[&str])] = &[
    (AssetSignal::LucideIcons, &[r#"from\s+['"]lucide-react-native['"]"#]),
    (AssetSignal::VectorIcons, &[r#"from\s+['"]@expo/vector-icons['"]"#]),
    (AssetSignal::ExpoImage, &[r#"from\s+['"]expo-image['"]"#]),
    (AssetSignal::ImageAssets, &[r"assets/images/"]),
    (AssetSignal::IconAssets, &[r"assets/Icons/"]),
];

/// One named rule: any of its patterns may match
#[derive(Debug, Clone)]
pub struct Rule<K> {
    pub kind: K,
    patterns: Vec<Regex>,
}

impl<K: Copy> Rule<K> {
    fn compile(kind: K, patterns: &[&str]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { kind, patterns })
    }

    /// True if any pattern matches
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    /// Occurrences summed across patterns
    pub fn count(&self, text: &str) -> usize {
        self.patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }
}

/// Compiled matching tables, built once and shared by every scan
#[derive(Debug, Clone)]
pub struct RuleSet {
    style_attribute: Regex,
    style_literal: Regex,
    imports: Vec<Rule<ImportSignal>>,
    constructs: Vec<Rule<Construct>>,
    names: Vec<Regex>,
    assets: Vec<Rule<AssetSignal>>,
    max_style_samples: usize,
}

impl RuleSet {
    /// Compile the built-in tables
    pub fn new() -> Result<Self> {
        let rules = Self {
            style_attribute: Regex::new(STYLE_ATTRIBUTE)?,
            style_literal: Regex::new(STYLE_LITERAL)?,
            imports: IMPORT_RULES
                .iter()
                .map(|(kind, patterns)| Rule::compile(*kind, patterns))
                .collect::<Result<_>>()?,
            constructs: CONSTRUCT_RULES
                .iter()
                .map(|(kind, patterns)| Rule::compile(*kind, patterns))
                .collect::<Result<_>>()?,
            names: NAME_RULES
                .iter()
                .map(|p| Regex::new(p))
                .collect::<std::result::Result<_, _>>()?,
            assets: ASSET_RULES
                .iter()
                .map(|(kind, patterns)| Rule::compile(*kind, patterns))
                .collect::<Result<_>>()?,
            max_style_samples: DEFAULT_MAX_STYLE_SAMPLES,
        };

        tracing::debug!(
            "Compiled {} import, {} construct and {} asset rules",
            rules.imports.len(),
            rules.constructs.len(),
            rules.assets.len()
        );

        Ok(rules)
    }

    /// Set how many style literals a scan keeps
    pub fn with_max_style_samples(mut self, max: usize) -> Self {
        self.max_style_samples = max;
        self
    }

    pub fn max_style_samples(&self) -> usize {
        self.max_style_samples
    }

    pub fn import_rules(&self) -> &[Rule<ImportSignal>] {
        &self.imports
    }

    pub fn construct_rules(&self) -> &[Rule<Construct>] {
        &self.constructs
    }

    /// True if the text assigns a style attribute with any quote style
    pub fn uses_style_classes(&self, text: &str) -> bool {
        self.style_attribute.is_match(text)
    }

    /// First `max_style_samples` non-empty style literals, trimmed, in text order
    pub fn style_samples(&self, text: &str) -> Vec<String> {
        self.style_literal
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .take(self.max_style_samples)
            .collect()
    }

    /// Best-guess declared component name
    pub fn infer_name(&self, text: &str) -> Option<String> {
        self.names.iter().find_map(|re| {
            re.captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        })
    }

    /// Asset signals present in the text, in table order
    pub fn asset_signals(&self, text: &str) -> Vec<AssetSignal> {
        self.assets
            .iter()
            .filter(|rule| rule.is_match(text))
            .map(|rule| rule.kind)
            .collect()
    }
}
