use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three source fragments returned by one generation call.
///
/// Every field defaults to the empty string; a missing field is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl GeneratedArtifact {
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.style.is_empty() && self.script.is_empty()
    }

    pub fn field(&self, kind: CodeKind) -> &str {
        match kind {
            CodeKind::Markup => &self.markup,
            CodeKind::Style => &self.style,
            CodeKind::Script => &self.script,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    #[serde(alias = "html")]
    Markup,
    #[serde(alias = "css")]
    Style,
    #[serde(alias = "js")]
    Script,
}

impl CodeKind {
    pub const ALL: [CodeKind; 3] = [CodeKind::Markup, CodeKind::Style, CodeKind::Script];

    /// Short language tag used in labels and notifications.
    pub fn label(self) -> &'static str {
        match self {
            CodeKind::Markup => "HTML",
            CodeKind::Style => "CSS",
            CodeKind::Script => "JS",
        }
    }

    /// Text shown in a code panel when the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            CodeKind::Markup => "<!-- No HTML generated -->",
            CodeKind::Style => "/* No CSS generated */",
            CodeKind::Script => "// No JavaScript generated",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    User,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub origin: Origin,
    pub at: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::User,
            at: Utc::now(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::System,
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// Template family the generator is asked to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    #[default]
    General,
    Navbar,
    Hero,
    Card,
    Footer,
    Button,
    Form,
}

impl ComponentType {
    pub const ALL: [ComponentType; 7] = [
        ComponentType::General,
        ComponentType::Navbar,
        ComponentType::Hero,
        ComponentType::Card,
        ComponentType::Footer,
        ComponentType::Button,
        ComponentType::Form,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::General => "general",
            ComponentType::Navbar => "navbar",
            ComponentType::Hero => "hero",
            ComponentType::Card => "card",
            ComponentType::Footer => "footer",
            ComponentType::Button => "button",
            ComponentType::Form => "form",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
