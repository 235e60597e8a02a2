//! Code snippet model.
//!
//! A snippet is the only mutable resource in the service. Payload data enters
//! through [`SnippetDraft`] (full representation) or [`SnippetPatch`] (partial
//! representation); both validate before any record is touched. The owner is
//! never part of either — it is assigned from the authenticated principal when
//! the record is created and preserved on every later mutation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Maximum allowed length for a snippet title, in characters.
pub const TITLE_MAX: usize = 100;

/// Validation errors for snippet payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnippetValidationError {
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("code must not be empty")]
    EmptyCode,
    #[error("unknown language: {value}")]
    UnknownLanguage { value: String },
    #[error("unknown style: {value}")]
    UnknownStyle { value: String },
}

/// Stable snippet identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnippetId(Uuid);

/// Error returned when a snippet id fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("snippet id must be a valid UUID")]
pub struct InvalidSnippetId;

impl SnippetId {
    /// Validate and construct a [`SnippetId`] from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, InvalidSnippetId> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(InvalidSnippetId);
        }
        Uuid::parse_str(raw).map(Self).map_err(|_| InvalidSnippetId)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SnippetId> for String {
    fn from(value: SnippetId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for SnippetId {
    type Error = InvalidSnippetId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Languages a snippet can be highlighted as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Rust,
    C,
    Cpp,
    Go,
    Java,
    JavaScript,
    TypeScript,
    Ruby,
    Html,
    Css,
    Sql,
    Bash,
    Text,
}

impl Language {
    /// Canonical lower-case name used on the wire and in rendered CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Rust => "rust",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Go => "go",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Ruby => "ruby",
            Self::Html => "html",
            Self::Css => "css",
            Self::Sql => "sql",
            Self::Bash => "bash",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SnippetValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Self::Python),
            "rust" => Ok(Self::Rust),
            "c" => Ok(Self::C),
            "cpp" => Ok(Self::Cpp),
            "go" => Ok(Self::Go),
            "java" => Ok(Self::Java),
            "javascript" => Ok(Self::JavaScript),
            "typescript" => Ok(Self::TypeScript),
            "ruby" => Ok(Self::Ruby),
            "html" => Ok(Self::Html),
            "css" => Ok(Self::Css),
            "sql" => Ok(Self::Sql),
            "bash" => Ok(Self::Bash),
            "text" => Ok(Self::Text),
            other => Err(SnippetValidationError::UnknownLanguage {
                value: other.to_owned(),
            }),
        }
    }
}

/// Colour schemes for the rendered highlight view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Default,
    #[default]
    Friendly,
    Colorful,
    Monokai,
    Emacs,
    Vs,
    Xcode,
}

impl Style {
    /// Canonical lower-case name used on the wire and in rendered CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Friendly => "friendly",
            Self::Colorful => "colorful",
            Self::Monokai => "monokai",
            Self::Emacs => "emacs",
            Self::Vs => "vs",
            Self::Xcode => "xcode",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = SnippetValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "friendly" => Ok(Self::Friendly),
            "colorful" => Ok(Self::Colorful),
            "monokai" => Ok(Self::Monokai),
            "emacs" => Ok(Self::Emacs),
            "vs" => Ok(Self::Vs),
            "xcode" => Ok(Self::Xcode),
            other => Err(SnippetValidationError::UnknownStyle {
                value: other.to_owned(),
            }),
        }
    }
}

/// Validated full snippet payload used by create and replace operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetDraft {
    title: String,
    code: String,
    linenos: bool,
    language: Language,
    style: Style,
}

impl SnippetDraft {
    /// Validate and construct a draft.
    ///
    /// The title may be empty (it defaults to an empty string on the wire)
    /// but the code body must contain at least one non-whitespace character.
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        linenos: bool,
        language: Language,
        style: Style,
    ) -> Result<Self, SnippetValidationError> {
        let title = title.into();
        if title.chars().count() > TITLE_MAX {
            return Err(SnippetValidationError::TitleTooLong { max: TITLE_MAX });
        }
        let code = code.into();
        if code.trim().is_empty() {
            return Err(SnippetValidationError::EmptyCode);
        }
        Ok(Self {
            title,
            code,
            linenos,
            language,
            style,
        })
    }
}

/// Validated partial snippet payload used by PATCH.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetPatch {
    title: Option<String>,
    code: Option<String>,
    linenos: Option<bool>,
    language: Option<Language>,
    style: Option<Style>,
}

impl SnippetPatch {
    /// Validate and construct a patch.
    pub fn new(
        title: Option<String>,
        code: Option<String>,
        linenos: Option<bool>,
        language: Option<Language>,
        style: Option<Style>,
    ) -> Result<Self, SnippetValidationError> {
        if let Some(title) = &title
            && title.chars().count() > TITLE_MAX
        {
            return Err(SnippetValidationError::TitleTooLong { max: TITLE_MAX });
        }
        if let Some(code) = &code
            && code.trim().is_empty()
        {
            return Err(SnippetValidationError::EmptyCode);
        }
        Ok(Self {
            title,
            code,
            linenos,
            language,
            style,
        })
    }
}

/// Stored code snippet.
///
/// ## Invariants
/// - `owner` is assigned exactly once, at creation, from the authenticated
///   principal; no mutation path accepts an owner from payload data.
/// - `created` is assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    id: SnippetId,
    title: String,
    code: String,
    linenos: bool,
    language: Language,
    style: Style,
    owner: UserId,
    created: DateTime<Utc>,
}

impl Snippet {
    /// Build a new record from a validated draft, assigning the owner from
    /// the execution context rather than the payload.
    #[must_use]
    pub fn create(id: SnippetId, draft: SnippetDraft, owner: UserId, created: DateTime<Utc>) -> Self {
        let SnippetDraft {
            title,
            code,
            linenos,
            language,
            style,
        } = draft;
        Self {
            id,
            title,
            code,
            linenos,
            language,
            style,
            owner,
            created,
        }
    }

    /// Replace every payload field from a full draft.
    ///
    /// Identity fields (`id`, `owner`, `created`) are preserved.
    pub fn replace(&mut self, draft: SnippetDraft) {
        let SnippetDraft {
            title,
            code,
            linenos,
            language,
            style,
        } = draft;
        self.title = title;
        self.code = code;
        self.linenos = linenos;
        self.language = language;
        self.style = style;
    }

    /// Merge the present fields of a patch, leaving the rest untouched.
    ///
    /// Identity fields (`id`, `owner`, `created`) are preserved.
    pub fn merge(&mut self, patch: SnippetPatch) {
        let SnippetPatch {
            title,
            code,
            linenos,
            language,
            style,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(code) = code {
            self.code = code;
        }
        if let Some(linenos) = linenos {
            self.linenos = linenos;
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(style) = style {
            self.style = style;
        }
    }

    /// Stable snippet identifier.
    #[must_use]
    pub fn id(&self) -> &SnippetId {
        &self.id
    }

    /// Display title; may be empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Code body.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether the rendered view shows line numbers.
    #[must_use]
    pub fn linenos(&self) -> bool {
        self.linenos
    }

    /// Highlighting language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Rendering colour scheme.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Owning user, assigned at creation.
    #[must_use]
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Creation timestamp; list ordering key.
    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}
