use thiserror::Error;

use super::geometry::Size;

// === ShellError ===

/// Errors raised by shell-level operations.
///
/// None of these are fatal. The tool errors are shown to the user and always
/// followed by a fallback dashboard tab; `InvalidGeometryRequest` is recovered
/// by clamping inside the geometry engine and never leaves it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// No content provider is registered under the tool id.
    #[error("The tool '{0}' could not be found.")]
    ToolNotFound(String),
    /// The tool exists but its page cannot load a file on open.
    #[error("The tool '{0}' cannot open files directly.")]
    ToolIncompatible(String),
    /// The tool accepted the file but failed to read or parse it.
    #[error("Failed to load '{file}' in {tool}.\n\nError: {message}")]
    FileLoadError {
        tool: String,
        file: String,
        message: String,
    },
    /// A resize candidate fell below the window's minimum size.
    #[error("Requested size {}x{} is below the minimum {}x{}", requested.width, requested.height, minimum.width, minimum.height)]
    InvalidGeometryRequest { requested: Size, minimum: Size },
}

/// How loudly a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Critical,
}

impl ShellError {
    /// Title of the blocking notification shown for this error.
    pub fn notification_title(&self) -> &'static str {
        match self {
            ShellError::ToolNotFound(_) => "Tool Not Found",
            ShellError::ToolIncompatible(_) => "Tool Incompatible",
            ShellError::FileLoadError { .. } => "File Load Error",
            ShellError::InvalidGeometryRequest { .. } => "Invalid Geometry",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ShellError::ToolIncompatible(_) | ShellError::InvalidGeometryRequest { .. } => {
                Severity::Warning
            }
            ShellError::ToolNotFound(_) | ShellError::FileLoadError { .. } => Severity::Critical,
        }
    }
}

// === TabError ===

/// Errors related to tab lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
    /// The provided tab index is out of bounds.
    #[error("Invalid tab index: {0}")]
    InvalidIndex(usize),
}

// === WindowError ===

/// Errors reported by a window primitive.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    /// The native window no longer exists.
    #[error("Window has been destroyed")]
    Destroyed,
    /// The platform cannot answer the request.
    #[error("Window operation not supported: {0}")]
    Unsupported(String),
}

// === LoadError ===

/// Errors a content page reports while loading a file on open.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The file was read but has no content.
    #[error("File is empty: {0}")]
    Empty(String),
}

// === RegistryError ===

/// Errors related to the content provider registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A tool with the same id is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),
}

// === ConfigError ===

/// Errors related to loading the shell configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("Config I/O error: {0}")]
    Io(String),
    /// The config file is not valid JSON for `ShellConfig`.
    #[error("Config serialization error: {0}")]
    Serialization(String),
}
