use crate::error::{Error, Result};
use clap::ValueEnum;
use std::fmt::Display;
use std::path::PathBuf;

/// The closed set of components themeshot knows how to generate.
///
/// Extending the set means adding a template, not implementing a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum Component {
    ThemeProvider,
    ThemeToggle,
}

impl Component {
    /// Every component, in the order offered by the selection prompt.
    pub const ALL: [Component; 2] = [Component::ThemeProvider, Component::ThemeToggle];

    /// Target file name for this component, e.g. `ThemeProvider.tsx`.
    pub fn file_name(&self, typescript: bool) -> String {
        format!("{}.{}", self, extension(typescript))
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Component::ThemeProvider => "ThemeProvider",
            Component::ThemeToggle => "ThemeToggle",
        };
        write!(f, "{s}")
    }
}

/// File extension for generated components. `tsx` iff TypeScript output
/// was requested, uniformly for every component.
pub fn extension(typescript: bool) -> &'static str {
    if typescript {
        "tsx"
    } else {
        "jsx"
    }
}

/// Everything the generator needs, collected once per invocation.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Destination directory, relative paths resolve against the working
    /// directory.
    pub destination: PathBuf,
    /// Emit TypeScript (`.tsx`) instead of JavaScript (`.jsx`).
    pub typescript: bool,
    /// Components to generate, in prompt/flag order.
    pub components: Vec<Component>,
}

impl GenerationConfig {
    /// Rejects unusable input before any filesystem mutation happens.
    pub fn validate(&self) -> Result<()> {
        let destination = self.destination.to_string_lossy();
        if destination.trim().is_empty() {
            return Err(Error::ValidationError(
                "destination path cannot be empty".to_string(),
            ));
        }
        if self.components.is_empty() {
            return Err(Error::ValidationError(
                "select at least one component".to_string(),
            ));
        }
        Ok(())
    }
}
