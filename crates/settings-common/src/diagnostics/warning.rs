use std::fmt;
use std::path::Path;

/// Marker kinds for warnings raised around configuration handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningCategory {
    /// General user-facing warning.
    User,
    /// Something in the configuration file is not correct.
    Config,
}

impl WarningCategory {
    pub fn name(&self) -> &'static str {
        match self {
            WarningCategory::User => "UserWarning",
            WarningCategory::Config => "ConfigWarning",
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A captured warning: its kind, its message and the call site that emitted it.
///
/// Warnings are produced transiently while a call runs and are not persisted
/// beyond it. Use [`crate::emit_warning!`] to build one with the call site
/// filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub category: WarningCategory,
    pub message: String,
    pub file: &'static str,
    pub line: u32,
}

impl Warning {
    pub fn new(category: WarningCategory, message: impl Into<String>, file: &'static str, line: u32) -> Self {
        Self {
            category,
            message: message.into(),
            file,
            line,
        }
    }

    /// Same category and call site, different message.
    pub(crate) fn with_message(self, message: String) -> Self {
        Self { message, ..self }
    }

    /// Single-line rendering used when the warning is logged,
    /// e.g. `UserWarning: "level not found" in parser.rs, line: 12.`
    pub fn log_line(&self) -> String {
        let file = Path::new(self.file)
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.file.into());

        format!("{}: \"{}\" in {}, line: {}.", self.category, self.message, file, self.line)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.log_line())
    }
}
