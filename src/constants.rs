//! Constants used throughout the themeshot application

/// Default directory for generated components, relative to the working directory.
pub const DEFAULT_DESTINATION: &str = "src/components";

/// Package manager invoked for the dependency install step.
pub const PACKAGE_MANAGER: &str = "npm";

/// Runtime dependencies the generated components import.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["next-themes", "lucide-react"];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
