//! Installs the runtime dependencies the generated components import.

use std::process::{Command, ExitStatus};

use crate::constants::{PACKAGE_MANAGER, RUNTIME_DEPENDENCIES};
use crate::error::{Error, Result};

/// Abstraction over subprocess execution so the install step can be tested
/// without spawning a real package manager.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

/// Runs the real process with inherited stdio, so the user sees the package
/// manager's own output and errors directly.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        log::debug!("Running {} {}", program, args.join(" "));
        Ok(Command::new(program).args(args).status()?)
    }
}

/// Invokes `npm install next-themes lucide-react` in the working directory.
///
/// A non-zero exit status from the subprocess terminates the run; files
/// generated beforehand are left in place.
pub fn install_dependencies(runner: &dyn CommandRunner) -> Result<()> {
    let mut args = vec!["install"];
    args.extend_from_slice(RUNTIME_DEPENDENCIES);

    let status = runner.run(PACKAGE_MANAGER, &args)?;
    if !status.success() {
        return Err(Error::InstallError { status });
    }
    Ok(())
}
