use console::style;
use std::path::PathBuf;

use crate::{
    cli::Args,
    error::Result,
    generator::generate,
    install::{install_dependencies, ProcessRunner},
    prompt::collect_config,
};

/// Main CLI runner that orchestrates the scaffolding workflow.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete workflow: collect the configuration, generate
    /// the component files, install runtime dependencies.
    pub fn run(self) -> Result<()> {
        println!("\n{}\n", style("✨ themeshot").blue().bold());
        println!(
            "{}\n",
            style("Setting up next-themes in your Next.js project...").dim()
        );

        let config = collect_config(&self.args)?;

        println!("\n{}\n", style("Generating files...").dim());
        let created = generate(&config)?;
        self.report_created(&created);

        if self.args.skip_install {
            log::info!("Skipping dependency installation (--skip-install)");
        } else {
            println!("{}\n", style("Installing dependencies...").dim());
            install_dependencies(&ProcessRunner)?;
        }

        self.print_next_steps();
        Ok(())
    }

    fn report_created(&self, created: &[PathBuf]) {
        for path in created {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!("✓ {}", style(name).cyan());
        }
        if let Some(first) = created.first() {
            if let Some(dir) = first.parent() {
                println!("\n{} {}\n", style("Files created in:").dim(), style(dir.display()).cyan());
            }
        }
    }

    fn print_next_steps(&self) {
        println!("{}\n", style("✅ Success! Theme files created.").green().bold());
        println!("{}\n", style("📝 Next steps:").yellow());
        println!("1. Wrap your app with ThemeProvider in {}.", style("layout.tsx").cyan());
        println!("2. Use ThemeToggle wherever you need theme switching\n");
        println!("{}\n", style("Happy Theming! 🚀").blue().bold());
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
