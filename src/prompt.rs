//! Interactive collection of the generation configuration.
//!
//! Every answer can be pre-supplied through a CLI flag; whatever the flags
//! leave open is asked interactively with `dialoguer`.

use std::path::PathBuf;

use console::Style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};

use crate::cli::Args;
use crate::config::{Component, GenerationConfig};
use crate::constants::DEFAULT_DESTINATION;
use crate::error::Result;

/// Custom dialoguer theme for consistent styling across prompts.
fn theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: Style::new().cyan().bold(),
        active_item_style: Style::new().green(),
        ..ColorfulTheme::default()
    }
}

/// Builds the `GenerationConfig` from flags and, where flags are absent,
/// interactive prompts. With `--yes` every unanswered prompt takes its
/// default instead.
pub fn collect_config(args: &Args) -> Result<GenerationConfig> {
    let destination = match &args.dir {
        Some(dir) => dir.clone(),
        None if args.yes => PathBuf::from(DEFAULT_DESTINATION),
        None => PathBuf::from(prompt_destination()?),
    };

    let typescript = if args.javascript {
        false
    } else if args.yes {
        true
    } else {
        prompt_typescript()?
    };

    let components = if !args.components.is_empty() {
        dedup_components(&args.components)
    } else if args.yes {
        Component::ALL.to_vec()
    } else {
        prompt_components()?
    };

    Ok(GenerationConfig { destination, typescript, components })
}

fn prompt_destination() -> Result<String> {
    Ok(Input::with_theme(&theme())
        .with_prompt("Where should the components be created?")
        .default(DEFAULT_DESTINATION.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Path cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?)
}

fn prompt_typescript() -> Result<bool> {
    Ok(Confirm::with_theme(&theme())
        .with_prompt("Use TypeScript?")
        .default(true)
        .interact()?)
}

fn prompt_components() -> Result<Vec<Component>> {
    let labels: Vec<String> = Component::ALL.iter().map(Component::to_string).collect();
    let defaults = vec![true; Component::ALL.len()];

    loop {
        let indices = MultiSelect::with_theme(&theme())
            .with_prompt("Which components would you like to create?")
            .items(&labels)
            .defaults(&defaults)
            .interact()?;

        if indices.is_empty() {
            eprintln!("Please select at least one component");
            continue;
        }

        return Ok(indices.into_iter().map(|i| Component::ALL[i]).collect());
    }
}

/// Drops repeated flag values while preserving first-seen order.
fn dedup_components(components: &[Component]) -> Vec<Component> {
    let mut seen = Vec::with_capacity(components.len());
    for component in components {
        if !seen.contains(component) {
            seen.push(*component);
        }
    }
    seen
}
