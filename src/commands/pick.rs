//! Pick command - choose a template and install it as `.gitignore`

use super::load_templates;
use crate::PickError;
use crate::cli::PickArgs;
use crate::config::AppConfig;
use crate::install::{install_template, print_template};
use crate::ui::{OutputWriter, Picker};
use std::io::Write;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, PickError>;

/// How a pick session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The template was copied to `destination`
    Installed { source: PathBuf, destination: PathBuf },
    /// The template was written to the output stream
    Printed { source: PathBuf },
    /// The user left the finder without choosing
    Cancelled,
}

/// Execute the pick command
///
/// # Errors
///
/// Returns `PickError` if the repository, discovery, picker or install step
/// fails. Cancelling the picker is not an error.
pub fn execute(
    config: &AppConfig,
    args: &PickArgs,
    picker: &dyn Picker,
    output: &dyn OutputWriter,
    out: &mut dyn Write,
) -> Result<PickOutcome> {
    let (templates, _) = load_templates(config, args.force, args.update, output)?;

    let Some(choice) = picker.pick(&templates.names())? else {
        output.info("No template selected.");
        return Ok(PickOutcome::Cancelled);
    };

    let source = templates
        .resolve(&choice)
        .ok_or_else(|| PickError::InvalidInput(format!("'{choice}' is not a known template")))?;
    output.info(&format!("Selected item: {}", source.display()));

    if args.print {
        print_template(&source, out)?;
        return Ok(PickOutcome::Printed { source });
    }

    let dest_dir = match &args.dest {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let destination = install_template(&source, &dest_dir)?;
    output.success(&format!(
        "File {} was copied into {}",
        source.display(),
        destination.display()
    ));

    Ok(PickOutcome::Installed {
        source,
        destination,
    })
}
