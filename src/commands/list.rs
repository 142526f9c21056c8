//! List command - print every available template

use super::load_templates;
use crate::PickError;
use crate::config::AppConfig;
use crate::ui::OutputWriter;
use std::io::Write;

type Result<T> = std::result::Result<T, PickError>;

/// Execute the list command
///
/// Names go to `out` one per line, relative to the clone unless `absolute`
/// is set.
///
/// # Errors
///
/// Returns `PickError` if templates cannot be loaded or `out` fails.
pub fn execute(
    config: &AppConfig,
    absolute: bool,
    output: &dyn OutputWriter,
    out: &mut dyn Write,
) -> Result<()> {
    let (templates, _) = load_templates(config, false, false, output)?;

    if absolute {
        for relative in &templates.relative {
            writeln!(out, "{}", templates.prefix.join(relative).display())?;
        }
    } else {
        for name in templates.names() {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}
