use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

use super::{save_config, ColorMode, Config};
use crate::cli::prompt::{prompt_with_default, prompt_yes_no};
use crate::estimator::Sex;

/// Run the interactive init wizard and write the resulting config file.
///
/// Returns `Ok(false)` when an existing config was kept.
pub fn run_init_wizard<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config_path: &Path,
) -> Result<bool> {
    writeln!(output, "Body Fat Calculator Configuration")?;
    writeln!(output)?;

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            input,
            output,
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            writeln!(output, "Keeping existing config.")?;
            return Ok(false);
        }
    }

    writeln!(output, "A default sex skips the man/woman question on every calculation.")?;
    let default_sex = loop {
        let answer = prompt_with_default(input, output, "Default sex (man, woman or none)", "none")?;
        if answer.eq_ignore_ascii_case("none") {
            break None;
        }
        match answer.parse::<Sex>() {
            Ok(sex) => break Some(sex),
            Err(e) => writeln!(output, "  {}", e)?,
        }
    };

    let color = loop {
        let answer = prompt_with_default(input, output, "Color output (auto, always or never)", "auto")?;
        match answer.parse::<ColorMode>() {
            Ok(mode) => break mode,
            Err(e) => writeln!(output, "  {}", e)?,
        }
    };

    let config = Config { default_sex, color };
    save_config(config_path, &config)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    writeln!(output)?;
    writeln!(output, "Config written to {}", config_path.display())?;
    Ok(true)
}
