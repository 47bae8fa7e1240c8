use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::prompt::{prompt, prompt_measurement};
use super::{Command, InputError};
use crate::config::Config;
use crate::estimator::{self, Measurements, Sex};
use crate::output;

const COMMAND_PROMPT: &str = "Please enter a command (help (h), calculate (c), exit (e)): ";
const SEX_PROMPT: &str = "Please enter your gender (man (m)) OR (woman (w)): ";

/// Interactive calculator loop.
///
/// All state the loop needs (where to read from, where to write to and the
/// display preferences) lives here rather than in globals, so a session can
/// be driven from a terminal or from an in-memory buffer.
pub struct Session<R, W> {
    input: R,
    output: W,
    use_colors: bool,
    default_sex: Option<Sex>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            use_colors: false,
            default_sex: None,
        }
    }

    /// Build a session with colors and default sex taken from the config.
    pub fn from_config(input: R, output: W, config: &Config) -> Self {
        Self::new(input, output)
            .with_colors(config.color.use_colors())
            .with_default_sex(config.default_sex)
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_default_sex(mut self, default_sex: Option<Sex>) -> Self {
        self.default_sex = default_sex;
        self
    }

    /// Consume the session and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", output::format_welcome(self.use_colors))
            .context("Failed to write to output")?;

        let mut calculations = 0usize;
        loop {
            let line = match prompt(&mut self.input, &mut self.output, COMMAND_PROMPT) {
                Ok(line) => line,
                Err(InputError::EndOfInput) => {
                    writeln!(self.output).context("Failed to write to output")?;
                    break;
                }
                Err(e) => return Err(e).context("Failed to read command"),
            };

            match Command::parse(&line) {
                Some(Command::Help) => {
                    writeln!(self.output, "{}", output::format_samples(self.use_colors))
                        .context("Failed to write to output")?;
                }
                Some(Command::Calculate) => match self.calculate() {
                    Ok(()) => calculations += 1,
                    Err(InputError::EndOfInput) => {
                        writeln!(self.output).context("Failed to write to output")?;
                        break;
                    }
                    Err(InputError::Io(e)) => {
                        return Err(e).context("Failed to read measurements");
                    }
                    Err(e @ InputError::InvalidSex(_)) => {
                        log::debug!("Rejected sex input: {:?}", e);
                        writeln!(self.output, "{}", e).context("Failed to write to output")?;
                    }
                    Err(e) => {
                        log::debug!("Rejected measurement input: {:?}", e);
                        writeln!(self.output, "{}", output::format_error(&e, self.use_colors))
                            .context("Failed to write to output")?;
                    }
                },
                Some(Command::Exit) => break,
                None => {
                    writeln!(self.output, "Invalid command entered.")
                        .context("Failed to write to output")?;
                }
            }
        }

        log::debug!("Session ended after {} calculations", calculations);
        Ok(())
    }

    /// Ask for sex and measurements, estimate, and print the result line.
    fn calculate(&mut self) -> Result<(), InputError> {
        let sex = match self.default_sex {
            Some(sex) => sex,
            None => {
                let answer = prompt(&mut self.input, &mut self.output, SEX_PROMPT)?;
                answer.parse::<Sex>().map_err(|_| InputError::InvalidSex(answer))?
            }
        };

        let measurements = self.read_measurements(sex)?;
        let result = estimator::estimate(&measurements);
        log::debug!("Estimated {:?} -> {:?}", measurements, result);

        writeln!(
            self.output,
            "{}",
            output::format_estimate(sex, &result, self.use_colors)
        )?;
        Ok(())
    }

    fn read_measurements(&mut self, sex: Sex) -> Result<Measurements, InputError> {
        let input = &mut self.input;
        let output = &mut self.output;

        let neck = prompt_measurement(input, output, "neck", "Enter neck measurement in inches: ")?;
        let waist = prompt_measurement(input, output, "waist", "Enter waist measurement in inches: ")?;

        match sex {
            Sex::Woman => {
                let hip = prompt_measurement(input, output, "hip", "Enter hip measurement in inches: ")?;
                let height = prompt_measurement(input, output, "height", "Enter height in inches: ")?;
                Ok(Measurements::Woman { neck, waist, hip, height })
            }
            Sex::Man => {
                let height = prompt_measurement(input, output, "height", "Enter height in inches: ")?;
                Ok(Measurements::Man { neck, waist, height })
            }
        }
    }
}
