use std::io::{BufRead, Write};

use super::InputError;

/// Prompt with a message and return the trimmed line the user entered.
/// Returns `InputError::EndOfInput` once the input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, InputError> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::EndOfInput);
    }
    Ok(line.trim().to_string())
}

/// Prompt with a message and a default value. Returns default if input is empty.
pub fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: &str,
) -> Result<String, InputError> {
    let answer = prompt(input, output, &format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Prompt with a yes/no question. Returns bool based on input and default.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool, InputError> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let answer = prompt(input, output, &format!("{} [{}]: ", message, hint))?.to_lowercase();
    if answer.is_empty() {
        Ok(default_yes)
    } else {
        Ok(answer == "y" || answer == "yes")
    }
}

/// Prompt for one measurement in inches and parse it.
pub fn prompt_measurement<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    message: &str,
) -> Result<f64, InputError> {
    let text = prompt(input, output, message)?;
    parse_measurement(field, &text)
}

/// Parse measurement text as a floating-point number of inches.
pub fn parse_measurement(field: &'static str, text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            text: text.trim().to_string(),
        })
}
