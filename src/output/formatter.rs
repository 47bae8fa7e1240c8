use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::estimator::{EstimateError, Sex};

const WOMEN_EQUATION: &str =
    "% body fat (women) = [163.205 × log10 (waist + hip − neck)] − [97.684 × log10 (height)] − 78.387";
const MEN_EQUATION: &str =
    "% body fat (men) = [86.010 × log10 (waist − neck)] − [70.041 × log10 (height)] + 36.76";
const REFERENCE: &str = "United States Army. (2019). Army Regulation 600-9: The Army Body Composition Program. Retrieved from:\nhttps://armypubs.army.mil/ProductMaps/PubForm/Details.aspx?PUB_ID=1004922";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Greeting printed once when the interactive session starts
pub fn format_welcome(use_colors: bool) -> String {
    let title = "Welcome to the Body Fat Percentage Calculator!";
    let hint = "Type 'help' (h) for sample calculations, 'calculate' (c) to proceed, or 'exit' (e) to exit the program.";
    if use_colors {
        format!("{}\n{}", title.bold(), hint.dimmed())
    } else {
        format!("{}\n{}", title, hint)
    }
}

/// Format the outcome of one calculation as a single line.
///
/// Success: "Body fat percentage for women: 41.05%"
/// Failure: "Error: <reason>"
pub fn format_estimate(sex: Sex, result: &Result<f64, EstimateError>, use_colors: bool) -> String {
    match result {
        Ok(percentage) => {
            let value = format!("{}%", format_percentage(*percentage));
            if use_colors {
                format!("Body fat percentage for {}: {}", sex.group_label(), value.green().bold())
            } else {
                format!("Body fat percentage for {}: {}", sex.group_label(), value)
            }
        }
        Err(e) => format_error(e, use_colors),
    }
}

/// Whole numbers keep one decimal ("19.0"), others print as rounded ("28.2", "41.05").
fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{:.1}", percentage)
    } else {
        format!("{}", percentage)
    }
}

/// Format any displayable error as an "Error: ..." line
pub fn format_error(err: &dyn std::fmt::Display, use_colors: bool) -> String {
    let line = format!("Error: {}", err);
    if use_colors {
        line.red().to_string()
    } else {
        line
    }
}

/// Sample measurements, both equations and the regulation reference.
pub fn format_samples(use_colors: bool) -> String {
    let heading = |text: &str| {
        if use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = Vec::new();
    out.push(String::new());
    out.push(heading("Sample body fat calculations (Ref: AR 600-9, Table B-5):"));
    out.push(String::new());

    out.push(heading("SAMPLE (WOMEN)"));
    out.push("Equation for women is:".to_string());
    out.push(WOMEN_EQUATION.to_string());
    out.push(String::new());
    out.push("Example Measurements:".to_string());
    out.push("Neck = 15 inches".to_string());
    out.push("Waist = 40 inches".to_string());
    out.push("Hip = 40 inches".to_string());
    out.push("Height = 64 inches".to_string());
    out.push(String::new());

    out.push(heading("SAMPLE (MEN)"));
    out.push("Equation for men is:".to_string());
    out.push(MEN_EQUATION.to_string());
    out.push(String::new());
    out.push("Example Measurements:".to_string());
    out.push("Neck = 15 inches".to_string());
    out.push("Waist = 40 inches".to_string());
    out.push("Height = 69 inches".to_string());
    out.push(String::new());

    out.push(heading("References:"));
    out.push(REFERENCE.to_string());

    out.join("\n")
}
