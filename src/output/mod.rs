pub mod formatter;

pub use formatter::{
    format_error, format_estimate, format_samples, format_welcome, should_use_colors,
};
