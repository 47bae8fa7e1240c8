use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Selects which AR 600-9 equation applies and which measurements it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Man,
    Woman,
}

impl Sex {
    /// Label used in result lines ("Body fat percentage for women: ...").
    pub fn group_label(&self) -> &'static str {
        match self {
            Sex::Man => "men",
            Sex::Woman => "women",
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    /// Accepts `man`/`m` and `woman`/`w`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "man" | "m" => Ok(Sex::Man),
            "woman" | "w" => Ok(Sex::Woman),
            other => Err(format!("unknown sex '{}' (expected man/m or woman/w)", other)),
        }
    }
}

/// Circumference and height measurements in inches.
///
/// Each variant carries exactly the fields its equation uses: the hip
/// circumference only enters the equation for women.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurements {
    Man {
        neck: f64,
        waist: f64,
        height: f64,
    },
    Woman {
        neck: f64,
        waist: f64,
        hip: f64,
        height: f64,
    },
}

impl Measurements {
    pub fn sex(&self) -> Sex {
        match self {
            Measurements::Man { .. } => Sex::Man,
            Measurements::Woman { .. } => Sex::Woman,
        }
    }
}
