//! Parsing of bounded numeric arguments

use std::num::IntErrorKind;

const INT_MAX: i64 = i32::MAX as i64;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid number")]
    Malformed(String),
    #[error("'{token}' is out of range (must be {requirement})")]
    OutOfRange { token: String, requirement: String },
}

/// Inclusive integer range
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IntBounds {
    min: i64,
    max: i64,
}

impl Default for IntBounds {
    fn default() -> Self {
        Self {
            min: i64::from(i32::MIN),
            max: INT_MAX,
        }
    }
}

impl IntBounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub const fn at_least(min: i64) -> Self {
        Self { min, max: INT_MAX }
    }

    pub fn contains(&self, x: i64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Human readable form used in error messages
    pub fn requirement(&self) -> String {
        if self.max == INT_MAX {
            match self.min {
                0 => "a non-negative integer".to_string(),
                m => format!("greater than {}", m - 1),
            }
        } else {
            format!("between {} and {}", self.min, self.max)
        }
    }
}

/// Floating point range. The lower limit can be open.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FloatBounds {
    min: f64,
    max: f64,
    min_exclusive: bool,
}

impl Default for FloatBounds {
    fn default() -> Self {
        Self {
            min: f64::MIN,
            max: f64::MAX,
            min_exclusive: false,
        }
    }
}

impl FloatBounds {
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
        }
    }

    pub const fn greater_than(min: f64) -> Self {
        Self {
            min,
            max: f64::MAX,
            min_exclusive: true,
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        let above = if self.min_exclusive {
            x > self.min
        } else {
            x >= self.min
        };
        above && x <= self.max
    }

    pub fn requirement(&self) -> String {
        match (self.min_exclusive, self.max == f64::MAX) {
            (true, true) => format!("greater than {}", self.min),
            (false, true) => format!("at least {}", self.min),
            (true, false) => format!("greater than {} and at most {}", self.min, self.max),
            (false, false) => format!("between {} and {}", self.min, self.max),
        }
    }
}

/// Parse the whole of `token` as an integer lying within `bounds`
pub fn validate_int(token: &str, bounds: IntBounds) -> Result<i64, ValidationError> {
    let x = token.parse::<i64>().map_err(|e| match e.kind() {
        // Still a number, just too large for any bound
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::OutOfRange {
            token: token.to_string(),
            requirement: bounds.requirement(),
        },
        _ => ValidationError::Malformed(token.to_string()),
    })?;
    if bounds.contains(x) {
        Ok(x)
    } else {
        Err(ValidationError::OutOfRange {
            token: token.to_string(),
            requirement: bounds.requirement(),
        })
    }
}

/// Parse the whole of `token` as a finite float lying within `bounds`
pub fn validate_float(token: &str, bounds: FloatBounds) -> Result<f64, ValidationError> {
    let x = token
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| ValidationError::Malformed(token.to_string()))?;
    if bounds.contains(x) {
        Ok(x)
    } else {
        Err(ValidationError::OutOfRange {
            token: token.to_string(),
            requirement: bounds.requirement(),
        })
    }
}
