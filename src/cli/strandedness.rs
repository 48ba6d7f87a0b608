use std::{fmt, str::FromStr};

/// Library preparation protocol orientation
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Strandedness {
    #[default]
    Auto,
    Forward,
    Reverse,
    Unstranded,
}

impl Strandedness {
    pub const VALUES: [&'static str; 4] = ["auto", "yes", "no", "reverse"];

    pub fn is_stranded(&self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Forward | Self::Reverse => Some(true),
            Self::Unstranded => Some(false),
        }
    }
}

impl FromStr for Strandedness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "yes" => Ok(Self::Forward),
            "no" => Ok(Self::Unstranded),
            "reverse" => Ok(Self::Reverse),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for Strandedness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Auto => "auto",
            Self::Forward => "yes",
            Self::Unstranded => "no",
            Self::Reverse => "reverse",
        };
        f.write_str(s)
    }
}
