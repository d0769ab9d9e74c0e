use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Creative,
    Verified,
}

impl Mode {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Creative => "creative",
            Self::Verified => "verified",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match *self {
            Self::Creative => "/api/v1/creative",
            Self::Verified => "/api/v1/verified",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creative" => Ok(Self::Creative),
            "verified" => Ok(Self::Verified),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_mode() {
        assert_eq!(Mode::Creative.endpoint(), "/api/v1/creative");
        assert_eq!(Mode::Verified.endpoint(), "/api/v1/verified");
    }

    #[test]
    fn parses_only_known_modes() {
        assert_eq!("verified".parse::<Mode>(), Ok(Mode::Verified));
        assert_eq!("creative".parse::<Mode>(), Ok(Mode::Creative));
        assert!("Verified".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Creative);
    }
}
