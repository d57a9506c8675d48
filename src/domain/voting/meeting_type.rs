//! MeetingType enum for the ISO 20022 meeting type code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Kind of shareholder meeting a voting belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingType {
    /// Extraordinary general meeting.
    #[serde(rename = "XMET")]
    Extraordinary,
    /// Annual general meeting.
    #[serde(rename = "GMET")]
    General,
    /// Mixed general meeting.
    #[serde(rename = "MIXD")]
    Mixed,
    /// Ordinary general meeting.
    #[serde(rename = "OMET")]
    Ordinary,
    /// Bondholder meeting.
    #[serde(rename = "BMET")]
    Bondholder,
    /// Court meeting.
    #[serde(rename = "CMET")]
    Court,
}

impl MeetingType {
    /// Returns the four-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            MeetingType::Extraordinary => "XMET",
            MeetingType::General => "GMET",
            MeetingType::Mixed => "MIXD",
            MeetingType::Ordinary => "OMET",
            MeetingType::Bondholder => "BMET",
            MeetingType::Court => "CMET",
        }
    }

    /// Extracts the meeting type from a voting name such as `GMET_Annual voting`.
    pub fn from_voting_name(name: &str) -> Result<Self, ValidationError> {
        let token = name.split('_').next().unwrap_or_default();
        token.parse()
    }
}

impl FromStr for MeetingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "XMET" => Ok(MeetingType::Extraordinary),
            "GMET" => Ok(MeetingType::General),
            "MIXD" => Ok(MeetingType::Mixed),
            "OMET" => Ok(MeetingType::Ordinary),
            "BMET" => Ok(MeetingType::Bondholder),
            "CMET" => Ok(MeetingType::Court),
            other => Err(ValidationError::invalid_format(
                "meeting_type",
                format!("'{}' is not a recognized meeting type code", other),
            )),
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
