//! Option values and form variants

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DraftError;

/// Employment type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl Occupation {
    /// All options in display order.
    pub const ALL: [Occupation; 3] = [Self::FullTime, Self::PartTime, Self::Contract];

    /// The label shown in the form and in the snippet.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Workplace type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workplace {
    #[default]
    Office,
    Hybrid,
    Flexible,
    Remote,
}

impl Workplace {
    /// All options in display order.
    pub const ALL: [Workplace; 4] = [Self::Office, Self::Hybrid, Self::Flexible, Self::Remote];

    /// The label shown in the form and in the snippet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Hybrid => "Hybrid",
            Self::Flexible => "Flexible",
            Self::Remote => "Remote",
        }
    }
}

impl fmt::Display for Workplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which optional fields a draft carries.
///
/// - `Agreements`: the community channel form, with the two agreement
///   checkboxes and no company link.
/// - `CompanyUrl`: the listing form, with an optional company link and no
///   agreements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Agreements,
    CompanyUrl,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Agreements => "agreements",
            Self::CompanyUrl => "company-url",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agreements" => Ok(Self::Agreements),
            "company-url" | "company_url" | "companyurl" => Ok(Self::CompanyUrl),
            other => Err(DraftError::UnknownVariant(other.to_string())),
        }
    }
}
