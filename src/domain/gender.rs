use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Restricts catalog selection to one gender, or leaves it open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenderFilter {
    #[default]
    Any,
    Only(Gender),
}

impl GenderFilter {
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::Any => true,
            GenderFilter::Only(wanted) => *wanted == gender,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderFilter::Any => "any",
            GenderFilter::Only(gender) => gender.as_str(),
        }
    }
}

impl From<Gender> for GenderFilter {
    fn from(gender: Gender) -> Self {
        GenderFilter::Only(gender)
    }
}

impl FromStr for GenderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "" => Ok(GenderFilter::Any),
            "male" => Ok(GenderFilter::Only(Gender::Male)),
            "female" => Ok(GenderFilter::Only(Gender::Female)),
            other => Err(format!(
                "Invalid gender: {}. Expected: any, male, or female",
                other
            )),
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
