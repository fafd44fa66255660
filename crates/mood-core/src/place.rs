//! Place categories: indoors/outdoors/vehicle and home/work/elsewhere.

use crate::InvalidConstraint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InOut {
    In,
    Out,
    Vehicle,
}

impl InOut {
    pub const ALL: [InOut; 3] = [InOut::In, InOut::Out, InOut::Vehicle];

    pub fn key(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Vehicle => "vehicle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::In => "Indoors",
            Self::Out => "Outdoors",
            Self::Vehicle => "In a vehicle",
        }
    }

    pub fn parse(key: &str) -> Result<Self, InvalidConstraint> {
        match key {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "vehicle" => Ok(Self::Vehicle),
            other => Err(InvalidConstraint::new("in_out", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeWork {
    Home,
    Work,
    Other,
}

impl HomeWork {
    pub const ALL: [HomeWork; 3] = [HomeWork::Home, HomeWork::Work, HomeWork::Other];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "At home",
            Self::Work => "At work",
            Self::Other => "Elsewhere",
        }
    }

    pub fn parse(key: &str) -> Result<Self, InvalidConstraint> {
        match key {
            "home" => Ok(Self::Home),
            "work" => Ok(Self::Work),
            "other" => Ok(Self::Other),
            other => Err(InvalidConstraint::new("home_work", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_keys_round_trip() {
        for p in InOut::ALL {
            assert_eq!(InOut::parse(p.key()), Ok(p));
        }
        for p in HomeWork::ALL {
            assert_eq!(HomeWork::parse(p.key()), Ok(p));
        }
    }

    #[test]
    fn unknown_place_is_invalid_constraint() {
        let err = InOut::parse("underwater").unwrap_err();
        assert_eq!(err.field, "in_out");
    }
}
