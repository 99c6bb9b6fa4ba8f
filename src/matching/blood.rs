use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight ABO/Rh blood groups tracked by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "AB+")]
    AbPositive,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::ONegative,
        BloodType::OPositive,
        BloodType::ANegative,
        BloodType::APositive,
        BloodType::BNegative,
        BloodType::BPositive,
        BloodType::AbNegative,
        BloodType::AbPositive,
    ];

    /// Clinical label used on donor cards and blood request forms.
    pub const fn label(self) -> &'static str {
        match self {
            BloodType::ONegative => "O-",
            BloodType::OPositive => "O+",
            BloodType::ANegative => "A-",
            BloodType::APositive => "A+",
            BloodType::BNegative => "B-",
            BloodType::BPositive => "B+",
            BloodType::AbNegative => "AB-",
            BloodType::AbPositive => "AB+",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when an inbound blood-group string is not one of the eight groups.
///
/// Malformed input must never silently narrow a compatibility set, so parsing
/// is the single place where unknown groups are rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized blood group '{0}'")]
pub struct InvalidBloodType(pub String);

impl FromStr for BloodType {
    type Err = InvalidBloodType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "O-" => Ok(BloodType::ONegative),
            "O+" => Ok(BloodType::OPositive),
            "A-" => Ok(BloodType::ANegative),
            "A+" => Ok(BloodType::APositive),
            "B-" => Ok(BloodType::BNegative),
            "B+" => Ok(BloodType::BPositive),
            "AB-" => Ok(BloodType::AbNegative),
            "AB+" => Ok(BloodType::AbPositive),
            _ => Err(InvalidBloodType(value.trim().to_string())),
        }
    }
}

/// Donor groups medically safe to transfuse into the given recipient group.
///
/// Fixed table keyed by recipient: O- is the universal donor and appears in
/// every set; AB+ is the universal recipient and accepts all eight groups.
pub const fn compatible_donor_types(recipient: BloodType) -> &'static [BloodType] {
    use BloodType::*;
    match recipient {
        ONegative => &[ONegative],
        OPositive => &[ONegative, OPositive],
        ANegative => &[ONegative, ANegative],
        APositive => &[ONegative, OPositive, ANegative, APositive],
        BNegative => &[ONegative, BNegative],
        BPositive => &[ONegative, OPositive, BNegative, BPositive],
        AbNegative => &[ONegative, ANegative, BNegative, AbNegative],
        AbPositive => &BloodType::ALL,
    }
}

/// True when a unit from `donor` may be given to `recipient`.
pub fn is_compatible(donor: BloodType, recipient: BloodType) -> bool {
    compatible_donor_types(recipient).contains(&donor)
}
