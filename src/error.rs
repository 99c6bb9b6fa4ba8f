use crate::config::ConfigError;
use crate::matching::{
    FutureDonationDate, InvalidBloodType, MatchServiceError, NegativeDonationCount,
};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Roster(csv::Error),
    Json(serde_json::Error),
    BloodType(InvalidBloodType),
    Eligibility(FutureDonationDate),
    Scoring(NegativeDonationCount),
    Matching(MatchServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Roster(err) => write!(f, "roster error: {}", err),
            AppError::Json(err) => write!(f, "serialization error: {}", err),
            AppError::BloodType(err) => write!(f, "blood group error: {}", err),
            AppError::Eligibility(err) => write!(f, "eligibility error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
            AppError::Matching(err) => write!(f, "matching error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Roster(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::BloodType(err) => Some(err),
            AppError::Eligibility(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Matching(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Roster(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<NegativeDonationCount> for AppError {
    fn from(value: NegativeDonationCount) -> Self {
        Self::Scoring(value)
    }
}

impl From<InvalidBloodType> for AppError {
    fn from(value: InvalidBloodType) -> Self {
        Self::BloodType(value)
    }
}

impl From<FutureDonationDate> for AppError {
    fn from(value: FutureDonationDate) -> Self {
        Self::Eligibility(value)
    }
}

impl From<MatchServiceError> for AppError {
    fn from(value: MatchServiceError) -> Self {
        Self::Matching(value)
    }
}
