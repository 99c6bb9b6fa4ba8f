use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Minimum gap between whole-blood donations (8 weeks).
pub const MIN_DONATION_GAP_DAYS: i64 = 56;

/// Outcome of the 56-day gap check for a single donor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub eligible: bool,
    pub next_eligible_date: Option<NaiveDate>,
    pub days_remaining: u32,
    pub message: String,
}

/// The stored last-donation date lies after the evaluation date. That is a
/// data-integrity problem on the caller's side, never a "not eligible".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("last donation {last_donation} is after the evaluation date {today}")]
pub struct FutureDonationDate {
    pub last_donation: NaiveDate,
    pub today: NaiveDate,
}

/// Decide whether a donor may donate again.
///
/// `today` is always passed in by the caller; the calculator never reads a
/// wall clock, so identical inputs always produce identical reports. The
/// 56-day bound is inclusive: exactly 56 days since the last donation is
/// eligible.
pub fn check_eligibility(
    last_donation: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<EligibilityReport, FutureDonationDate> {
    let Some(last) = last_donation else {
        return Ok(EligibilityReport {
            eligible: true,
            next_eligible_date: None,
            days_remaining: 0,
            message: "Eligible to donate (no previous donation recorded)".to_string(),
        });
    };

    let days_since = (today - last).num_days();
    if days_since < 0 {
        return Err(FutureDonationDate {
            last_donation: last,
            today,
        });
    }

    if days_since >= MIN_DONATION_GAP_DAYS {
        return Ok(EligibilityReport {
            eligible: true,
            next_eligible_date: None,
            days_remaining: 0,
            message: format!("Eligible to donate ({days_since} days since last donation)"),
        });
    }

    let days_remaining = MIN_DONATION_GAP_DAYS - days_since;
    let next_eligible = last + Duration::days(MIN_DONATION_GAP_DAYS);

    Ok(EligibilityReport {
        eligible: false,
        next_eligible_date: Some(next_eligible),
        days_remaining: days_remaining as u32,
        message: format!(
            "Not eligible yet. {days_remaining} days remaining (next eligible: {next_eligible})"
        ),
    })
}
