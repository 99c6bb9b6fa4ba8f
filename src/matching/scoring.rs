use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const POINTS_PER_DONATION: u64 = 100;
pub const FIRST_DONATION_BONUS: u64 = 150;
pub const VERIFIED_BONUS: u64 = 75;
pub const AVAILABILITY_BONUS: u64 = 25;
pub const COMPLETE_PROFILE_BONUS: u64 = 50;

/// Milestone markers shown on a donor's public profile.
///
/// Every badge except `Verified` is gated on the lifetime donation count;
/// `Verified` is granted on the admin verification flag alone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Verified,
    FirstBlood,
    RegularDonor,
    Hero,
    Lifesaver,
    Legend,
}

impl Badge {
    pub const ALL: [Badge; 6] = [
        Badge::Verified,
        Badge::FirstBlood,
        Badge::RegularDonor,
        Badge::Hero,
        Badge::Lifesaver,
        Badge::Legend,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Badge::Verified => "verified",
            Badge::FirstBlood => "first_blood",
            Badge::RegularDonor => "regular_donor",
            Badge::Hero => "hero",
            Badge::Lifesaver => "lifesaver",
            Badge::Legend => "legend",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Badge::Verified => "Verified Donor",
            Badge::FirstBlood => "First Blood",
            Badge::RegularDonor => "Regular Donor",
            Badge::Hero => "Hero",
            Badge::Lifesaver => "Lifesaver",
            Badge::Legend => "Legend",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Badge::Verified => "Identity verified by admin",
            Badge::FirstBlood => "Completed first donation",
            Badge::RegularDonor => "3+ donations",
            Badge::Hero => "10+ donations",
            Badge::Lifesaver => "25+ donations",
            Badge::Legend => "50+ donations",
        }
    }

    /// Donation-count threshold; zero for the flag-gated `Verified` badge.
    pub const fn min_donations(self) -> u64 {
        match self {
            Badge::Verified => 0,
            Badge::FirstBlood => 1,
            Badge::RegularDonor => 3,
            Badge::Hero => 10,
            Badge::Lifesaver => 25,
            Badge::Legend => 50,
        }
    }
}

/// Raw profile counters and flags as stored by the persistence layer.
///
/// `total_donations` is signed on purpose: the counter arrives from an
/// external document store and a corrupted negative value must surface as a
/// typed error instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringInput {
    pub total_donations: i64,
    pub is_verified: bool,
    pub is_available: bool,
    pub has_complete_profile: bool,
}

/// Freshly computed gamification state for a donor profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub points: u64,
    pub badges: BTreeSet<Badge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("donation count must not be negative (got {0})")]
pub struct NegativeDonationCount(pub i64);

/// Compute a donor's accumulated points and earned badges.
///
/// All point components are additive with no caps. Badges are evaluated
/// independently, so crossing a higher threshold never removes a lower one.
pub fn score(input: &ScoringInput) -> Result<ScoringResult, NegativeDonationCount> {
    if input.total_donations < 0 {
        return Err(NegativeDonationCount(input.total_donations));
    }
    let donations = input.total_donations as u64;

    let mut points = donations * POINTS_PER_DONATION;
    if donations >= 1 {
        points += FIRST_DONATION_BONUS;
    }
    if input.is_verified {
        points += VERIFIED_BONUS;
    }
    if input.is_available {
        points += AVAILABILITY_BONUS;
    }
    if input.has_complete_profile {
        points += COMPLETE_PROFILE_BONUS;
    }

    let mut badges = BTreeSet::new();
    for badge in Badge::ALL {
        let earned = match badge {
            Badge::Verified => input.is_verified,
            counted => donations >= counted.min_donations(),
        };
        if earned {
            badges.insert(badge);
        }
    }

    Ok(ScoringResult { points, badges })
}
