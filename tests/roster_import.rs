//! Roster CSV import driven end-to-end into the ranker, the way the CLI
//! wires the two together for operational spot checks.

use std::io::Cursor;

use roktodan::matching::{parse_roster, rank, BloodType, MatchQuery};

const ROSTER: &str = "\
Name,Blood Group,District,Upazila,Village,Last Donation,Available,Verified,Donations
Rahim,O+,Dhaka,Savar,,2025-01-10,yes,no,2
Karim,O-,Savar,Savar,,2024-11-02,yes,yes,20
Fatema,AB+,Chattogram,Patiya,,,yes,yes,5
Jamal,B+,Dhaka,Savar,,,no,yes,8
Mystery,??,Dhaka,Savar,,,yes,no,0
";

#[test]
fn imported_roster_ranks_for_an_o_positive_request() {
    let import = parse_roster(Cursor::new(ROSTER)).expect("roster parses");
    assert_eq!(import.records.len(), 4);
    assert_eq!(import.skipped.len(), 1);
    assert_eq!(import.skipped[0].name, "Mystery");

    let candidates = import
        .records
        .iter()
        .map(|record| record.candidate())
        .collect();
    let ranked = rank(
        &MatchQuery {
            recipient_type: BloodType::OPositive,
            preferred_district: "Dhaka".to_string(),
            preferred_upazila: "Savar".to_string(),
        },
        candidates,
    );

    // Fatema is incompatible (AB+), Jamal incompatible (B+) and unavailable.
    // Rahim's district match beats Karim's verification and history.
    let names: Vec<&str> = ranked.iter().map(|c| c.donor_id.0.as_str()).collect();
    assert_eq!(names, ["donor-0001", "donor-0002"]);
    assert_eq!(ranked[0].blood_type, BloodType::OPositive);
    assert_eq!(ranked[1].blood_type, BloodType::ONegative);
}

#[test]
fn roster_records_are_ready_for_eligibility_checks() {
    let import = parse_roster(Cursor::new(ROSTER)).expect("roster parses");

    let rahim = &import.records[0];
    let report = roktodan::matching::check_eligibility(
        rahim.last_donation_date,
        chrono::NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"),
    )
    .expect("report computes");

    assert!(!report.eligible);
    assert_eq!(report.days_remaining, 34);
}
