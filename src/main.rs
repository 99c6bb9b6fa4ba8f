use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use roktodan::config::AppConfig;
use roktodan::error::AppError;
use roktodan::matching::{
    check_eligibility, compatible_donor_types, parse_roster, rank, score, BloodType,
    DonorCandidate, MatchOutcome, MatchQuery, RosterImport, ScoringInput,
};
use roktodan::telemetry;
use std::fs::File;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "roktodan",
    about = "Donor matching and gamification engine for blood donation coordination",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank compatible donors from a roster CSV for a blood request
    Match(MatchArgs),
    /// Check the 56-day donation gap rule for a donor
    Eligibility(EligibilityArgs),
    /// Compute points and badges for a donor profile
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Donor roster CSV export
    #[arg(long)]
    roster: PathBuf,
    /// Recipient blood group (one of O-, O+, A-, A+, B-, B+, AB-, AB+)
    #[arg(long, value_parser = parse_blood_type)]
    blood_group: BloodType,
    /// District where the blood is needed
    #[arg(long)]
    district: String,
    /// Upazila where the blood is needed
    #[arg(long, default_value = "")]
    upazila: String,
    /// Override the configured cap on the match list
    #[arg(long)]
    limit: Option<usize>,
    /// Emit the match outcome as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct EligibilityArgs {
    /// Last recorded donation date (YYYY-MM-DD); omit for first-time donors
    #[arg(long, value_parser = parse_date)]
    last_donation: Option<NaiveDate>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Lifetime donation count
    #[arg(long)]
    donations: i64,
    /// Donor identity verified by an admin
    #[arg(long)]
    verified: bool,
    /// Donor currently flagged available
    #[arg(long)]
    available: bool,
    /// District, upazila, and blood group all present on the profile
    #[arg(long)]
    complete_profile: bool,
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Match(args) => run_match(args, config),
        Command::Eligibility(args) => run_eligibility(args),
        Command::Score(args) => run_score(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_blood_type(raw: &str) -> Result<BloodType, String> {
    raw.parse::<BloodType>().map_err(|err| err.to_string())
}

fn run_match(args: MatchArgs, config: AppConfig) -> Result<(), AppError> {
    let file = File::open(&args.roster)?;
    let import = parse_roster(file)?;

    for skip in &import.skipped {
        warn!(row = skip.row, name = %skip.name, reason = %skip.reason, "skipped roster row");
    }
    info!(
        donors = import.records.len(),
        skipped = import.skipped.len(),
        "loaded donor roster"
    );

    let query = MatchQuery {
        recipient_type: args.blood_group,
        preferred_district: args.district,
        preferred_upazila: args.upazila,
    };
    let limit = args.limit.unwrap_or(config.matching.match_limit);
    let outcome = match_outcome(import, &query, limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_match_outcome(&query, &outcome);
    }
    Ok(())
}

fn match_outcome(import: RosterImport, query: &MatchQuery, limit: usize) -> MatchOutcome {
    let candidates: Vec<DonorCandidate> = import
        .records
        .iter()
        .map(|record| record.candidate())
        .collect();

    let mut ranked = rank(query, candidates);
    ranked.truncate(limit);

    MatchOutcome {
        recipient_type: query.recipient_type,
        compatible_types: compatible_donor_types(query.recipient_type).to_vec(),
        total_matched: ranked.len(),
        donors: ranked,
    }
}

fn render_match_outcome(query: &MatchQuery, outcome: &MatchOutcome) {
    let compatible: Vec<&str> = outcome
        .compatible_types
        .iter()
        .map(|blood_type| blood_type.label())
        .collect();

    println!("Blood request: {} in {}", outcome.recipient_type, query.preferred_district);
    println!("Compatible donor groups: {}", compatible.join(", "));

    if outcome.donors.is_empty() {
        println!("Matched donors: none");
        return;
    }

    println!("Matched donors ({})", outcome.total_matched);
    for donor in &outcome.donors {
        let verified = if donor.is_verified { "verified" } else { "unverified" };
        println!(
            "- {} | {} | {}, {} | {} | {} donation(s)",
            donor.donor_id.0,
            donor.blood_type,
            donor.upazila,
            donor.district,
            verified,
            donor.total_donations
        );
    }
}

fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let report = check_eligibility(args.last_donation, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message);
        if let Some(next) = report.next_eligible_date {
            println!("Next eligible date: {next}");
        }
    }
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let result = score(&ScoringInput {
        total_donations: args.donations,
        is_verified: args.verified,
        is_available: args.available,
        has_complete_profile: args.complete_profile,
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Points: {}", result.points);
        if result.badges.is_empty() {
            println!("Badges: none");
        } else {
            println!("Badges:");
            for badge in &result.badges {
                println!("- {} ({})", badge.title(), badge.description());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ROSTER: &str = "\
Name,Blood Group,District,Upazila,Village,Last Donation,Available,Verified,Donations
Rahim,O+,Dhaka,Savar,,2025-01-10,yes,no,2
Karim,O-,Dhaka,Dhamrai,,2024-11-02,yes,yes,20
Fatema,AB+,Chattogram,Patiya,,,yes,yes,5
";

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2025-06-01").expect("date parses");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid"));
        assert!(parse_date("06/01/2025").is_err());
    }

    #[test]
    fn parse_blood_type_rejects_unknown_groups() {
        assert_eq!(parse_blood_type("ab+").expect("parses"), BloodType::AbPositive);
        assert!(parse_blood_type("C+").is_err());
    }

    #[test]
    fn match_outcome_filters_and_ranks_roster() {
        let import = parse_roster(Cursor::new(ROSTER)).expect("roster parses");
        let query = MatchQuery {
            recipient_type: BloodType::OPositive,
            preferred_district: "Dhaka".to_string(),
            preferred_upazila: "Savar".to_string(),
        };

        let outcome = match_outcome(import, &query, 20);

        // AB+ donor is incompatible with an O+ recipient.
        assert_eq!(outcome.total_matched, 2);
        assert_eq!(outcome.donors[0].donor_id.0, "donor-0001");
        assert_eq!(outcome.donors[1].donor_id.0, "donor-0002");
    }
}
