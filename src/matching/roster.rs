use std::io::Read;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::domain::DonorId;
use super::repository::DonorRecord;

/// Result of parsing a donor roster export. Rows that fail validation are
/// reported individually instead of failing the whole file, matching how
/// bulk donor imports behave in the wider platform.
#[derive(Debug)]
pub struct RosterImport {
    pub records: Vec<DonorRecord>,
    pub skipped: Vec<RosterSkip>,
}

/// One rejected roster row and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSkip {
    pub row: usize,
    pub name: String,
    pub reason: String,
}

/// Parse a donor roster CSV. Only a malformed file (bad CSV framing or
/// mismatched headers) is an error; bad rows land in `skipped`.
pub fn parse_roster<R: Read>(reader: R) -> Result<RosterImport, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row_number = index + 1;
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                skipped.push(RosterSkip {
                    row: row_number,
                    name: "Unknown".to_string(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match row.into_record(records.len() + 1) {
            Ok(record) => records.push(record),
            Err((name, reason)) => skipped.push(RosterSkip {
                row: row_number,
                name,
                reason,
            }),
        }
    }

    Ok(RosterImport { records, skipped })
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Blood Group")]
    blood_group: String,
    #[serde(rename = "District")]
    district: String,
    #[serde(rename = "Upazila")]
    upazila: String,
    #[serde(rename = "Village", default, deserialize_with = "empty_string_as_none")]
    village: Option<String>,
    #[serde(
        rename = "Last Donation",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    last_donation: Option<String>,
    #[serde(rename = "Available", default, deserialize_with = "empty_string_as_none")]
    available: Option<String>,
    #[serde(rename = "Verified", default, deserialize_with = "empty_string_as_none")]
    verified: Option<String>,
    #[serde(rename = "Donations", default)]
    donations: Option<u32>,
}

impl RosterRow {
    fn into_record(self, sequence: usize) -> Result<DonorRecord, (String, String)> {
        let name = if self.name.is_empty() {
            "Unknown".to_string()
        } else {
            self.name.clone()
        };

        if self.name.is_empty() || self.district.is_empty() || self.upazila.is_empty() {
            return Err((
                name,
                "missing required fields: name, district, upazila".to_string(),
            ));
        }

        let blood_type = self
            .blood_group
            .parse()
            .map_err(|err| (name.clone(), format!("{err}")))?;

        let last_donation_date = match self.last_donation.as_deref() {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| (name.clone(), format!("invalid last donation date '{raw}'")))?,
            ),
            None => None,
        };

        Ok(DonorRecord {
            donor_id: DonorId(format!("donor-{sequence:04}")),
            blood_type,
            district: self.district,
            upazila: self.upazila,
            village: self.village,
            is_verified: parse_flag(self.verified.as_deref(), false),
            // Donors default to available unless the export says otherwise.
            is_available: parse_flag(self.available.as_deref(), true),
            total_donations: self.donations.unwrap_or(0),
            points: 0,
            badges: Default::default(),
            last_donation_date,
        })
    }
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "yes" | "y" | "true" | "1"
        ),
        None => default,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
