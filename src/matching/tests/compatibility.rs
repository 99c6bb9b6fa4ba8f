use crate::matching::blood::{compatible_donor_types, is_compatible, BloodType};

#[test]
fn every_recipient_accepts_the_universal_donor_and_its_own_group() {
    for recipient in BloodType::ALL {
        let compatible = compatible_donor_types(recipient);
        assert!(
            compatible.contains(&BloodType::ONegative),
            "{recipient} must accept O-"
        );
        assert!(
            compatible.contains(&recipient),
            "{recipient} must accept its own group"
        );
    }
}

#[test]
fn universal_recipient_and_universal_donor_cardinalities() {
    assert_eq!(compatible_donor_types(BloodType::AbPositive).len(), 8);
    assert_eq!(compatible_donor_types(BloodType::ONegative).len(), 1);
}

#[test]
fn a_positive_accepts_exactly_four_groups() {
    let compatible = compatible_donor_types(BloodType::APositive);
    assert_eq!(
        compatible,
        &[
            BloodType::ONegative,
            BloodType::OPositive,
            BloodType::ANegative,
            BloodType::APositive,
        ]
    );
    assert!(!is_compatible(BloodType::BPositive, BloodType::APositive));
}

#[test]
fn parsing_rejects_unknown_groups_loudly() {
    let err = "X+".parse::<BloodType>().expect_err("must not parse");
    assert!(err.to_string().contains("X+"));
    assert!("".parse::<BloodType>().is_err());
}

#[test]
fn parsing_is_case_insensitive_and_trims() {
    assert_eq!(
        " ab- ".parse::<BloodType>().expect("parses"),
        BloodType::AbNegative
    );
    assert_eq!("o+".parse::<BloodType>().expect("parses"), BloodType::OPositive);
}

#[test]
fn labels_round_trip_through_parsing() {
    for blood_type in BloodType::ALL {
        assert_eq!(
            blood_type.label().parse::<BloodType>().expect("round trip"),
            blood_type
        );
    }
}
