//! End-to-end tests for the schedule calculator.
//!
//! Each test goes through the public API: ProfileInput -> PersonProfile ->
//! compute_schedule.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sanskar_rs::schedule::ASTROLOGER_PLACEHOLDER;
use sanskar_rs::{
    compute_schedule, Error, Gender, PersonProfile, ProfileInput, SanskarResult, SANSKARS,
    SANSKAR_COUNT,
};

fn profile(dob: &str, gender: Gender) -> PersonProfile {
    PersonProfile::new(
        "Ada",
        "ada@example.com",
        gender,
        NaiveDate::parse_from_str(dob, "%Y-%m-%d").unwrap(),
    )
}

fn entry<'a>(schedule: &'a [SanskarResult], name: &str) -> &'a SanskarResult {
    schedule
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no entry for {name}"))
}

// ============================================================================
// 1. Shape: 16 results, canonical order, nothing blank
// ============================================================================

#[test]
fn test_sixteen_results_in_canonical_order() {
    let schedule = compute_schedule(&profile("1985-07-04", Gender::Other)).unwrap();

    assert_eq!(schedule.len(), SANSKAR_COUNT);
    let names: Vec<&str> = schedule.iter().map(|r| r.name.as_str()).collect();
    let canonical: Vec<&str> = SANSKARS.iter().map(|d| d.name).collect();
    assert_eq!(names, canonical);

    for r in &schedule {
        assert!(!r.computed_date.is_empty(), "{} has empty date", r.name);
        assert!(!r.computed_age_label.is_empty(), "{} has empty label", r.name);
    }
}

// ============================================================================
// 2. Idempotence
// ============================================================================

#[test]
fn test_same_input_same_output() {
    let p = profile("1999-12-31", Gender::Female);
    assert_eq!(compute_schedule(&p).unwrap(), compute_schedule(&p).unwrap());
}

// ============================================================================
// 3. Gender only moves Vivaha and Grihastha
// ============================================================================

#[test]
fn test_gender_changes_only_marriage_and_householder() {
    let male = compute_schedule(&profile("2000-01-15", Gender::Male)).unwrap();
    let female = compute_schedule(&profile("2000-01-15", Gender::Female)).unwrap();

    let differing: Vec<&str> = male
        .iter()
        .zip(&female)
        .filter(|(m, f)| m != f)
        .map(|(m, _)| m.name.as_str())
        .collect();
    assert_eq!(differing, vec!["Vivaha", "Grihastha"]);
}

// ============================================================================
// 4. Reference dates
// ============================================================================

#[test]
fn test_male_born_2000_01_15() {
    let schedule = compute_schedule(&profile("2000-01-15", Gender::Male)).unwrap();

    assert_eq!(entry(&schedule, "Jatakarma").computed_date, "January 15, 2000");
    assert_eq!(entry(&schedule, "Namakarana").computed_date, "January 26, 2000");
    let vivaha = entry(&schedule, "Vivaha");
    assert_eq!(vivaha.computed_date, "January 15, 2025");
    assert_eq!(vivaha.computed_age_label, "25 years");
}

#[test]
fn test_female_born_2000_01_15() {
    let schedule = compute_schedule(&profile("2000-01-15", Gender::Female)).unwrap();

    let vivaha = entry(&schedule, "Vivaha");
    assert_eq!(vivaha.computed_date, "January 15, 2022");
    assert_eq!(vivaha.computed_age_label, "22 years");
    assert_eq!(entry(&schedule, "Grihastha").computed_date, "January 15, 2023");
    assert_eq!(entry(&schedule, "Grihastha").computed_age_label, "23 years");
}

// ============================================================================
// 5. Garbhadhana never gets a date
// ============================================================================

#[test]
fn test_garbhadhana_placeholder() {
    for (dob, gender) in [
        ("1900-01-01", Gender::Male),
        ("1969-07-20", Gender::Female),
        ("2026-10-16", Gender::Other),
    ] {
        let schedule = compute_schedule(&profile(dob, gender)).unwrap();
        let first = &schedule[0];
        assert_eq!(first.name, "Garbhadhana");
        assert_eq!(first.computed_date, ASTROLOGER_PLACEHOLDER);
        assert_eq!(first.computed_age_label, "Before birth");
        assert!(NaiveDate::parse_from_str(&first.computed_date, "%B %d, %Y").is_err());
    }
}

// ============================================================================
// 6. Leap-day births clamp to February 28
// ============================================================================

#[test]
fn test_leap_day_chudakarana() {
    let schedule = compute_schedule(&profile("2000-02-29", Gender::Male)).unwrap();
    assert_eq!(entry(&schedule, "Chudakarana").computed_date, "February 28, 2003");
    assert_eq!(entry(&schedule, "Karnavedha").computed_date, "February 28, 2003");
}

// ============================================================================
// 7. Pre-birth ceremonies precede the birth date
// ============================================================================

#[test]
fn test_pregnancy_ceremonies_before_birth() {
    let schedule = compute_schedule(&profile("2000-01-15", Gender::Female)).unwrap();

    let pumsavana = entry(&schedule, "Pumsavana");
    assert_eq!(pumsavana.computed_date, "July 15, 1999");
    assert_eq!(pumsavana.computed_age_label, "During pregnancy");

    let simantonnayana = entry(&schedule, "Simantonnayana");
    assert_eq!(simantonnayana.computed_date, "November 15, 1999");
    assert_eq!(simantonnayana.computed_age_label, "During pregnancy");
}

// ============================================================================
// 8. Raw form input
// ============================================================================

#[test]
fn test_schedule_from_form_json() {
    let input: ProfileInput = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","gender":"female","dob":"2000-01-15"}"#,
    )
    .unwrap();
    let p = PersonProfile::try_from(input).unwrap();
    let schedule = compute_schedule(&p).unwrap();
    assert_eq!(entry(&schedule, "Vivaha").computed_date, "January 15, 2022");
}

#[test]
fn test_unrecognized_gender_fails_before_computing() {
    let input: ProfileInput = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","gender":"unspecified","dob":"2000-01-15"}"#,
    )
    .unwrap();
    let err = PersonProfile::try_from(input).unwrap_err();
    assert!(matches!(err, Error::InvalidProfile(_)));
    assert!(err.to_string().contains("unspecified"));
}

#[test]
fn test_missing_birth_date_fails() {
    let input: ProfileInput =
        serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com","gender":"male"}"#).unwrap();
    assert!(matches!(PersonProfile::try_from(input), Err(Error::InvalidProfile(_))));
}

// ============================================================================
// 9. Concurrent calls don't interfere
// ============================================================================

#[test]
fn test_concurrent_calls_match_sequential() {
    let profiles: Vec<PersonProfile> = (0..32)
        .map(|i| {
            let gender = [Gender::Male, Gender::Female, Gender::Other][i % 3];
            let dob = NaiveDate::from_ymd_opt(1900 + (i as i32) * 3, (i as u32 % 12) + 1, 28).unwrap();
            PersonProfile::new(format!("p{i}"), "p@example.com", gender, dob)
        })
        .collect();

    let expected: Vec<Vec<SanskarResult>> =
        profiles.iter().map(|p| compute_schedule(p).unwrap()).collect();

    let actual: Vec<Vec<SanskarResult>> = std::thread::scope(|s| {
        let handles: Vec<_> = profiles
            .iter()
            .map(|p| s.spawn(move || compute_schedule(p).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(actual, expected);
}
