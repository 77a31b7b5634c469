use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::tempdir;
use triage_core::config::{AppConfig, DirectoryConfig, LoggingConfig};
use triage_core::models::{SeverityTier, Urgency};
use triage_core::solutions::{FALLBACK_CHECKLIST, PROFESSIONAL_ADVICE};
use triage_core::{TriageEngine, TriageError};

#[test]
fn brake_failure_is_critical_and_lists_car_technicians() {
    let engine = TriageEngine::default();
    let result = engine
        .evaluate("car", "brake failure on highway", "Austin, TX")
        .unwrap();

    assert_eq!(result.verdict.severity, SeverityTier::Critical);
    assert!(result.verdict.needs_professional);
    assert_eq!(result.verdict.urgency, Urgency::Immediate);
    assert_eq!(result.verdict.confidence, 0.9);
    assert_eq!(result.price.estimated_min, 424);
    assert_eq!(result.price.estimated_max, 1696);
    assert_eq!(result.solutions, PROFESSIONAL_ADVICE);
    let names: Vec<&str> = result.technicians.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["John Smith", "Mike Wilson", "David Garcia"]);
}

#[test]
fn clogged_filter_is_diy_without_technicians() {
    let engine = TriageEngine::default();
    let result = engine
        .evaluate("washing_machine", "clogged lint filter", "Reno, NV")
        .unwrap();

    assert_eq!(result.verdict.severity, SeverityTier::Simple);
    assert!(!result.verdict.needs_professional);
    assert_eq!(result.verdict.urgency, Urgency::WhenConvenient);
    assert_eq!(
        result.solutions,
        vec![
            "Clean the lint filter and drain hose",
            "Check if the machine is level",
            "Clean detergent dispenser",
            "Run a cleaning cycle with vinegar",
        ]
    );
    assert!(result.technicians.is_empty());
    assert_eq!(result.price.estimated_min, 25);
    assert_eq!(result.price.estimated_max, 83);
}

#[test]
fn unrecognized_category_falls_back_without_failing() {
    let engine = TriageEngine::default();
    let result = engine.evaluate("bicycle", "squeaking", "X").unwrap();

    assert_eq!(result.verdict.severity, SeverityTier::Simple);
    // priced from the car row: 50..200 at factor 0.818
    assert_eq!(result.price.estimated_min, 40);
    assert_eq!(result.price.estimated_max, 163);
    assert_eq!(result.solutions, FALLBACK_CHECKLIST);
    assert!(result.technicians.is_empty());
}

#[test]
fn empty_description_names_the_field() {
    let engine = TriageEngine::default();
    let err = engine.evaluate("car", "", "Austin, TX").unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("description"));
}

#[test]
fn repeated_evaluation_differs_only_in_timestamp() {
    let engine = TriageEngine::default();
    let first = engine
        .evaluate("refrigerator", "compressor clicking", "Austin, TX")
        .unwrap();
    let mut second = engine
        .evaluate("refrigerator", "compressor clicking", "Austin, TX")
        .unwrap();
    second.generated_at = first.generated_at;
    assert_eq!(first, second);
}

#[test]
fn result_serializes_with_wire_field_names() {
    let engine = TriageEngine::default();
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let result = engine
        .evaluate_at("Dishwasher", "pump failure after cycle", "Austin, TX", at)
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["analysis"]["severity"], "professional");
    assert_eq!(json["analysis"]["urgency"], "within_24h");
    assert_eq!(json["price_estimate"]["currency"], "USD");
    assert_eq!(json["timestamp"], "2024-05-01T12:00:00Z");
    let worker = &json["workers"][0];
    assert_eq!(worker["name"], "Sarah Johnson");
    assert_eq!(worker["reviews"], 87);
    assert_eq!(
        worker["specialties"],
        serde_json::json!(["washing_machine", "dishwasher", "refrigerator"])
    );
}

#[test]
fn engine_uses_configured_roster() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.toml");
    fs::write(
        &roster,
        r#"
        [[technicians]]
        id = 10
        name = "Near"
        specialties = ["car"]
        rating = 4.0
        reviews = 3
        distance = 1.0
        phone = "+1-555-0110"
        available = true

        [[technicians]]
        id = 11
        name = "Far"
        specialties = ["car"]
        rating = 5.0
        reviews = 40
        distance = 30.0
        phone = "+1-555-0111"
        available = true
        "#,
    )
    .unwrap();

    let cfg = AppConfig {
        directory: DirectoryConfig {
            roster_path: Some(roster.to_string_lossy().into_owned()),
            max_distance: 50.0,
            max_results: 5,
        },
        logging: LoggingConfig::default(),
    };
    let engine = TriageEngine::from_config(&cfg).unwrap();
    let result = engine.evaluate("car", "smoke from hood", "Austin, TX").unwrap();
    let ids: Vec<u32> = result.technicians.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![11, 10]);

    let near_only = engine.search_technicians("car", "Austin, TX", Some(10.0));
    assert_eq!(near_only.len(), 1);
}

#[test]
fn configured_result_cap_never_exceeds_five() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.toml");
    let mut content = String::new();
    for id in 1..=7 {
        content.push_str(&format!(
            "[[technicians]]\nid = {id}\nname = \"Tech {id}\"\nspecialties = [\"car\"]\n\
             rating = 4.0\nreviews = 1\ndistance = 1.0\nphone = \"+1-555-01{id:02}\"\n\
             available = true\n\n"
        ));
    }
    fs::write(&roster, content).unwrap();

    let cfg = AppConfig {
        directory: DirectoryConfig {
            roster_path: Some(roster.to_string_lossy().into_owned()),
            max_distance: 10.0,
            max_results: 9,
        },
        logging: LoggingConfig::default(),
    };
    let engine = TriageEngine::from_config(&cfg).unwrap();
    let found = engine.search_technicians("car", "Austin, TX", None);
    let ids: Vec<u32> = found.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let result = engine.evaluate("car", "smoke from hood", "Austin, TX").unwrap();
    assert_eq!(result.technicians.len(), 5);
}

#[test]
fn invalid_roster_file_is_rejected() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.toml");
    fs::write(&roster, "[[technicians]]\nid = \"not a number\"\n").unwrap();
    let cfg = AppConfig {
        directory: DirectoryConfig {
            roster_path: Some(roster.to_string_lossy().into_owned()),
            ..DirectoryConfig::default()
        },
        ..AppConfig::default()
    };
    let err = TriageEngine::from_config(&cfg).unwrap_err();
    assert!(matches!(err, TriageError::Toml(_)));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = TriageEngine::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.evaluate("car", "gas leak", "Austin, TX").unwrap())
        })
        .collect();
    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.verdict.severity, SeverityTier::Critical);
    }
}
