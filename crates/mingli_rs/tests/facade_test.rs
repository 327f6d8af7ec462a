//! JSON shape checks over the facade outputs.

use mingli_rs::{BirthInput, DivinationInput, bazi_chart, cast_hexagram, ziwei_chart};
use mingli_yijing::SeededSource;
use serde_json::Value;

fn birth_json(json: &str) -> BirthInput {
    serde_json::from_str(json).unwrap()
}

#[test]
fn bazi_report_serializes_to_expected_tree() {
    let input = birth_json(
        r#"{"birthDate":"1990-01-15","birthTime":"14:30","gender":"male","longitude":116.4,"latitude":39.9}"#,
    );
    let report = bazi_chart(&input).unwrap();
    let v: Value = serde_json::to_value(&report).unwrap();

    let chart = &v["chart"];
    for pillar in ["year", "month", "day", "hour"] {
        assert!(chart[pillar].is_object(), "missing {pillar} pillar");
    }
    assert!(chart["day_master"].is_string());

    let strength = &v["strength"];
    assert_eq!(strength["percentages"].as_array().unwrap().len(), 5);
    let sum: i64 = strength["percentages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_i64().unwrap())
        .sum();
    assert!((95..=105).contains(&sum));

    assert_eq!(v["decade_luck"].as_array().unwrap().len(), 8);
}

#[test]
fn ziwei_chart_serializes_palaces_and_stars() {
    let input = birth_json(r#"{"birthDate":"1990-01-15","birthTime":"14:30","gender":"female"}"#);
    let chart = ziwei_chart(&input).unwrap();
    let v: Value = serde_json::to_value(&chart).unwrap();

    let palaces = v["palaces"].as_array().unwrap();
    assert_eq!(palaces.len(), 12);
    let main_total: usize = palaces
        .iter()
        .map(|p| p["main_stars"].as_array().unwrap().len())
        .sum();
    assert_eq!(main_total, 14);
    assert!(v["ming_gong"].as_u64().unwrap() < 12);
    assert_eq!(v["major_periods"].as_array().unwrap().len(), 12);
}

#[test]
fn divination_report_carries_three_hexagrams() {
    let input: DivinationInput = serde_json::from_str(
        r#"{"question":"今年换工作合适吗？","userId":"u1","divinationMethod":"time","localTime":"2024-02-04 16:27"}"#,
    )
    .unwrap();
    let report = cast_hexagram(&input, &SeededSource::new(17)).unwrap();
    let v: Value = serde_json::to_value(&report).unwrap();

    assert_eq!(v["method"], "time");
    for key in ["primary", "changed", "mutual"] {
        let h = &v[key];
        let n = h["number"].as_u64().unwrap();
        assert!((1..=64).contains(&n), "{key} number {n}");
        assert!(h["name"].is_string());
    }
    // Derived hexagrams carry no changing lines of their own.
    assert_eq!(v["changed"]["changing"].as_array().unwrap().len(), 0);
}

#[test]
fn identical_requests_reproduce_with_seeded_source() {
    let input: DivinationInput = serde_json::from_str(
        r#"{"question":"婚姻何时有着落？","userId":"u2","localTime":"1990-01-15T14:30"}"#,
    )
    .unwrap();
    let a = cast_hexagram(&input, &SeededSource::new(5)).unwrap();
    let b = cast_hexagram(&input, &SeededSource::new(5)).unwrap();
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[test]
fn charts_resolve_across_the_full_date_range() {
    // Both edges of the supported range, including a January birth that
    // needs the previous year's term table.
    let first = birth_json(r#"{"birthDate":"1800-01-15","birthTime":"10:00","gender":"male"}"#);
    assert!(bazi_chart(&first).is_ok());
    let last = birth_json(r#"{"birthDate":"2100-06-01","birthTime":"08:30","gender":"female"}"#);
    let report = bazi_chart(&last).unwrap();
    assert_eq!(report.decade_luck.unwrap().len(), 8);
    assert!(ziwei_chart(&last).is_ok());
}

#[test]
fn malformed_inputs_fail_fast() {
    assert!(bazi_chart(&birth_json(r#"{"birthDate":"1990-13-01"}"#)).is_err());
    assert!(bazi_chart(&birth_json(r#"{"birthDate":"1700-01-01"}"#)).is_err());
    let bad_clock: DivinationInput = serde_json::from_str(
        r#"{"question":"今年财运如何？","localTime":"2024-02-04 25:00"}"#,
    )
    .unwrap();
    assert!(cast_hexagram(&bad_clock, &SeededSource::new(1)).is_err());
}
