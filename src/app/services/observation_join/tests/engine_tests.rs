//! Tests for joining rainfall with wind

use super::*;
use chrono::NaiveDate;

fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn test_join_matching_wind_record() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("466880X", "T1", "NOUL", "2024-10-01 00:00", "12.5")];
    let wind = vec![create_wind_record("466880", "2024-10-01 00:00", "15.2", "90")];

    let result = joiner.join(&rain, &wind);

    assert_eq!(result.observation_count(), 1);
    let obs = &result.observations.as_slice()[0];
    assert_eq!(obs.station_id, "466880");
    assert_eq!(obs.typhoon_id, "T1");
    assert_eq!(obs.typhoon_name, "NOUL");
    assert_eq!(obs.acc_precipitation, 12.5);
    assert_eq!(obs.max_wind_speed, 15.2);
    assert_eq!(obs.max_wind_direction, 90.0);
    assert_eq!(obs.timestamp, at(1, 0));
    assert_eq!(result.stats.matched, 1);
    assert_eq!(result.stats.unmatched_wind, 0);
}

#[test]
fn test_join_without_wind_defaults_to_zero() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("466880X", "T1", "NOUL", "2024-10-01 03:00", "4")];
    let wind = vec![create_wind_record("466880", "2024-10-01 00:00", "15.2", "90")];

    let result = joiner.join(&rain, &wind);

    let obs = &result.observations.as_slice()[0];
    assert_eq!(obs.max_wind_speed, 0.0);
    assert_eq!(obs.max_wind_direction, 0.0);
    assert_eq!(obs.timestamp, at(1, 3));
    // One diagnostic per unmatched rain record
    assert_eq!(result.stats.unmatched_wind, 1);
    assert_eq!(result.stats.matched, 0);
}

#[test]
fn test_join_requires_exact_timestamp_text() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1")];
    // Same instant, different spelling: no match
    let wind = vec![create_wind_record("466880", "2024-10-01 00:00:00", "15.2", "90")];

    let result = joiner.join(&rain, &wind);

    assert_eq!(result.stats.unmatched_wind, 1);
    assert_eq!(result.observations.as_slice()[0].max_wind_speed, 0.0);
}

#[test]
fn test_join_ignores_padding_around_wind_station_id() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1")];
    let wind = vec![create_wind_record(" 466880 ", "2024-10-01 00:00", "15.2", "90")];

    let result = joiner.join(&rain, &wind);

    assert_eq!(result.stats.matched, 1);
    assert_eq!(result.observations.as_slice()[0].max_wind_speed, 15.2);
}

#[test]
fn test_join_first_wind_record_wins() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1")];
    let wind = vec![
        create_wind_record("466880", "2024-10-01 00:00", "10", "45"),
        create_wind_record("466880", "2024-10-01 00:00", "20", "180"),
    ];

    let result = joiner.join(&rain, &wind);

    let obs = &result.observations.as_slice()[0];
    assert_eq!(obs.max_wind_speed, 10.0);
    assert_eq!(obs.max_wind_direction, 45.0);
}

#[test]
fn test_join_non_numeric_wind_reads_as_zero() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1")];
    let wind = vec![create_wind_record("466880", "2024-10-01 00:00", "X", "--")];

    let result = joiner.join(&rain, &wind);

    let obs = &result.observations.as_slice()[0];
    assert_eq!(obs.max_wind_speed, 0.0);
    assert_eq!(obs.max_wind_direction, 0.0);
    assert_eq!(result.stats.matched, 1);
}

#[test]
fn test_join_enriches_known_station() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("466920", "T1", "NOUL", "2024-10-01 00:00", "1")];

    let result = joiner.join(&rain, &[]);

    let obs = &result.observations.as_slice()[0];
    assert_eq!(obs.station_name(), Some("臺北"));
    assert_eq!(obs.latitude(), Some(25.0377));
    assert_eq!(obs.longitude(), Some(121.5149));
    assert_eq!(obs.county(), Some("臺北市"));
    assert_eq!(result.stats.unresolved_stations, 0);
}

#[test]
fn test_join_unknown_station_leaves_site_absent() {
    let joiner = create_test_joiner();
    let rain = vec![create_rain_record("C0Z999", "T1", "NOUL", "2024-10-01 00:00", "1")];

    let result = joiner.join(&rain, &[]);

    let obs = &result.observations.as_slice()[0];
    assert!(obs.site.is_none());
    assert_eq!(obs.station_name(), None);
    assert_eq!(obs.latitude(), None);
    assert_eq!(obs.longitude(), None);
    assert_eq!(obs.county(), None);
    assert_eq!(result.stats.unresolved_stations, 1);
}

#[test]
fn test_join_site_fields_all_or_nothing() {
    let joiner = create_test_joiner();
    let rain = vec![
        create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1"),
        create_rain_record("C0Z999", "T1", "NOUL", "2024-10-01 00:00", "1"),
        create_rain_record("466920A", "T1", "NOUL", "2024-10-01 01:00", "1"),
    ];

    let result = joiner.join(&rain, &[]);

    for obs in &result.observations {
        let known = joiner.registry().contains_station(&obs.station_id);
        assert_eq!(obs.station_name().is_some(), known);
        assert_eq!(obs.latitude().is_some(), known);
        assert_eq!(obs.longitude().is_some(), known);
        assert_eq!(obs.county().is_some(), known);
    }
}

#[test]
fn test_join_output_sorted_and_stable() {
    let joiner = create_test_joiner();
    let rain = vec![
        create_rain_record("466880", "T1", "NOUL", "2024-10-02 00:00", "3"),
        create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1"),
        create_rain_record("466920", "T1", "NOUL", "2024-10-02 00:00", "4"),
        create_rain_record("466920", "T1", "NOUL", "2024-10-01 12:00", "2"),
    ];

    let result = joiner.join(&rain, &[]);

    assert!(result.observations.is_sorted());
    let precipitation: Vec<f64> = result
        .observations
        .iter()
        .map(|o| o.acc_precipitation)
        .collect();
    // Equal timestamps keep rainfall-file order
    assert_eq!(precipitation, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_join_drops_unparseable_timestamp() {
    let joiner = create_test_joiner();
    let rain = vec![
        create_rain_record("466880", "T1", "NOUL", "soon", "1"),
        create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "2"),
    ];

    let result = joiner.join(&rain, &[]);

    assert_eq!(result.observation_count(), 1);
    assert_eq!(result.stats.unparseable_timestamps, 1);
    assert_eq!(result.stats.observations, 1);
}

#[test]
fn test_join_custom_prefix_length() {
    let joiner = ObservationJoiner::new(
        create_test_registry(),
        JoinConfig {
            station_id_prefix_len: 4,
        },
    );
    let rain = vec![create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1")];
    let wind = vec![create_wind_record("4668", "2024-10-01 00:00", "7", "270")];

    let result = joiner.join(&rain, &wind);

    let obs = &result.observations.as_slice()[0];
    assert_eq!(obs.station_id, "4668");
    assert_eq!(obs.max_wind_speed, 7.0);
    assert!(obs.site.is_none());
}

#[test]
fn test_join_stats_summary() {
    let joiner = create_test_joiner();
    let rain = vec![
        create_rain_record("466880", "T1", "NOUL", "2024-10-01 00:00", "1"),
        create_rain_record("466880", "T1", "NOUL", "2024-10-01 01:00", "1"),
    ];
    let wind = vec![create_wind_record("466880", "2024-10-01 00:00", "5", "0")];

    let result = joiner.join(&rain, &wind);

    assert_eq!(result.stats.match_rate(), 50.0);
    assert!(result.summary().contains("Matched: 50.0%"));
}
