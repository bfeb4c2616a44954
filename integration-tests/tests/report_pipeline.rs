use integration_tests::{TestEnv, access_line};
use logsift_core::pipeline::{PipelineError, RunOutcome};
use pretty_assertions::assert_eq;

#[test]
fn gzipped_log_renders_a_ranked_report() {
    // Arrange
    let env = TestEnv::new();
    env.write_gz_log(
        "30062017",
        &[
            access_line("/api/v2/banner/25019354", 0.5),
            access_line("/api/v2/banner/25019354", 0.5),
            access_line("/api/1/photogenic_banners/list/?server_name=WIN7RB4", 2.0),
        ],
    );

    // Act
    let outcome = env.run().unwrap();

    // Assert
    assert_eq!(
        outcome,
        RunOutcome::Reported {
            path: env.report_path("30062017"),
            rows: 2,
            parse_errors: 0,
        }
    );

    let rows = env.report_rows("30062017");
    assert_eq!(rows.len(), 2);
    // 2.0 of 3.0 total seconds ranks the photogenic banner first.
    assert_eq!(
        rows[0]["url"],
        "/api/1/photogenic_banners/list/?server_name=WIN7RB4"
    );
    assert_eq!(rows[0]["count"], 1);
    assert_eq!(rows[0]["time_perc"], 0.667);
    assert_eq!(rows[0]["time_med"], 1.0);

    assert_eq!(rows[1]["url"], "/api/v2/banner/25019354");
    assert_eq!(rows[1]["count"], 2);
    assert_eq!(rows[1]["count_perc"], 0.667);
    assert_eq!(rows[1]["time_sum"], 1.0);
    assert_eq!(rows[1]["time_med"], 0.5);
}

#[test]
fn the_newest_log_wins_and_reruns_change_nothing() {
    // Arrange
    let env = TestEnv::new();
    env.write_log("29062017", &[access_line("/stale", 9.0)]);
    env.write_gz_log("30062017", &[access_line("/fresh", 1.0)]);

    // Act
    let first = env.run().unwrap();
    let second = env.run().unwrap();

    // Assert: the plain 29062017 file loses to the lexicographically
    // greater gzipped one, and the second run leaves its artifact alone.
    assert_eq!(
        first,
        RunOutcome::Reported {
            path: env.report_path("30062017"),
            rows: 1,
            parse_errors: 0,
        }
    );
    assert_eq!(
        second,
        RunOutcome::AlreadyReported {
            path: env.report_path("30062017"),
        }
    );

    let rows = env.report_rows("30062017");
    assert_eq!(rows[0]["url"], "/fresh");
    assert!(!env.report_path("29062017").exists());
}

#[test]
fn shares_and_counts_are_conserved_across_many_paths() {
    // Arrange
    let env = TestEnv::new();
    let mut lines = Vec::new();
    for i in 0..200 {
        let path = format!("/api/v2/slot/{}", i % 40);
        lines.push(access_line(&path, 0.01 * (i + 1) as f64));
    }
    env.write_log("30062017", &lines);

    // Act
    let outcome = env.run().unwrap();

    // Assert
    let RunOutcome::Reported { rows, .. } = outcome else {
        panic!("run did not report: {:?}", outcome);
    };
    assert_eq!(rows, 40);

    let rows = env.report_rows("30062017");
    let count_total: i64 = rows.iter().map(|r| r["count"].as_i64().unwrap()).sum();
    assert_eq!(count_total, 200);

    let count_perc_total: f64 = rows.iter().map(|r| r["count_perc"].as_f64().unwrap()).sum();
    let time_perc_total: f64 = rows.iter().map(|r| r["time_perc"].as_f64().unwrap()).sum();
    assert!((count_perc_total - 1.0).abs() < 0.05, "{count_perc_total}");
    assert!((time_perc_total - 1.0).abs() < 0.05, "{time_perc_total}");

    let time_sum_total: f64 = rows.iter().map(|r| r["time_sum"].as_f64().unwrap()).sum();
    let expected: f64 = (1..=200).map(|i| 0.01 * i as f64).sum();
    assert!((time_sum_total - expected).abs() < 0.05, "{time_sum_total}");
}

#[test]
fn a_garbage_heavy_log_is_refused() {
    // Arrange: 5 unparsable lines against 10 distinct paths.
    let mut env = TestEnv::new();
    env.config.error_max_ratio = 0.4;

    let mut lines: Vec<String> = (0..10)
        .map(|i| access_line(&format!("/api/v2/slot/{i}"), 0.3))
        .collect();
    lines.extend((0..5).map(|i| format!("binary junk {i}")));
    env.write_log("30062017", &lines);

    // Act
    let err = env.run().unwrap_err();

    // Assert
    assert!(matches!(err, PipelineError::QualityGate { .. }));
    assert!(!env.report_path("30062017").exists());
}

#[test]
fn sporadic_garbage_is_tolerated() {
    // Arrange: the same layout with 3 bad lines stays under the limit.
    let mut env = TestEnv::new();
    env.config.error_max_ratio = 0.4;

    let mut lines: Vec<String> = (0..10)
        .map(|i| access_line(&format!("/api/v2/slot/{i}"), 0.3))
        .collect();
    lines.extend((0..3).map(|i| format!("binary junk {i}")));
    env.write_log("30062017", &lines);

    // Act
    let outcome = env.run().unwrap();

    // Assert
    let RunOutcome::Reported {
        rows, parse_errors, ..
    } = outcome
    else {
        panic!("run did not report: {:?}", outcome);
    };
    assert_eq!(rows, 10);
    assert_eq!(parse_errors, 3);
}

#[test]
fn an_empty_log_dir_reports_nothing() {
    // Arrange
    let env = TestEnv::new();

    // Act
    let outcome = env.run().unwrap();

    // Assert
    assert_eq!(outcome, RunOutcome::NoLogFile);
    assert!(!env.config.report_dir.exists());
}
