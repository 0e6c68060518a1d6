use predicates::str::contains;

mod common;
use common::{count_segments, ft, seed_simple_day, setup_test_db};

const VEH: &str = "HXA9626";
const DAY: &str = "2020-04-01";

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    ft().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // All three tables must exist.
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in ["samples", "daily_summary", "segments"] {
        let found: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .ok();
        assert_eq!(found.as_deref(), Some(table));
    }
}

#[test]
fn test_process_persists_segments() {
    let db_path = setup_test_db("process_basic");
    seed_simple_day(&db_path, VEH, DAY);

    ft().args(["--db", &db_path, "--test", "process", VEH, DAY])
        .assert()
        .success()
        .stdout(contains("1 trips"));

    assert_eq!(count_segments(&db_path, VEH, DAY), 1);

    ft().args(["--db", &db_path, "--test", "list", VEH, DAY])
        .assert()
        .success()
        .stdout(contains("WAITING"))
        .stdout(contains("2020-04-01 08:05:00"))
        .stdout(contains("2020-04-01 08:14:00"));
}

#[test]
fn test_rerun_truncates_by_default() {
    let db_path = setup_test_db("process_rerun");
    seed_simple_day(&db_path, VEH, DAY);

    ft().args(["--db", &db_path, "--test", "process", VEH, DAY])
        .assert()
        .success();
    ft().args(["--db", &db_path, "--test", "process", VEH, DAY])
        .assert()
        .success();

    assert_eq!(count_segments(&db_path, VEH, DAY), 1);
}

#[test]
fn test_keep_appends_duplicate_rows() {
    // The sink is append-only: skipping the truncate duplicates rows.
    let db_path = setup_test_db("process_keep");
    seed_simple_day(&db_path, VEH, DAY);

    ft().args(["--db", &db_path, "--test", "process", VEH, DAY])
        .assert()
        .success();
    ft().args(["--db", &db_path, "--test", "process", VEH, DAY, "--keep"])
        .assert()
        .success();

    assert_eq!(count_segments(&db_path, VEH, DAY), 2);
}

#[test]
fn test_missing_daily_summary_is_fatal() {
    let db_path = setup_test_db("process_no_summary");
    seed_simple_day(&db_path, VEH, DAY);

    // Samples exist for the day but no summary row does.
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute("DELETE FROM daily_summary", [])
        .expect("clear summary");

    ft().args(["--db", &db_path, "--test", "process", VEH, DAY])
        .assert()
        .failure()
        .stderr(contains("No daily summary row"));
}

#[test]
fn test_day_without_samples_is_skipped() {
    let db_path = setup_test_db("process_empty_day");
    seed_simple_day(&db_path, VEH, DAY);

    ft().args(["--db", &db_path, "--test", "process", VEH, "2020-04-02"])
        .assert()
        .success()
        .stdout(contains("No samples"));

    assert_eq!(count_segments(&db_path, VEH, "2020-04-02"), 0);
}

#[test]
fn test_process_date_range() {
    let db_path = setup_test_db("process_range");
    seed_simple_day(&db_path, VEH, DAY);
    seed_simple_day(&db_path, VEH, "2020-04-02");

    ft().args([
        "--db",
        &db_path,
        "--test",
        "process",
        VEH,
        DAY,
        "--to",
        "2020-04-02",
    ])
    .assert()
    .success();

    assert_eq!(count_segments(&db_path, VEH, DAY), 1);
    assert_eq!(count_segments(&db_path, VEH, "2020-04-02"), 1);
}

#[test]
fn test_list_json_output() {
    let db_path = setup_test_db("list_json");
    seed_simple_day(&db_path, VEH, DAY);

    ft().args(["--db", &db_path, "--test", "process", VEH, DAY])
        .assert()
        .success();

    let out = ft()
        .args(["--db", &db_path, "--test", "list", VEH, DAY, "--json"])
        .output()
        .expect("run list --json");
    assert!(out.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("list --json must emit valid JSON");
    let rows = parsed.as_array().expect("JSON output is an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["label"], "Waiting");
    assert_eq!(rows[0]["vehicle_id"], VEH);
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("bad_date");

    ft().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ft().args(["--db", &db_path, "--test", "process", VEH, "01/04/2020"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
