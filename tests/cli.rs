#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("roulement-cli").unwrap()
}

#[test]
fn preview_prints_first_days() {
    cli()
        .args(["preview", "--year", "2025", "--month", "8", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2025-08-01 (Viernes): Ludy (Mañana) | Isaac (Tarde) | Genesis (Descanso)",
        ))
        .stdout(predicate::str::contains("2025-08-04").not());
}

#[test]
fn generate_writes_csv_and_calendars() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    cli()
        .args(["generate", "--start-date", "2025-08-25", "--days", "10", "--calendars"])
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("general_schedule.csv"));

    for file in [
        "general_schedule.csv",
        "ludy_schedule.csv",
        "isaac_schedule.csv",
        "genesis_schedule.csv",
        "calendar_2025_08.csv",
        "calendar_2025_09.csv",
        "calendar_genesis_2025_09.csv",
    ] {
        assert!(out.join(file).exists(), "{file} missing");
    }
    let general = fs::read_to_string(out.join("general_schedule.csv")).unwrap();
    assert_eq!(general.lines().count(), 11);
}

#[test]
fn generate_rejects_bad_input() {
    cli()
        .args(["generate", "--start-date", "2025-07-01", "--days", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("before reference date"));

    cli()
        .args(["generate", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));

    cli()
        .args(["generate", "--days", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));

    cli()
        .args(["generate", "--start-date", "2025-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date format"));
}

#[test]
fn month_rejects_out_of_range_year() {
    cli()
        .args(["month", "--year", "2031", "--month", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year must be between"));
}

#[test]
fn check_reference_team() {
    cli()
        .args(["check", "--days", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 400 day(s), 2 working each day"));
}

#[test]
fn check_reports_inconsistent_team_with_code_2() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.json");
    fs::write(
        &team,
        r#"{
            "reference_date": "2025-08-01",
            "cycle": {
                "blocks": [{"work_days": 3, "rest_days": 2}],
                "shifts": ["morning"]
            },
            "employees": [
                {"name": "A", "cycle_index": 0, "day_in_cycle": 1, "shift": "morning"},
                {"name": "B", "cycle_index": 0, "day_in_cycle": 1, "shift": "morning"}
            ]
        }"#,
    )
    .unwrap();

    cli()
        .arg("--team")
        .arg(&team)
        .args(["check", "--days", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("inconsistent schedule on 2025-08-01"));
}

#[test]
fn init_then_use_team_file() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.json");
    cli()
        .arg("init-team")
        .arg("--out")
        .arg(&team)
        .assert()
        .success();
    assert!(team.exists());

    cli()
        .arg("--team")
        .arg(&team)
        .args(["preview", "--year", "2025", "--month", "9", "--days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01 (Lunes)"));
}

#[test]
fn import_team_from_csv() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("team.csv");
    let out = dir.path().join("team.json");
    fs::write(
        &csv,
        "name,cycle_index,day_in_cycle,shift\nAna,3,4,morning\nBea,2,2,afternoon\nCruz,0,5,afternoon\n",
    )
    .unwrap();

    cli()
        .arg("import-team")
        .arg("--csv")
        .arg(&csv)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Team of 3"));

    cli()
        .arg("--team")
        .arg(&out)
        .args(["check", "--days", "42"])
        .assert()
        .success();
}
