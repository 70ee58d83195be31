use assert_cmd::Command;
use predicates::prelude::*;

fn design() -> Command {
    Command::cargo_bin("design").expect("design binary")
}

#[test]
fn prints_designs_for_a_feasible_mission() {
    design()
        .args(["1000", "10", "3000:0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-stage design"))
        .stdout(predicate::str::contains("[best]"));
}

#[test]
fn reports_no_solution_without_failing() {
    design()
        .args(["1000000", "100", "9000:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No design satisfies"));
}

#[test]
fn rejects_malformed_requirement_tuples() {
    design()
        .args(["1000", "10", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deltav:pressure"));
}

#[test]
fn rejects_non_positive_payload() {
    design()
        .args(["0", "10", "3000:0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("payload"));
}

#[test]
fn keep_returns_a_superset_of_the_filtered_result() {
    let filtered = design()
        .args(["1000", "8", "2200:0", "1200:1"])
        .output()
        .expect("run filtered");
    let kept = design()
        .args(["1000", "8", "2200:0", "1200:1", "--keep"])
        .output()
        .expect("run kept");

    assert!(filtered.status.success());
    assert!(kept.status.success());

    let count = |out: &[u8]| {
        String::from_utf8_lossy(out)
            .lines()
            .filter(|l| l.contains("-stage design"))
            .count()
    };
    let filtered_count = count(&filtered.stdout);
    let kept_count = count(&kept.stdout);
    assert!(filtered_count >= 1);
    assert!(
        kept_count >= filtered_count,
        "--keep returned {} designs, filtered returned {}",
        kept_count,
        filtered_count
    );
}

#[test]
fn preferred_size_restricts_reported_parts() {
    design()
        .args(["200", "5", "1000:0", "-S", "tiny", "--keep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(tiny)"))
        .stdout(predicate::str::contains("(small)").not());
}

#[test]
fn exports_csv_table_and_json_sidecar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("designs.csv");

    design()
        .args(["1000", "10", "3000:0", "--export"])
        .arg(&csv_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).expect("csv written");
    assert!(csv.starts_with("design,stage_count,total_mass_kg"));
    assert!(csv.lines().count() >= 2, "csv has no data rows:\n{}", csv);

    let json_path = dir.path().join("designs.json");
    let json = std::fs::read_to_string(&json_path).expect("json sidecar written");
    assert!(json.contains("total_mass_kg"));
}

#[test]
fn loads_a_custom_catalog_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yaml");
    std::fs::write(
        &path,
        r#"
engines:
  - name: Sole Engine
    dry_mass_kg: 500
    thrust_n: 100000
    isp_vac_s: 330
    isp_atm_s: 280
    size: small
    gimbal_deg: 2
    cost: 900
tanks:
  - name: Sole Tank
    dry_mass_kg: 500
    propellant_kg: 4000
    size: small
    cost: 800
"#,
    )
    .expect("write catalog");

    design()
        .args(["1000", "5", "2000:0", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sole Engine"));
}
