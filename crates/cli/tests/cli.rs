use assert_cmd::Command;
use predicates::prelude::*;

fn fibcache() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fibcache"));
    cmd.args(["--log-level", "off"]);
    cmd
}

#[test]
fn compute_default_strategy() {
    fibcache().args(["compute", "20"]).assert().success().stdout("6765\n");
}

#[test]
fn compute_each_strategy() {
    for strategy in ["memoized", "iterative", "recursive"] {
        fibcache().args(["compute", "10", "--strategy", strategy]).assert().success().stdout("55\n");
    }
}

#[test]
fn compute_largest_cached_index() {
    fibcache().args(["compute", "99"]).assert().success().stdout("218922995834555169026\n");
}

#[test]
fn compute_out_of_range_fails() {
    fibcache()
        .args(["compute", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("index out of range: n=100, capacity=100"));
}

#[test]
fn huge_capacity_is_accepted() {
    fibcache()
        .args(["compute", "5", "--capacity", "18446744073709551615"])
        .assert()
        .success()
        .stdout("5\n");

    fibcache()
        .args(["compute", "300000", "--capacity", "400000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("integer overflow"));
}

#[test]
fn recursive_strategy_is_limited() {
    fibcache().args(["compute", "25", "-s", "recursive"]).assert().success().stdout("75025\n");

    fibcache()
        .args(["compute", "186", "-s", "recursive"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("only accepts n <= 40"));
}

#[test]
fn iterative_overflow_fails() {
    fibcache()
        .args(["compute", "187", "-s", "iterative"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("integer overflow"));
}

#[test]
fn unknown_strategy_is_rejected() {
    fibcache()
        .args(["compute", "5", "--strategy", "binet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy: binet"));
}

#[test]
fn compare_table() {
    fibcache()
        .args(["compare", "--upto", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("144").and(predicate::str::contains("MISMATCH").not()));
}

#[test]
fn compare_json() {
    let output = fibcache().args(["compare", "--upto", "2", "--json"]).output().expect("run fibcache");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            r#"{"n":0,"memoized":0,"iterative":0,"matches":true}"#,
            r#"{"n":1,"memoized":1,"iterative":1,"matches":true}"#,
            r#"{"n":2,"memoized":1,"iterative":1,"matches":true}"#,
        ]
    );
}

#[test]
fn compare_beyond_capacity_fails() {
    fibcache().args(["compare", "--upto", "20", "--capacity", "10"]).assert().failure();
}
