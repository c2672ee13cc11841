use assert_cmd::Command;
use predicates::prelude::*;

fn springboard() -> Command {
    Command::cargo_bin("springboard").unwrap()
}

#[test]
fn test_cli_factorial() {
    springboard()
        .arg("factorial")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("10! = 3628800"));
}

#[test]
fn test_cli_factorial_cps_with_stats() {
    springboard()
        .arg("factorial")
        .arg("10")
        .arg("--cps")
        .arg("--stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("factorial (cps)"))
        .stdout(predicate::str::contains("3628800"))
        .stdout(predicate::str::contains("Thunks forced"))
        .stdout(predicate::str::contains("19"));
}

#[test]
fn test_cli_large_factorial() {
    springboard()
        .arg("factorial")
        .arg("5000")
        .assert()
        .success()
        .stdout(predicate::str::contains("factorial: 5000! = 4228577926"));
}

#[test]
fn test_cli_linear_search() {
    springboard()
        .args(["search", "3", "5", "3", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linear search: 3 found"));

    springboard()
        .args(["search", "4", "5", "3", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 not found"));
}

#[test]
fn test_cli_binary_search_with_negative_values() {
    springboard()
        .args(["search", "--binary", "-2", "-5", "-2", "0", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary search: -2 found"));
}

#[test]
fn test_cli_binary_search_rejects_unsorted_values() {
    springboard()
        .args(["search", "--binary", "1", "3", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ascending order"));
}

#[test]
fn test_cli_tree_size_strategies() {
    springboard()
        .args(["tree-size", "--levels", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tree size (fully-thunked)"))
        .stdout(predicate::str::contains("31 nodes"));

    springboard()
        .args(["tree-size", "--levels", "5", "--strategy", "asymmetric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tree size (asymmetric)"))
        .stdout(predicate::str::contains("31 nodes"));
}

#[test]
fn test_cli_tree_size_deep_right_spine_by_default() {
    springboard()
        .args(["tree-size", "--right-spine", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("200001 nodes"));
}

#[test]
fn test_cli_tree_size_rejects_deep_right_spine_for_asymmetric() {
    springboard()
        .args([
            "tree-size",
            "--right-spine",
            "100000",
            "--strategy",
            "asymmetric",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("--strategy fully-thunked"));

    springboard()
        .args(["tree-size", "--right-spine", "1000", "--strategy", "asymmetric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2001 nodes"));
}

#[test]
fn test_cli_tree_size_step_limit_covers_asymmetric_runs() {
    springboard()
        .args([
            "--max-steps",
            "45",
            "tree-size",
            "--levels",
            "5",
            "--strategy",
            "asymmetric",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resource limit exceeded: max_steps"));

    springboard()
        .args([
            "--format",
            "json",
            "--stats",
            "tree-size",
            "--levels",
            "5",
            "--strategy",
            "asymmetric",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"steps\": 46"));
}

#[test]
fn test_cli_tree_size_unknown_strategy() {
    springboard()
        .args(["tree-size", "--levels", "3", "--strategy", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tree size strategy"));
}

#[test]
fn test_cli_tree_size_requires_a_shape() {
    springboard().arg("tree-size").assert().failure();
}

#[test]
fn test_cli_dedup() {
    springboard()
        .args(["dedup", "1", "1", "2", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 2, 3]"));

    springboard()
        .arg("dedup")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_cli_number() {
    springboard()
        .args(["number", "--levels", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root node2 covers leaves 1..=4"))
        .stdout(predicate::str::contains("leaf3"));
}

#[test]
fn test_cli_json_output() {
    springboard()
        .args(["--format", "json", "--stats", "factorial", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""algorithm": "factorial""#))
        .stdout(predicate::str::contains(r#""result": "5! = 120""#))
        .stdout(predicate::str::contains(r#""steps": 4"#));
}

#[test]
fn test_cli_json_output_omits_stats_by_default() {
    springboard()
        .args(["dedup", "4", "4", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""result": "[4]""#))
        .stdout(predicate::str::contains("stats").not());
}

#[test]
fn test_cli_step_limit() {
    springboard()
        .args(["--max-steps", "10", "factorial", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resource limit exceeded: max_steps"))
        .stderr(predicate::str::contains("Limit: 10"));
}

#[test]
fn test_cli_invalid_levels() {
    springboard()
        .args(["number", "--levels", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}
