//! Tests that drive the pizza-split binary with piped stdin.

mod support;
use support::harness::{stderr, stdout, TestHarness};

// ============================================================================
// INTERACTIVE RUN (PIPED)
// ============================================================================

#[test]
fn test_run_prints_bill() {
    let harness = TestHarness::new();
    let output = harness.run(&[], "12.50\n5\nA\n2\nB\n3\nfertig\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Wie viel kostet eine Pizza?"));
    assert!(out.contains("Pizzapreis: 12.50"));
    assert!(out.contains("A hat 2 Stueck Pizza gegessen. Zu zahlen sind 5.00."));
    assert!(out.contains("B hat 3 Stueck Pizza gegessen. Zu zahlen sind 7.50."));
}

#[test]
fn test_run_subcommand_is_default() {
    let harness = TestHarness::new();
    let output = harness.run(&["run"], "10\n2\nAlice\n1\nBob\n1\nfertig\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Bob hat 1 Stueck Pizza gegessen. Zu zahlen sind 5.00."));
}

#[test]
fn test_invalid_price_exits_without_further_prompts() {
    let harness = TestHarness::new();
    let output = harness.run(&[], "abc\n2\n");

    assert!(!output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Fehler: 'abc' ist keine gueltige Zahl."));
    assert!(!out.contains("Wie viele Stuecke von Pizza"));
}

#[test]
fn test_overconsumption_exits_without_bill() {
    let harness = TestHarness::new();
    let output = harness.run(&[], "10\n2\nA\n2\nB\n1\nfertig\n");

    assert!(!output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Fehler, Anzahl gegessenen Stuecke 3 groesser als gesamte Stuecke 2."));
    assert!(!out.contains("Zu zahlen"));
}

#[test]
fn test_every_failure_kind_shares_exit_status() {
    let harness = TestHarness::new();
    let codes: Vec<_> = ["abc\n", "100\n", "10\n2\nA\n3\nfertig\n"]
        .iter()
        .map(|stdin| harness.run(&[], stdin).status.code())
        .collect();

    assert_eq!(codes, vec![Some(1), Some(1), Some(1)]);
}

#[test]
fn test_quiet_mode_prints_only_bill_lines() {
    let harness = TestHarness::new();
    let output = harness.run(&["--quiet"], "10\n2\nAlice\n1\nBob\n1\nfertig\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.contains("Pizzapreis"));
    assert!(out.contains("Alice hat 1 Stueck Pizza gegessen. Zu zahlen sind 5.00."));
}

#[test]
fn test_json_mode_keeps_stdout_parseable() {
    let harness = TestHarness::new();
    let output = harness.run(&["--format", "json"], "12.50\n5\nA\n2\nB\n3\nfertig\n");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["bill"]["lines"][0]["amount_due"], "5.00");
    assert!(stderr(&output).contains("Wie viel kostet eine Pizza?"));
}

#[test]
fn test_json_mode_error() {
    let harness = TestHarness::new();
    let output = harness.run(&["--format", "json"], "10\n25\n");

    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["error"]["kind"], "out_of_range");
}

#[test]
fn test_invalid_utf8_input_is_reported_in_german() {
    let harness = TestHarness::new();

    let output = harness.run_bytes(&[], &[0xff, 0xfe, b'\n', b'5', b'\n']);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ist kein gueltiger Text."));
    assert!(!stderr(&output).contains("Error:"));

    let output = harness.run_bytes(&["--format", "json"], &[0xff, 0xfe, b'\n']);
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["error"]["kind"], "invalid_input");
}

// ============================================================================
// SPLIT COMMAND
// ============================================================================

#[test]
fn test_split_from_arguments() {
    let harness = TestHarness::new();
    let output = harness.run(
        &[
            "split", "--price", "12.50", "--pieces", "5", "--eater", "A=2", "--eater", "B=3",
        ],
        "",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(!out.contains("Wie viel kostet"));
    assert!(out.contains("B hat 3 Stueck Pizza gegessen. Zu zahlen sind 7.50."));
}

#[test]
fn test_split_rejects_out_of_range_pieces() {
    let harness = TestHarness::new();
    let output = harness.run(&["split", "--price", "10", "--pieces", "20"], "");

    assert!(!output.status.success());
    assert!(stdout(&output).contains("Fehler: Eine Pizza kann nicht so viele Stuecke haben."));
}

#[test]
fn test_split_rejects_malformed_eater() {
    let harness = TestHarness::new();
    let output = harness.run(
        &["split", "--price", "10", "--pieces", "2", "--eater", "Alice"],
        "",
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected NAME=COUNT"));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_config_file_sets_limits_and_sentinel() {
    let harness = TestHarness::new();
    let config = harness.write_config(
        "pizza.yaml",
        "limits:\n  max_price: 200\n  max_pieces: 32\nsentinel: done\n",
    );

    let output = harness.run(
        &["--config", config.to_str().unwrap()],
        "150\n30\nAlice\n30\ndone\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Alice hat 30 Stueck Pizza gegessen. Zu zahlen sind 150.00."));
}

#[test]
fn test_sentinel_flag_overrides_config() {
    let harness = TestHarness::new();
    let config = harness.write_config("pizza.md", "---\nsentinel: done\n---\n");

    let output = harness.run(
        &["--config", config.to_str().unwrap(), "--sentinel", "ende"],
        "10\n2\nAlice\n2\nende\n",
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("schreibe 'ende'"));
}

#[test]
fn test_missing_config_file() {
    let harness = TestHarness::new();
    let output = harness.run(&["--config", "nope.yaml"], "10\n2\nfertig\n");

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error:"));
    assert!(err.contains("nope.yaml"));
}

// ============================================================================
// UTILITIES
// ============================================================================

#[test]
fn test_version() {
    let harness = TestHarness::new();
    let output = harness.run(&["version"], "");

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("pizza-split "));
}

#[test]
fn test_version_verbose_includes_build_info() {
    let harness = TestHarness::new();
    let output = harness.run(&["-v", "version"], "");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("commit: "));
    assert!(out.contains("built: "));
}

#[test]
fn test_completion_bash() {
    let harness = TestHarness::new();
    let output = harness.run(&["completion", "bash"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("pizza-split"));
}
