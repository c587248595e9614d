//! Scenario: an administrator plans operations across a small cluster.

use crate::common::{args, TestEnv, FULL_PXF_ENV, TOPOLOGY_ARGS};

#[test]
fn start_prints_status_plan_and_outcome() {
    let env = TestEnv::new();
    let result = env.run(&args(TOPOLOGY_ARGS, &["start"]), FULL_PXF_ENV);

    assert!(result.success, "{}", result.combined_output());
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Starting PXF on coordinator host, standby coordinator host, and 2 segment hosts...",
            "[cdw] PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf start",
            "[scdw] PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf start",
            "[sdw1] PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf start",
            "[sdw2] PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf start",
            "PXF started successfully on 4 out of 4 hosts",
        ]
    );
}

#[test]
fn sync_runs_on_coordinator_for_every_other_host() {
    let env = TestEnv::new();
    let result = env.run(&args(TOPOLOGY_ARGS, &["sync", "--delete"]), FULL_PXF_ENV);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.starts_with(
        "Syncing PXF configuration files from coordinator host to standby coordinator host and 2 segment hosts..."
    ));

    let plan: Vec<&str> = result
        .stdout
        .lines()
        .filter(|l| l.starts_with('['))
        .collect();
    assert_eq!(plan.len(), 3);
    for (line, host) in plan.iter().zip(["scdw", "sdw1", "sdw2"]) {
        assert!(line.starts_with("[cdw] rsync -az --delete "), "{line}");
        assert!(line.ends_with(&format!("'{host}:/home/gpadmin/pxf'")), "{line}");
    }
    assert!(result
        .stdout
        .contains("PXF configs synced successfully on 3 out of 3 hosts"));
}

#[test]
fn missing_variable_stops_before_any_plan() {
    let env = TestEnv::new();
    let result = env.run(
        &args(TOPOLOGY_ARGS, &["start"]),
        &[("PXF_HOME", "/usr/local/pxf")],
    );

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty(), "{}", result.stdout);
    assert!(result.stderr.contains("PXF_BASE must be set"), "{}", result.stderr);
}

#[test]
fn prepare_conflict_is_reported() {
    let env = TestEnv::new();
    let result = env.run(
        &args(TOPOLOGY_ARGS, &["prepare"]),
        &[("PXF_HOME", "/usr/local/pxf"), ("PXF_BASE", "/usr/local/pxf")],
    );

    assert!(!result.success);
    assert!(result
        .stderr
        .contains("the PXF_BASE value must be different from your PXF installation directory"));
}

#[test]
fn missing_coordinator_is_an_error() {
    let env = TestEnv::new();
    let result = env.run(&["start"], FULL_PXF_ENV);

    assert!(!result.success);
    assert!(
        result.stderr.contains("no coordinator host configured"),
        "{}",
        result.stderr
    );
}

#[test]
fn json_output_is_ndjson_plan_then_summary() {
    let env = TestEnv::new();
    let result = env.run(&args(TOPOLOGY_ARGS, &["--json", "status"]), FULL_PXF_ENV);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();

    assert_eq!(events.len(), 5);
    for event in &events[..4] {
        assert_eq!(event["event"], "invocation");
        assert_eq!(event["target"], event["run_on"]);
    }
    let summary = &events[4];
    assert_eq!(summary["operation"], "status");
    assert_eq!(summary["report"]["total"], 4);
    assert_eq!(summary["outcome"], "PXF is running on 4 out of 4 hosts");
}
