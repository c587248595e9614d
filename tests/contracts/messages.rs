//! Contracts: rendered status and outcome messages.

use pxf_cluster::domain::ports::HostFailure;
use pxf_cluster::domain::services::{outcome_report, status_report};
use pxf_cluster::{descriptor, ExecutionReport, Operation};

#[test]
fn contract_status_messages() {
    insta::assert_snapshot!(status_report(descriptor(Operation::Start), 2, true), @"Starting PXF on coordinator host, standby coordinator host, and 2 segment hosts...");
    insta::assert_snapshot!(status_report(descriptor(Operation::Status), 1, false), @"Checking status of PXF servers on coordinator host and 1 segment host...");
    insta::assert_snapshot!(status_report(descriptor(Operation::Sync), 2, true), @"Syncing PXF configuration files from coordinator host to standby coordinator host and 2 segment hosts...");
    insta::assert_snapshot!(status_report(descriptor(Operation::Sync), 3, false), @"Syncing PXF configuration files from coordinator host to 3 segment hosts...");
    insta::assert_snapshot!(status_report(descriptor(Operation::Reload), 2, false), @"PXF is reloading profiles on coordinator host and 2 segment hosts...");
}

#[test]
fn contract_deprecated_operations_announce_deprecation() {
    for op in [Operation::Init, Operation::Reset] {
        let status = status_report(descriptor(op), 2, false);
        assert!(status.contains("DEPRECATION NOTICE"), "{op}");
        assert!(
            status.ends_with("PXF on coordinator host and 2 segment hosts..."),
            "{status}"
        );
    }
}

#[test]
fn contract_success_message() {
    let report = ExecutionReport::all_succeeded(4);
    insta::assert_snapshot!(outcome_report(descriptor(Operation::Restart), &report), @"PXF restarted successfully on 4 out of 4 hosts");
}

#[test]
fn contract_error_message_lists_failed_hosts() {
    let report = ExecutionReport {
        total: 3,
        failures: vec![HostFailure {
            host: "sdw2".to_string(),
            reason: "connection refused".to_string(),
        }],
    };

    assert_eq!(
        outcome_report(descriptor(Operation::Stop), &report),
        "ERROR: PXF failed to stop on 1 out of 3 hosts\nsdw2 ==> connection refused"
    );
}
