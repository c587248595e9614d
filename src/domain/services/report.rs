//! Message rendering for status and outcome reports

use crate::domain::entities::CommandDescriptor;
use crate::domain::ports::ExecutionReport;
use crate::domain::value_objects::MessageKind;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn template(descriptor: &CommandDescriptor, kind: MessageKind) -> &'static str {
    descriptor.message(kind).unwrap_or_default()
}

/// Message printed before the operation fans out
pub fn status_report(descriptor: &CommandDescriptor, segments: usize, standby: bool) -> String {
    let standby_note = if standby {
        template(descriptor, MessageKind::Standby)
    } else {
        ""
    };

    template(descriptor, MessageKind::Status)
        .replace("{standby}", standby_note)
        .replace("{segments}", &segments.to_string())
        .replace("{s}", plural(segments))
}

/// Message printed once every host has answered
pub fn outcome_report(descriptor: &CommandDescriptor, report: &ExecutionReport) -> String {
    let total = report.total.to_string();

    if report.is_success() {
        return template(descriptor, MessageKind::Success)
            .replace("{ok}", &report.succeeded().to_string())
            .replace("{total}", &total)
            .replace("{s}", plural(report.total));
    }

    let mut message = String::from("ERROR: ");
    message.push_str(
        &template(descriptor, MessageKind::Error)
            .replace("{failed}", &report.failed().to_string())
            .replace("{total}", &total)
            .replace("{s}", plural(report.total)),
    );
    for failure in &report.failures {
        message.push_str(&format!("\n{} ==> {}", failure.host, failure.reason));
    }
    message
}
