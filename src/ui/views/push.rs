use ftpush::application::{PushReport, RollbackReport, StepOutcome};

use crate::ui::blocks::summary::ResultSummary;

fn files_fact(report: &PushReport) -> String {
    let verb = if report.dry_run {
        "would be uploaded"
    } else {
        "uploaded"
    };
    match report.files {
        Some(1) => format!("1 file {} via {}", verb, report.tool),
        Some(n) => format!("{} files {} via {}", n, verb, report.tool),
        None => format!("{} {} finished ({})", report.tool, report.mode.as_str(), verb),
    }
}

fn step_fact(label: &str, outcome: &StepOutcome) -> Option<String> {
    match outcome {
        StepOutcome::Ran => Some(format!("{}: done", label)),
        StepOutcome::Skipped(reason) => Some(format!("{}: skipped ({})", label, reason)),
        // Reported through the warnings list.
        StepOutcome::Failed(_) => None,
    }
}

fn stash_state(report: &PushReport) -> &'static str {
    match (report.stashed, report.unstashed) {
        (false, _) => "not needed",
        (true, true) => "restored",
        (true, false) => "kept (run `git stash pop`)",
    }
}

pub fn render_push_summary(report: &PushReport, supports_color: bool, supports_unicode: bool) -> String {
    let title = if report.dry_run {
        "Dry run complete - nothing uploaded or recorded".to_string()
    } else {
        match report.ordinal {
            Some(ordinal) => format!("Deployment #{} recorded ({})", ordinal, report.kind()),
            None => "Deployment complete".to_string(),
        }
    };

    let mut summary = ResultSummary::success(title);
    summary.add_fact(files_fact(report));
    summary.add_fact(format!("stash: {}", stash_state(report)));
    if let Some(fact) = step_fact("asset build", &report.build) {
        summary.add_fact(fact);
    }
    if let Some(fact) = step_fact("package install", &report.install) {
        summary.add_fact(fact);
    }
    for warning in &report.warnings {
        summary.add_warning(warning.as_str());
    }
    if report.dry_run {
        summary.with_next_step("ftpush push");
    }
    summary.render(supports_color, supports_unicode)
}

pub fn render_rollback_summary(
    report: &RollbackReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success(format!(
        "Rolled back to #{} ({})",
        report.ordinal,
        report.short_revision()
    ));
    summary.add_fact(files_fact(&report.push));
    if let Some(ordinal) = report.push.ordinal {
        summary.add_fact(format!("recorded as deployment #{}", ordinal));
    }
    if report.restored {
        summary.add_fact("working tree returned to the previous checkout");
    }
    for warning in report.all_warnings() {
        summary.add_warning(warning.as_str());
    }
    summary.with_next_step("ftpush history");
    summary.render(supports_color, supports_unicode)
}
