use ftpush::application::StatusReport;

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// What a missing tool costs, shown under its line.
fn missing_tool_hint(name: &str) -> Option<&'static str> {
    match name {
        "git" => Some("Version tracking, stashing and rollback need git"),
        "git-ftp" => Some("Incremental and FTPS uploads need git-ftp"),
        "ncftpput" => Some("Projects without git are mirrored with ncftpput"),
        "curl" => Some("The connectivity check before each push uses curl"),
        "npm" => Some("Asset builds run `npm run build`"),
        "composer" => Some("Package installs run `composer install`"),
        _ => None,
    }
}

pub struct StatusView<'a> {
    report: &'a StatusReport,
}

impl<'a> StatusView<'a> {
    pub fn new(report: &'a StatusReport) -> Self {
        Self { report }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let r = self.report;
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Status, "ftpush status");
        header.add(
            "Project",
            format!("{} ({})", r.project_name, r.project_type.display_name()),
        );
        let security = if r.secure { "FTPS" } else { "plain FTP" };
        header.add("Target", format!("{} as {} ({})", r.target, r.username, security));
        header.add(
            "Policy",
            format!(
                "build assets {}, package install {}",
                on_off(r.build_assets),
                on_off(r.run_package_install)
            ),
        );
        header.add("Excludes", r.excludes.len().to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        let last = match &r.last_deployment {
            Some(record) => format!(
                "last {} by {} ({}, {})",
                record.timestamp_iso(),
                record.user(),
                record.kind(),
                record.short_revision().unwrap_or("-")
            ),
            None => "none yet".to_string(),
        };
        out.push_str(&format!(
            "{} deployments recorded, {}\n",
            ColoredText::plain(r.records.to_string()).bold().render(supports_color),
            last
        ));

        match &r.repository {
            Some(repo) => {
                let branch = repo.branch.as_deref().unwrap_or("detached HEAD");
                let head = repo.head.as_deref().unwrap_or("no commits");
                let changes = if repo.uncommitted == 0 {
                    ColoredText::success("clean").render(supports_color)
                } else {
                    ColoredText::warning(format!("{} uncommitted changes", repo.uncommitted))
                        .render(supports_color)
                };
                out.push_str(&format!("git: {} at {}, {}\n", branch, head, changes));
            }
            None => out.push_str(&format!(
                "git: {}\n",
                ColoredText::dim("not a repository (full uploads only, no rollback)")
                    .render(supports_color)
            )),
        }

        if !r.overrides.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!("overridden by {}", r.overrides.join(", ")))
                    .render(supports_color)
            ));
        }

        out.push_str("\nTools:\n");
        for tool in &r.tools {
            let item = if tool.available {
                CheckItem::new(tool.name, CheckStatus::Pass, "available")
            } else {
                let item = CheckItem::new(tool.name, CheckStatus::Warning, "not found");
                match missing_tool_hint(tool.name) {
                    Some(hint) => item.with_recommendation(hint),
                    None => item,
                }
            };
            out.push_str(&item.render(supports_color, supports_unicode));
        }

        out
    }
}
