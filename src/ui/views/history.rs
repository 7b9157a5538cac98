use ftpush::application::HistoryListing;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct HistoryView<'a> {
    project: &'a str,
    listing: &'a HistoryListing,
}

impl<'a> HistoryView<'a> {
    pub fn new(project: &'a str, listing: &'a HistoryListing) -> Self {
        Self { project, listing }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::History, "Deployment history");
        header.add("Project", self.project);
        header.add(
            "Showing",
            format!("{} of {}", self.listing.entries.len(), self.listing.total),
        );
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.listing.entries.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("No deployments recorded yet.").render(supports_color)
            ));
            return out;
        }

        let user_width = self
            .listing
            .entries
            .iter()
            .map(|e| e.user.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &self.listing.entries {
            let ordinal = ColoredText::info(format!("#{:<3}", entry.ordinal))
                .bold()
                .render(supports_color);
            let user = format!("{:<width$}", entry.user, width = user_width);
            let kind = format!("{:<11}", entry.kind.as_str());
            out.push_str(&format!(
                "  {} {}  {}  {}  {}\n",
                ordinal,
                entry.timestamp,
                user,
                kind,
                ColoredText::dim(entry.short_revision()).render(supports_color)
            ));
        }

        out
    }
}
