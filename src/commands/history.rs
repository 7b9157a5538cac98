use anyhow::Result;

use ftpush::application::list_history;

use crate::ui::context::UiContext;
use crate::ui::views::history::HistoryView;

pub fn cmd_history(ui: &UiContext, limit: usize) -> Result<()> {
    let toolbox = super::open_toolbox(ui)?;
    let profile = super::load_profile(&toolbox)?;
    let listing = list_history(&profile.history, limit);

    if ui.json {
        crate::ui::json::print_document(&listing)?;
        return Ok(());
    }

    print!(
        "{}",
        HistoryView::new(&profile.project.name, &listing).render(ui.color, ui.unicode)
    );
    Ok(())
}
