use anyhow::Result;

use ftpush::application::collect_status;

use crate::ui::context::UiContext;
use crate::ui::views::status::StatusView;

pub fn cmd_status(ui: &UiContext) -> Result<()> {
    let toolbox = super::open_toolbox(ui)?;
    let profile = super::load_profile(&toolbox)?;
    let report = collect_status(
        &profile,
        &toolbox.overrides,
        &toolbox.vcs,
        toolbox.tool_availability(),
    );

    if ui.json {
        crate::ui::json::print_document(&report)?;
        return Ok(());
    }

    print!("{}", StatusView::new(&report).render(ui.color, ui.unicode));
    Ok(())
}
