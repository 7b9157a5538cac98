use anyhow::Result;

use ftpush::{RollbackOptions, RollbackUseCase};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::push::render_rollback_summary;

pub fn cmd_rollback(ui: &UiContext, target: Option<usize>, yes: bool) -> Result<()> {
    let toolbox = super::open_toolbox(ui)?;
    let mut profile = super::load_profile(&toolbox)?;

    if !ui.json {
        let header = super::deploy_header(Icon::Rollback, "ftpush rollback", &toolbox, &profile);
        println!("{}", header.render(ui.color, ui.unicode));
    }

    let options = RollbackOptions::new()
        .with_target(target)
        .with_assume_yes(yes);
    let events = super::event_sink(ui, "rollback");
    let ctx = toolbox.context(events.as_ref());
    let report = RollbackUseCase::new(&ctx).execute(&mut profile, &options)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "rolled_back",
            "command": "rollback",
            "ordinal": report.ordinal,
            "revision": report.revision,
            "recorded": report.push.ordinal,
            "restored": report.restored,
            "warnings": report.all_warnings().collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    println!();
    print!("{}", render_rollback_summary(&report, ui.color, ui.unicode));
    Ok(())
}
