use anyhow::Result;

use ftpush::{PushOptions, PushUseCase};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::push::render_push_summary;

pub fn cmd_push(ui: &UiContext, full: bool, dry_run: bool) -> Result<()> {
    let toolbox = super::open_toolbox(ui)?;
    let mut profile = super::load_profile(&toolbox)?;

    if !ui.json {
        let title = if dry_run {
            "ftpush push (dry run)"
        } else {
            "ftpush push"
        };
        let header = super::deploy_header(Icon::Push, title, &toolbox, &profile);
        println!("{}", header.render(ui.color, ui.unicode));
    }

    let options = PushOptions::default()
        .with_full(full)
        .with_dry_run(dry_run);
    let events = super::event_sink(ui, "push");
    let ctx = toolbox.context(events.as_ref());
    let report = PushUseCase::new(&ctx).execute(&mut profile, &options)?;

    if !ui.json {
        println!();
        print!("{}", render_push_summary(&report, ui.color, ui.unicode));
    }
    Ok(())
}
