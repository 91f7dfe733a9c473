use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::RowActions;
use crate::core::session::View;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut ctx = Context::open(cfg)?;
        let viewer = ctx.viewer(View::Dashboard)?;

        let req = ctx.state.find_request(id)?;
        if !RowActions::for_viewer(req, &viewer).delete {
            return Err(AppError::Forbidden(format!(
                "request {id} cannot be deleted by {}",
                viewer.name
            )));
        }

        let prompt = format!("Hapus data ijin \"{}\" ({})?", req.name, req.kind);
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = ctx.state.delete_request(&ctx.service, id)?;
        success(format!("Request {} of {} has been deleted.", removed.id, removed.name));
    }
    Ok(())
}
