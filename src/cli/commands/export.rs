use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::database::{Tab, filter_requests, filter_users};
use crate::core::session::View;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        tab,
        search,
        status,
        force,
    } = cmd
    {
        let ctx = Context::open(cfg)?;
        ctx.viewer(View::Database)?;

        let term = search.as_deref().unwrap_or("");
        match tab {
            Tab::Requests => {
                let rows = filter_requests(&ctx.state.requests, term, *status);
                ExportLogic::export_requests(&rows, *format, file, *status, *force)?;
            }
            Tab::Users => {
                let rows = filter_users(&ctx.state.users, term);
                ExportLogic::export_users(&rows, *format, file, *force)?;
            }
        }
    }
    Ok(())
}
