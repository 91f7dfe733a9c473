use crate::cli::context::Context;
use crate::config::Config;
use crate::core::session::View;
use crate::errors::{AppError, AppResult};
use crate::models::Status;
use crate::ui::messages::success;

/// Handle `approve` / `reject`: only the principal, only pending requests.
pub fn handle(id: &str, decision: Status, cfg: &Config) -> AppResult<()> {
    let mut ctx = Context::open(cfg)?;
    let viewer = ctx.viewer(View::Dashboard)?;

    if !viewer.is_approver() {
        return Err(AppError::Forbidden(
            "only the principal can approve or reject requests".into(),
        ));
    }

    let req = ctx.state.find_request(id)?;
    if !req.status.is_pending() {
        return Err(AppError::Forbidden(format!(
            "request {id} is already {}",
            req.status
        )));
    }
    let name = req.name.clone();

    ctx.state.set_status(&ctx.service, id, decision)?;

    match decision {
        Status::Approved => success(format!("Pengajuan {name} disetujui.")),
        _ => success(format!("Pengajuan {name} ditolak.")),
    }
    Ok(())
}
