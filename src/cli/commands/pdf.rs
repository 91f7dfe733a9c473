use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::View;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle `pdf`: the official letter for an approved request, either stored
/// on Drive (URL kept as the request's document link) or downloaded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pdf { id, download } = cmd {
        let mut ctx = Context::open(cfg)?;
        let viewer = ctx.viewer(View::Dashboard)?;

        let req = ctx.state.find_request(id)?;
        if !req.status.is_approved() {
            return Err(AppError::Forbidden(format!(
                "request {id} is {}; documents exist only for approved requests",
                req.status
            )));
        }
        if !viewer.is_approver() && !req.is_owned_by(&viewer.nip) {
            return Err(AppError::Forbidden(format!("request {id} belongs to {}", req.name)));
        }

        match download {
            Some(target) => {
                let req = req.clone();
                let (filename, bytes) = ctx.service.download_pdf(&req)?;

                let mut path = expand_tilde(target);
                if path.is_dir() {
                    path = path.join(&filename);
                }
                if path.exists()
                    && !ask_confirmation(&format!("Overwrite {}?", path.display()))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                fs::write(&path, &bytes)?;
                success(format!("PDF saved: {} ({} bytes)", path.display(), bytes.len()));
            }
            None => {
                let url = ctx.state.attach_document(&ctx.service, id)?;
                success("Dokumen dibuat.");
                println!("🔗 {url}");
            }
        }
    }
    Ok(())
}
