use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::View;
use crate::errors::{AppError, AppResult};
use crate::models::LeaveCategory;
use crate::ui::messages::{header, success, warning};
use std::process::Command;

/// Handle `form`: the Google Form to fill in once a request is approved.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Form { id, open } = cmd {
        let ctx = Context::open(cfg)?;
        ctx.viewer(View::FormFrame)?;

        let req = ctx.state.find_request(id)?;
        if !req.status.is_approved() {
            return Err(AppError::Forbidden(format!(
                "request {id} is {}; the form opens after approval",
                req.status
            )));
        }

        let category = req.category();
        let url = cfg.form_links.for_category(category).ok_or_else(|| {
            AppError::Config(format!(
                "no form link configured for {} (form_links.cuti)",
                LeaveCategory::Cuti
            ))
        })?;

        header(format!("Isi Form: {}", req.kind));
        println!("{url}");

        if *open {
            match open_in_browser(url) {
                Ok(()) => success("Form opened in the browser."),
                Err(e) => warning(format!("Could not open the browser ({e}); copy the link above.")),
            }
        }
    }
    Ok(())
}

fn open_in_browser(url: &str) -> std::io::Result<()> {
    let status = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", "", url]).status()?
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(url).status()?
    } else {
        Command::new("xdg-open").arg(url).status()?
    };

    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("opener exited with {status}")))
    }
}
