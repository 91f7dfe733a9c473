use crate::cli::context::Context;
use crate::cli::parser::{Commands, FormArgs};
use crate::config::Config;
use crate::core::form::{LeaveForm, ReasonChoice};
use crate::core::session::View;
use crate::core::store::Submitted;
use crate::errors::{AppError, AppResult};
use crate::models::{CutiType, LeaveCategory, LeaveRequest};
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_period;
use chrono::Local;

fn parse_category(code: &str) -> AppResult<LeaveCategory> {
    LeaveCategory::from_code(code).ok_or_else(|| AppError::InvalidCategory(code.to_string()))
}

/// Copy the flags that were given onto the form; absent flags keep the
/// current (default or pre-filled) value.
fn apply_args(form: &mut LeaveForm, args: &FormArgs) -> AppResult<()> {
    if let Some(code) = &args.cuti {
        form.cuti_type = CutiType::from_code(code)
            .ok_or_else(|| AppError::InvalidCategory(format!("cuti type '{code}'")))?;
    }
    if let Some(text) = &args.custom_type {
        form.cuti_type = CutiType::Lainnya;
        form.custom_type = Some(text.clone());
    }

    if let Some(n) = args.option {
        form.reason = Some(ReasonChoice::Preset(n));
    } else if let Some(text) = &args.reason {
        form.reason = Some(ReasonChoice::Text(text.clone()));
    }

    if let Some(d) = &args.from {
        form.start_date = Some(d.clone());
    }
    if let Some(d) = &args.to {
        form.end_date = Some(d.clone());
    }
    if let Some(t) = &args.start_time {
        form.start_time = t.clone();
    }
    if let Some(t) = &args.end_time {
        form.end_time = t.clone();
    }
    Ok(())
}

fn summary(req: &LeaveRequest) -> String {
    format!(
        "{} [{}] {} {}-{}: {}",
        req.id,
        req.kind,
        format_period(&req.start_day(), &req.end_day()),
        req.start_time,
        req.end_time,
        req.reason
    )
}

/// Handle `submit`: a new request from the logged-in employee.
pub fn handle_submit(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { category, form: args } = cmd {
        let mut ctx = Context::open(cfg)?;
        let viewer = ctx.viewer(View::Input)?;

        let mut form = LeaveForm::new(parse_category(category)?);
        apply_args(&mut form, args)?;

        let req = form.build(&viewer, &cfg.department, None, Local::now())?;
        let line = summary(&req);

        ctx.state.submit(&ctx.service, req)?;
        success("Ijin terkirim!");
        info(line);
    }
    Ok(())
}

/// Handle `edit`: re-submit one of the viewer's own pending requests.
pub fn handle_edit(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        category,
        form: args,
    } = cmd
    {
        let mut ctx = Context::open(cfg)?;
        let viewer = ctx.viewer(View::Input)?;

        let existing = ctx.state.find_request(id)?.clone();
        if !existing.is_owned_by(&viewer.nip) {
            return Err(AppError::Forbidden(format!(
                "request {id} belongs to {}",
                existing.name
            )));
        }
        if !existing.status.is_pending() {
            return Err(AppError::Forbidden(format!(
                "request {id} is already {}",
                existing.status
            )));
        }

        let mut form = LeaveForm::from_request(&existing);
        if let Some(code) = category {
            let new_category = parse_category(code)?;
            if new_category != form.category {
                form.category = new_category;
                // a preset index from the old list means nothing in the new one
                if let Some(ReasonChoice::Preset(_)) = form.reason {
                    form.reason = Some(ReasonChoice::Text(existing.reason.clone()));
                }
            }
        }
        apply_args(&mut form, args)?;

        let req = form.build(&viewer, &cfg.department, Some(&existing), Local::now())?;
        let line = summary(&req);

        match ctx.state.submit(&ctx.service, req)? {
            Submitted::Updated => success("Pengajuan diperbarui!"),
            Submitted::Created => success("Ijin terkirim!"),
        }
        info(line);
    }
    Ok(())
}
