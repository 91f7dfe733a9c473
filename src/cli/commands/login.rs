use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, View, authenticate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_value;
use crate::utils::colors::{color_for_role, paint};

/// Handle `login`: check credentials against the employee sheet and open a
/// session.
pub fn handle_login(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let ctx = Context::open(cfg)?;

        let password = match password {
            Some(p) => p.clone(),
            None => ask_value("Password")?,
        };

        let user = authenticate(&ctx.state.users, username, &password)?;

        let mut session = Session::new(&user.nip);
        // only real ids are worth remembering
        if ctx.state.is_live() {
            session.seen_request_ids = Some(ctx.state.request_ids());
        }
        session.save_to(&ctx.session_path)?;

        log::debug!("session written to {}", ctx.session_path.display());
        success(format!(
            "Selamat datang, {} ({})",
            user.name,
            paint(user.role.short_label(), color_for_role(user.role))
        ));
    }
    Ok(())
}

pub fn handle_logout() -> AppResult<()> {
    if Session::clear(&Session::path())? {
        success("Logged out.");
    } else {
        info("No active session.");
    }
    Ok(())
}

pub fn handle_whoami(cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;
    let user = ctx.viewer(View::Dashboard)?;

    println!("👤 {}", user.name);
    println!("   NIP      : {}", user.nip);
    println!("   Jabatan  : {}", user.position);
    println!("   Pangkat  : {}", user.rank_or_dash());
    println!(
        "   Role     : {}",
        paint(user.role.code(), color_for_role(user.role))
    );
    println!("   Login    : {}", user.login_name());
    Ok(())
}
