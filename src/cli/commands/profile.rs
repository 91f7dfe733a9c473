use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::View;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::colors::{color_for_role, paint};

/// Handle `profile`: show the current user, or change name / position.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile { name, position } = cmd {
        let mut ctx = Context::open(cfg)?;
        let viewer = ctx.viewer(View::Profile)?;

        let user = if name.is_some() || position.is_some() {
            let updated =
                ctx.state
                    .update_profile(&ctx.service, &viewer.nip, name.clone(), position.clone())?;
            success("Profil diperbarui.");
            updated
        } else {
            viewer
        };

        header(View::Profile.title());
        println!("Nama     : {}", user.name);
        println!("NIP      : {}", user.nip);
        println!("Jabatan  : {}", user.position);
        println!("Pangkat  : {}", user.rank_or_dash());
        println!("Role     : {}", paint(user.role.code(), color_for_role(user.role)));
    }
    Ok(())
}
