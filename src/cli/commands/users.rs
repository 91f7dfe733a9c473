use crate::cli::context::Context;
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::session::View;
use crate::core::users::{self, NewUser, UserPatch};
use crate::errors::{AppError, AppResult};
use crate::models::{Role, User};
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{color_for_role, colorize_optional, paint};
use crate::utils::table::{Column, Table};

fn parse_role(code: &str) -> AppResult<Role> {
    Role::from_code(code).ok_or_else(|| AppError::InvalidRole(code.to_string()))
}

/// Handle `users`: employee directory, principal only. Every change is
/// uploaded to the sheet right away.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Users { action } = cmd else {
        return Ok(());
    };

    let mut ctx = Context::open(cfg)?;
    let viewer = ctx.viewer(View::UserManagement)?;

    match action {
        UserAction::List { search } => {
            let found = users::filter(&ctx.state.users, search.as_deref().unwrap_or(""));
            header(View::UserManagement.title());
            if found.is_empty() {
                info("Data tidak ditemukan.");
            } else {
                println!("{}", render_users(&found));
                println!("{} pegawai.", found.len());
            }
        }

        UserAction::Add {
            name,
            nip,
            position,
            rank,
            role,
            username,
            password,
        } => {
            let input = NewUser {
                name: name.clone(),
                nip: nip.clone(),
                position: position.clone(),
                rank: rank.clone(),
                role: Some(parse_role(role)?),
                username: username.clone(),
                password: password.clone(),
            };
            let added = users::add_user(&mut ctx.state.users, input)?.clone();
            ctx.state.sync_users(&ctx.service)?;
            success(format!("Pegawai {} ({}) ditambahkan.", added.name, added.nip));
        }

        UserAction::Edit {
            nip,
            name,
            new_nip,
            position,
            rank,
            role,
        } => {
            let patch = UserPatch {
                name: name.clone(),
                nip: new_nip.clone(),
                position: position.clone(),
                rank: rank.clone(),
                role: role.as_deref().map(parse_role).transpose()?,
            };
            if patch.is_empty() {
                info("Nothing to change.");
                return Ok(());
            }

            let updated = users::update_user(&mut ctx.state.users, nip, patch)?;
            ctx.state.sync_users(&ctx.service)?;

            if viewer.nip == *nip && updated.nip != *nip {
                let mut session = ctx.session()?;
                session.nip = updated.nip.clone();
                session.save_to(&ctx.session_path)?;
                log::debug!("session moved to NIP {}", updated.nip);
            }
            success(format!("Data {} diperbarui.", updated.name));
        }

        UserAction::Password {
            nip,
            username,
            password,
        } => {
            let updated = users::reset_credentials(
                &mut ctx.state.users,
                nip,
                username.clone(),
                password.clone(),
            )?;
            ctx.state.sync_users(&ctx.service)?;
            success(format!(
                "Login {} diperbarui (username: {}).",
                updated.name,
                updated.login_name()
            ));
        }

        UserAction::Del { nip, yes } => {
            let target = ctx.state.find_user(nip)?;
            let prompt = format!("Hapus pegawai \"{}\" ({})?", target.name, target.nip);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = users::delete_user(&mut ctx.state.users, nip)?;
            ctx.state.sync_users(&ctx.service)?;
            success(format!("Pegawai {} dihapus.", removed.name));
        }

        UserAction::Sync => {
            ctx.state.sync_users(&ctx.service)?;
            success(format!(
                "{} data pegawai tersimpan ke spreadsheet.",
                ctx.state.users.len()
            ));
        }
    }

    Ok(())
}

fn render_users(rows: &[&User]) -> String {
    let mut table = Table::new(vec![
        Column::new("Nama", 28),
        Column::new("NIP", 18),
        Column::new("Jabatan", 20),
        Column::new("Pangkat", 16),
        Column::new("Role", 14),
        Column::new("Login", 18),
    ]);

    for u in rows {
        table.add_row(vec![
            u.name.clone(),
            u.nip.clone(),
            u.position.clone(),
            colorize_optional(u.rank_or_dash()),
            paint(u.role.code(), color_for_role(u.role)),
            u.login_name().to_string(),
        ]);
    }

    table.render()
}
