use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::database::{Tab, filter_requests, filter_users};
use crate::core::session::View;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, color_for_role, colorize_optional, paint};
use crate::utils::formatting::{describe_status, format_date_short, format_period};
use crate::utils::table::{Column, Table};

/// Handle `db`: the raw tables behind the app, principal only.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { tab, search, status } = cmd {
        let ctx = Context::open(cfg)?;
        ctx.viewer(View::Database)?;

        let term = search.as_deref().unwrap_or("");
        header(format!("Database Sekolah - {}", tab.title()));

        let (table, count) = match tab {
            Tab::Requests => {
                let rows = filter_requests(&ctx.state.requests, term, *status);
                let mut table = Table::new(vec![
                    Column::new("Tanggal", 11),
                    Column::new("Nama Pegawai", 26),
                    Column::new("Jenis Ijin", 18),
                    Column::new("Alasan", 30),
                    Column::new("Durasi", 27),
                    Column::new("Status", 9),
                    Column::new("Dokumen", 9),
                ]);
                for r in &rows {
                    let (label, color) = describe_status(r.status);
                    let doc = match &r.doc_url {
                        Some(_) => "ada".to_string(),
                        None => paint("-", GREY),
                    };
                    table.add_row(vec![
                        format_date_short(&r.created_at),
                        format!("{} ({})", r.name, r.nip),
                        r.kind.clone(),
                        r.reason.clone(),
                        format_period(&r.start_day(), &r.end_day()),
                        paint(&label, color),
                        doc,
                    ]);
                }
                (table, rows.len())
            }
            Tab::Users => {
                let rows = filter_users(&ctx.state.users, term);
                let mut table = Table::new(vec![
                    Column::new("Nama Lengkap", 28),
                    Column::new("NIP", 18),
                    Column::new("Jabatan", 20),
                    Column::new("Pangkat/Gol", 16),
                    Column::new("Role", 14),
                ]);
                for u in &rows {
                    table.add_row(vec![
                        u.name.clone(),
                        u.nip.clone(),
                        u.position.clone(),
                        colorize_optional(u.rank_or_dash()),
                        paint(u.role.code(), color_for_role(u.role)),
                    ]);
                }
                (table, rows.len())
            }
        };

        if table.is_empty() {
            println!("{}", paint("Data tidak ditemukan", GREY));
        } else {
            println!("{}", table.render());
        }
        println!("Menampilkan {count} baris data.");
    }
    Ok(())
}
