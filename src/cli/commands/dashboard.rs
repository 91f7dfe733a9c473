use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{RowActions, Stats, new_request_notice, search, type_tally, visible};
use crate::core::session::View;
use crate::errors::AppResult;
use crate::models::{LeaveRequest, User};
use crate::ui::messages::{header, info, notify};
use crate::utils::colors::{BLUE, GREEN, GREY, RED, YELLOW, paint};
use crate::utils::formatting::{bold, describe_status, format_date_long, format_period, italic};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { search: term, all, mine } = cmd {
        let ctx = Context::open(cfg)?;
        let viewer = ctx.viewer(View::Dashboard)?;
        let mut session = ctx.session()?;

        header(View::Dashboard.title());
        println!("{}", format_date_long(&crate::utils::date::today().to_string()));
        if viewer.is_approver() {
            println!("{}", italic("Kelola persetujuan."));
            if let Some(url) = cfg.spreadsheet_url.as_deref().filter(|u| !u.trim().is_empty()) {
                println!("Database: {url}");
            }
        } else {
            println!("{}", italic("Pantau status pengajuan."));
        }
        println!();

        if ctx.state.is_live() {
            if let Some(previous) = &session.seen_request_ids
                && let Some(req) = new_request_notice(previous, &ctx.state.requests, &viewer)
            {
                notify(format!("Pengajuan baru dari {}: {}", req.name, req.kind));
            }
            session.seen_request_ids = Some(ctx.state.request_ids());
            session.save_to(&ctx.session_path)?;
        }

        let scope: Vec<LeaveRequest> = if *mine {
            ctx.state
                .requests
                .iter()
                .filter(|r| r.is_owned_by(&viewer.nip))
                .cloned()
                .collect()
        } else {
            ctx.state.requests.clone()
        };

        print_stats(&Stats::from_requests(&scope));
        print_tally(&scope);

        let found = search(&scope, term.as_deref().unwrap_or(""));
        println!("{}", bold("Daftar Pengajuan"));

        if found.is_empty() {
            println!("{}", paint("Belum ada data.", GREY));
            return Ok(());
        }

        let (rows, hidden) = visible(&found, cfg.page_size, *all);
        println!("{}", render_requests(rows, &viewer));

        if hidden > 0 {
            info(format!(
                "{hidden} more request(s) hidden; use --all to show everything."
            ));
        }
    }
    Ok(())
}

fn print_stats(stats: &Stats) {
    println!(
        "{}  {}  {}  {}\n",
        paint(&format!("Total: {}", stats.total), BLUE),
        paint(&format!("Disetujui: {}", stats.approved), GREEN),
        paint(&format!("Menunggu: {}", stats.pending), YELLOW),
        paint(&format!("Ditolak: {}", stats.rejected), RED),
    );
}

fn print_tally(requests: &[LeaveRequest]) {
    let tally = type_tally(requests);
    if tally.is_empty() {
        return;
    }

    println!("{}", bold("Statistik Jenis Ijin"));
    for (kind, count) in tally {
        println!("  {:<28} {:>3}", kind, count);
    }
    println!();
}

fn render_requests(rows: &[&LeaveRequest], viewer: &User) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 9),
        Column::new("Pegawai", 24),
        Column::new("Jenis", 18),
        Column::new("Tanggal", 27),
        Column::new("Alasan", 30),
        Column::new("Status", 9),
        Column::new("Aksi", 28),
    ]);

    for req in rows {
        let (label, color) = describe_status(req.status);
        let actions = RowActions::for_viewer(req, viewer).labels().join(" ");
        table.add_row(vec![
            req.id.clone(),
            format!("{} ({})", req.name, req.nip),
            req.type_or_other().to_string(),
            format_period(&req.start_day(), &req.end_day()),
            format!("\"{}\"", req.reason),
            paint(&label, color),
            actions,
        ]);
    }

    table.render()
}
