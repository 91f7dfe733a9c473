use crate::cli::parser::Commands;
use crate::core::form::{DEFAULT_END_TIME, DEFAULT_START_TIME};
use crate::errors::{AppError, AppResult};
use crate::models::category::OTHER_OPTION;
use crate::models::{CutiType, LeaveCategory};
use crate::ui::messages::header;
use crate::utils::formatting::bold;

/// Print what `submit` accepts for each category.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Options { category } = cmd {
        let categories: Vec<LeaveCategory> = match category {
            Some(code) => vec![
                LeaveCategory::from_code(code)
                    .ok_or_else(|| AppError::InvalidCategory(code.clone()))?,
            ],
            None => LeaveCategory::ALL.to_vec(),
        };

        header("Jenis Pengajuan");

        for cat in categories {
            println!("{}  (--category {})", bold(cat.label()), cat.code());

            if cat == LeaveCategory::Cuti {
                println!("  Jenis cuti (--cuti):");
                for t in CutiType::ALL {
                    println!("    {:<11} {}", t.code(), t.label());
                }
                println!("    or --custom-type \"...\" for any other kind");
            }

            match cat.reason_options() {
                Some(opts) => {
                    println!("  Alasan (--option N):");
                    for (i, o) in opts.iter().enumerate() {
                        println!("    {:>2}. {}", i + 1, o);
                    }
                    println!("    {OTHER_OPTION}: --reason \"...\"");
                }
                None => println!("  Alasan: --reason \"...\""),
            }
            println!();
        }

        println!(
            "Default hours: {} - {} (--in / --out)",
            DEFAULT_START_TIME, DEFAULT_END_TIME
        );
    }
    Ok(())
}
