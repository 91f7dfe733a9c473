use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and writes `siaplapor.conf`. An existing file
/// is kept (only the endpoint is replaced when `--url` is given) unless
/// `--force` is set.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Init { url, force } = cmd {
        println!("⚙️  Initializing SIAP Lapor…");

        let cfg = Config::init_all(url.clone(), *force)?;
        let path = Config::config_file();

        println!("📄 Config file : {}", path.display());
        match cfg.endpoint() {
            Some(endpoint) => println!("🌐 Endpoint    : {}", endpoint),
            None => warning("No endpoint configured: the app runs on sample data until you set one."),
        }
        println!("🏫 Department  : {}", cfg.department);

        info("Next step: siaplapor login <username>");
        success("SIAP Lapor initialization completed!");
    }
    Ok(())
}
