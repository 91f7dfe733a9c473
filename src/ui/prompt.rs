use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question; anything but "y"/"yes" is a no.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().lock().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Read one line for a value that was not given on the command line.
pub fn ask_value(label: &str) -> AppResult<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut s = String::new();
    let n = io::stdin().lock().read_line(&mut s)?;
    if n == 0 {
        return Err(AppError::Validation(format!("{label} is required")));
    }
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}
