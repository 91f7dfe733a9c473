use crate::core::database::{StatusFilter, Tab};
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for SIAP Lapor
/// Leave requests for teachers, approvals for the principal
#[derive(Parser)]
#[command(
    name = "siaplapor",
    version = env!("CARGO_PKG_VERSION"),
    about = "SIAP Lapor: submit, approve and track school leave requests stored in a spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override the Apps Script endpoint for this run
    #[arg(global = true, long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Do not contact the sheet: reads use the sample dataset, writes fail
    #[arg(global = true, long = "offline")]
    pub offline: bool,

    /// Print diagnostic logs (same as RUST_LOG=debug)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields of the submission form shared by `submit` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Cuti sub-type: tahunan, melahirkan, haji, sakit or lainnya
    #[arg(long = "cuti", value_name = "TYPE")]
    pub cuti: Option<String>,

    /// Free-text Cuti type (implies --cuti lainnya)
    #[arg(long = "custom-type", value_name = "TEXT")]
    pub custom_type: Option<String>,

    /// Pick a reason from the category's list (see `siaplapor options`)
    #[arg(long = "option", value_name = "N", conflicts_with = "reason")]
    pub option: Option<usize>,

    /// Free-text reason ("Lainnya" for categories with a fixed list)
    #[arg(long = "reason", value_name = "TEXT")]
    pub reason: Option<String>,

    /// First day (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Last day (YYYY-MM-DD), defaults to the first day
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Start time (HH:MM)
    #[arg(long = "in", value_name = "HH:MM")]
    pub start_time: Option<String>,

    /// End time (HH:MM)
    #[arg(long = "out", value_name = "HH:MM")]
    pub end_time: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init {
        /// Apps Script endpoint to store in the configuration
        #[arg(long = "url", value_name = "URL")]
        url: Option<String>,

        /// Replace an existing configuration with defaults
        #[arg(long = "force", short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in with username (or NIP) and password
    Login {
        username: String,

        /// Password; asked on stdin when omitted
        #[arg(long = "password", short = 'p')]
        password: Option<String>,
    },

    /// Forget the current session
    Logout,

    /// Show the logged-in employee
    Whoami,

    /// Statistics and the list of leave requests
    Dashboard {
        #[arg(long = "search", short = 's', help = "Filter by name, NIP, type or reason")]
        search: Option<String>,

        #[arg(long = "all", short = 'a', help = "Show every request, not only the latest")]
        all: bool,

        #[arg(long = "mine", help = "Only my own requests")]
        mine: bool,
    },

    /// Submit a new leave request
    Submit {
        /// dinas, pribadi, ijin or cuti
        #[arg(long = "category", short = 'c', value_name = "CATEGORY")]
        category: String,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Edit one of your pending requests
    Edit {
        id: String,

        /// Change the category (dinas, pribadi, ijin, cuti)
        #[arg(long = "category", short = 'c', value_name = "CATEGORY")]
        category: Option<String>,

        #[command(flatten)]
        form: FormArgs,
    },

    /// List categories, Cuti sub-types and reason options
    Options {
        /// Only this category
        category: Option<String>,
    },

    /// Approve a pending request (principal)
    Approve { id: String },

    /// Reject a pending request (principal)
    Reject { id: String },

    /// Delete a request
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Generate the official document of an approved request
    Pdf {
        id: String,

        /// Download the PDF to this file instead of storing it on Drive
        #[arg(long = "download", value_name = "FILE")]
        download: Option<String>,
    },

    /// Show (and optionally open) the Google Form of an approved request
    Form {
        id: String,

        #[arg(long = "open", help = "Open the link in the default browser")]
        open: bool,
    },

    /// Show or edit your own profile
    Profile {
        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "position")]
        position: Option<String>,
    },

    /// Manage employees (principal)
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Browse the raw request and employee tables (principal)
    Db {
        #[arg(long, value_enum, default_value = "requests")]
        tab: Tab,

        #[arg(long = "search", short = 's')]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,
    },

    /// Export a database tab (principal)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "requests")]
        tab: Tab,

        #[arg(long = "search", short = 's')]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List employees
    List {
        #[arg(long = "search", short = 's', help = "Filter by name or NIP")]
        search: Option<String>,
    },

    /// Register a new employee
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        nip: String,

        #[arg(long, help = "Defaults to \"Guru Kelas\"")]
        position: Option<String>,

        #[arg(long, help = "Pangkat / golongan")]
        rank: Option<String>,

        #[arg(long, default_value = "guru", help = "guru or ks")]
        role: String,

        #[arg(long, help = "Defaults to the NIP")]
        username: Option<String>,

        #[arg(long, help = "Defaults to the NIP")]
        password: Option<String>,
    },

    /// Edit an employee identified by NIP
    Edit {
        nip: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "set-nip", value_name = "NIP")]
        new_nip: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long, help = "Empty value clears the rank")]
        rank: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// Reset login name and password
    Password {
        nip: String,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,
    },

    /// Remove an employee
    Del {
        nip: String,

        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Upload the whole employee list to the sheet
    Sync,
}
