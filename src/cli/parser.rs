use crate::export::ExportFormat;
use crate::models::reminder::ReminderCategory;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for CheckMate
#[derive(Parser)]
#[command(
    name = "checkmate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Safety compliance tracking: equipment certificates, MOTs, thorough examinations and ticket expiry reminders",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Reference instant for reminder computation (ISO-8601, default: now)
    #[arg(global = true, long = "now", value_name = "DATETIME")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Reminder scope flags shared by `reminders` and `export`.
#[derive(Args, Clone, Debug, Default)]
pub struct ScopeArgs {
    /// Company whose equipment and certificates are checked (default: config)
    #[arg(long = "company")]
    pub company: Option<i64>,

    /// Employee whose tickets are checked (default: config)
    #[arg(long = "employee")]
    pub employee: Option<i64>,

    /// Viewer role: company, administrator, management, mechanic, supervisor, employee
    #[arg(long = "role")]
    pub role: Option<String>,

    /// Only one tab: plant, certificates or tickets
    #[arg(long = "category", value_enum)]
    pub category: Option<ReminderCategory>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Manage company projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage company equipment (plant, vehicles, ...)
    Equipment {
        #[command(subcommand)]
        action: EquipmentAction,
    },

    /// Manage the asset registry
    Asset {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Add a certificate to an asset
    Certificate {
        #[command(subcommand)]
        action: CertificateAction,
    },

    /// Manage employee tickets (licences, training records)
    Ticket {
        #[command(subcommand)]
        action: TicketAction,
    },

    /// Show expired and expiring-soon reminders
    Reminders {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export reminders to CSV or JSON
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        scope: ScopeArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import companies, assets and tickets from a JSON document
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        /// Only rows of one operation (init, add, import, export, migration_applied)
        #[arg(long = "operation", value_name = "OP")]
        operation: Option<String>,

        /// Only the most recent N rows
        #[arg(long = "last", value_name = "N")]
        last: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum CompanyAction {
    /// Create a company
    Add {
        #[arg(long)]
        name: String,
    },
    /// List companies
    List,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project for a company
    Add {
        #[arg(long)]
        company: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: Option<String>,
    },
    /// List a company's projects
    List {
        #[arg(long)]
        company: i64,
    },
}

#[derive(Subcommand)]
pub enum EquipmentAction {
    /// Register equipment for a company
    Add {
        #[arg(long)]
        company: i64,
        #[arg(long)]
        name: String,
        /// plant, vehicles, lifting, electrical, cat-genny, other
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        serial: Option<String>,

        /// Thorough examination due date (plant)
        #[arg(long = "exam-date", value_name = "DATE")]
        exam_date: Option<String>,
        #[arg(long = "exam-7", help = "Enable 7-day thorough examination reminder")]
        exam_7: bool,
        #[arg(long = "exam-30", help = "Enable 30-day thorough examination reminder")]
        exam_30: bool,

        /// MOT due date (vehicles)
        #[arg(long = "mot-date", value_name = "DATE")]
        mot_date: Option<String>,
        #[arg(long = "mot-7", help = "Enable 7-day MOT reminder")]
        mot_7: bool,
        #[arg(long = "mot-30", help = "Enable 30-day MOT reminder")]
        mot_30: bool,
    },
    /// List a company's equipment
    List {
        #[arg(long)]
        company: i64,
    },
}

#[derive(Subcommand)]
pub enum AssetAction {
    /// Register an asset
    Add {
        #[arg(long)]
        company: i64,
        #[arg(long)]
        name: String,
    },
    /// List a company's assets and their certificates
    List {
        #[arg(long)]
        company: i64,
    },
}

#[derive(Subcommand)]
pub enum CertificateAction {
    /// Attach a certificate to an asset
    Add {
        #[arg(long)]
        asset: i64,
        #[arg(long)]
        name: String,
        #[arg(long, value_name = "DATE")]
        expiry: Option<String>,
        #[arg(long = "r7", help = "Enable 7-day reminder")]
        r7: bool,
        #[arg(long = "r30", help = "Enable 30-day reminder")]
        r30: bool,
    },
}

#[derive(Subcommand)]
pub enum TicketAction {
    /// Record a ticket for an employee
    Add {
        #[arg(long)]
        employee: i64,
        #[arg(long = "type")]
        ticket_type: String,
        #[arg(long)]
        title: String,
        #[arg(long, value_name = "DATE")]
        expiry: Option<String>,
        /// Store the ticket with both reminders disabled
        #[arg(long = "no-reminder")]
        no_reminder: bool,
    },
    /// List an employee's tickets
    List {
        #[arg(long)]
        employee: i64,
    },
}
