use clap::{Parser, Subcommand, ValueEnum};
use herald_client::AlertKind;

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "Herald: reconcile notification recipients on alerting resources")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (defaults to herald.toml)
    #[arg(short, long, global = true, env = "HERALD_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log level (overrides logging.level from config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge recorded recipients against an observed collection (offline)
    Reconcile(ReconcileArgs),
    /// Align a submitted collection with the remote's response to it (offline)
    Pair(PairArgs),
    /// Report desired recipients that shadow each other
    Check(CheckArgs),
    /// List every recipient known to the team
    Recipients,
    /// Fetch an alert and refresh its recorded recipients
    Refresh(RefreshArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Trigger,
    BurnAlert,
}

impl From<KindArg> for AlertKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Trigger => AlertKind::Trigger,
            KindArg::BurnAlert => AlertKind::BurnAlert,
        }
    }
}

#[derive(clap::Args)]
pub struct ReconcileArgs {
    /// JSON file with observed recipients ("-" for stdin)
    #[arg(long)]
    pub observed: String,
    /// JSON file with recorded/desired recipients
    #[arg(long)]
    pub desired: String,
    /// Re-sort output into the desired declaration order
    #[arg(long)]
    pub declaration_order: bool,
}

#[derive(clap::Args)]
pub struct PairArgs {
    /// JSON file with the recipients that were submitted
    #[arg(long)]
    pub submitted: String,
    /// JSON file with the recipients the remote returned ("-" for stdin)
    #[arg(long)]
    pub observed: String,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// JSON file with desired recipients ("-" for stdin)
    #[arg(long)]
    pub desired: String,
}

#[derive(clap::Args)]
pub struct RefreshArgs {
    /// Alert kind
    #[arg(long, value_enum, default_value = "trigger")]
    pub kind: KindArg,
    /// Dataset the alert belongs to
    #[arg(long)]
    pub dataset: String,
    /// Alert ID
    #[arg(long)]
    pub id: String,
    /// JSON file holding the recorded recipients (missing file = nothing recorded)
    #[arg(long)]
    pub state: String,
    /// Write the refreshed recipients back to the state file
    #[arg(long)]
    pub write: bool,
    /// Re-sort output into the recorded declaration order
    #[arg(long)]
    pub declaration_order: bool,
}
