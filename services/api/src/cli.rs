use crate::commands::{
    run_ai_parse, run_audit, run_branding, run_normalize, AiParseArgs, AuditArgs, BrandingArgs,
    NormalizeArgs,
};
use crate::server;
use brandpilot::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "brandpilot",
    about = "Score profiles, track branding completion and normalize AI output from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Audit a profile snapshot (JSON) or a CSV export of profiles
    Audit(AuditArgs),
    /// Compute branding questionnaire completion from a JSON document
    Branding(BrandingArgs),
    /// Normalize free text into a list or decode embedded JSON
    Normalize(NormalizeArgs),
    /// Recover the JSON payload from a generated AI response
    AiParse(AiParseArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Audit(args) => run_audit(args),
        Command::Branding(args) => run_branding(args),
        Command::Normalize(args) => run_normalize(args),
        Command::AiParse(args) => run_ai_parse(args),
    }
}
