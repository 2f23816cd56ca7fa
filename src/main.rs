use clap::{Parser, Subcommand};
use nova::AppError;

#[derive(Parser)]
#[command(name = "nova")]
#[command(version)]
#[command(about = "Console for a universe-governance server", long_about = None)]
struct Cli {
    /// Server root URL (falls back to NOVA_BACKEND_URL, then http://localhost:8000)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show universe metadata and the proposal list
    #[clap(visible_alias = "s")]
    Show,
    /// Create a universe, then show the refreshed dashboard
    #[clap(visible_alias = "cu")]
    CreateUniverse {
        /// Name for the new universe
        name: String,
    },
    /// File a proposal, then show the refreshed dashboard
    #[clap(visible_alias = "p")]
    Propose {
        /// Proposal text
        text: String,
    },
    /// Cast a vote on a proposal, then show the refreshed dashboard
    #[clap(visible_alias = "v")]
    Vote {
        /// Proposal identifier
        id: String,
        /// Vote value, e.g. yes or no (meaning is owned by the server)
        choice: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let server = cli.server.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Show => nova::show(server),
        Commands::CreateUniverse { name } => nova::create_universe(server, &name),
        Commands::Propose { text } => nova::propose(server, &text),
        Commands::Vote { id, choice } => nova::vote(server, &id, &choice),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
