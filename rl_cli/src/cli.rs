use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a prompt to the relay backend and stream the reply.
    Run {
        #[arg()]
        prompt: String,
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check that the backend is up.
    Ping,
}
