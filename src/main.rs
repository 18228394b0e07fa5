mod cli;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "blankprover",
    version,
    about = "Count the group operations of a windowed VDF prover without running it"
)]
struct Cli {
    #[command(flatten)]
    estimate: cli::estimate::EstimateArgs,
    /// Log level for diagnostics on stderr (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    vdf_cost::logging::init_with_level(cli.log_level.as_deref());
    cli::estimate::cmd_estimate(cli.estimate);
}
