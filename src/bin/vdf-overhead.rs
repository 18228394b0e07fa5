use std::path::PathBuf;
use std::process;

use clap::Parser;

use vdf_cost::overhead::{format_table, overhead_table, OverheadModel, OverheadParams};

/// Prover overhead of hybrid and n-iterated Wesolowski provers.
#[derive(Parser)]
#[command(name = "vdf-overhead", version)]
struct Cli {
    /// log2 of the number of sequential squarings T
    #[arg(long = "log2-t", default_value_t = 39)]
    log2_t: u32,
    /// JSON file overriding the default hardware parameters
    #[arg(long)]
    params: Option<PathBuf>,
    /// Print the rows as JSON
    #[arg(long)]
    json: bool,
    /// Log level for diagnostics on stderr (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    vdf_cost::logging::init_with_level(cli.log_level.as_deref());

    if !(2..=62).contains(&cli.log2_t) {
        eprintln!("error: --log2-t must be between 2 and 62");
        process::exit(1);
    }
    let steps = 1u64 << cli.log2_t;

    let params = match &cli.params {
        Some(path) => match OverheadParams::load(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => OverheadParams::default(),
    };

    let model = OverheadModel::new(params);
    let rows = overhead_table(&model, steps);

    if cli.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: cannot serialize rows: {}", e);
                process::exit(1);
            }
        }
        return;
    }
    print!("{}", format_table(steps, &model, &rows));
}
