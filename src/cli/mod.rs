pub mod estimate;

use std::process;

use vdf_cost::EstimateError;

pub const USAGE: &str = "3 arguments are required: log_2(T), the size of a block (in bits), \
and the number of blocks per stored checkpoint.";

/// Print the usage line and stop. Usage problems are not failures: the
/// process exits with status 0.
pub fn exit_with_usage(error: Option<&EstimateError>) -> ! {
    if let Some(e) = error {
        eprintln!("error: {}", e);
    }
    println!("{}", USAGE);
    process::exit(0);
}
