use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Isolation;

#[cfg(feature = "instrumentation")]
fn init_instrumentation() {
    if let Err(err) = isolation::instrumentation::init_tracing() {
        eprintln!("Failed to initialize tracing: {}", err);
    }
}

#[cfg(not(feature = "instrumentation"))]
fn init_instrumentation() {}

fn main() {
    env_logger::init();
    init_instrumentation();

    Isolation::from_args().execute();
}
