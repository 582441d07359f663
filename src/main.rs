use std::process::ExitCode;

use clap::Parser;
use string_handling::Operation;
use tracing_subscriber::EnvFilter;

/// Run one string-handling operation and print its result.
#[derive(Parser, Debug)]
#[command(name = "string-handling")]
#[command(about = "Pure string and URL helpers on the command line")]
#[command(version)]
struct Cli {
    /// Operation name, e.g. first-word, extract-path, https-version
    operation: Option<String>,

    /// Positional arguments. List operations take the separator or searched
    /// value first, then the list elements
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,

    /// List the available operations and exit
    #[arg(short, long)]
    list: bool,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_operations() {
    for op in Operation::ALL {
        println!("{:<30} {} argument(s)", op.name(), op.arity());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let Some(name) = cli.operation.filter(|_| !cli.list) else {
        print_operations();
        return ExitCode::SUCCESS;
    };

    let result = name
        .parse::<Operation>()
        .and_then(|op| op.run(cli.args.as_slice()));

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
