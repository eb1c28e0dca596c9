mod logger;
mod scan;
mod set;
mod view;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a directory tree for localization file groups.
    Scan {
        /// Root directory to search
        root: String,

        /// Print the groups as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Print the key/value pairs of a single .strings file.
    View {
        /// The .strings file to print
        file: String,
    },

    /// Set one key in a .strings file, rewriting it sorted by key.
    Set {
        /// The .strings file to update
        file: String,
        /// Localization string key
        key: String,
        /// New value for the key
        value: String,
    },
}

fn main() {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let result = match args.commands {
        Commands::Scan { root, json } => scan::run_scan_command(root, json),
        Commands::View { file } => view::run_view_command(file),
        Commands::Set { file, key, value } => set::run_set_command(file, key, value),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
