use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod files;

#[derive(Parser)]
#[command(name = "pointser")]
#[command(about = "Create, sort, save and load mixed 2D/3D point collections")]
struct Cmd {
    /// Format identifier (binary, soap, xml, json, yaml, custom); overrides file extensions
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a sample collection and save it
    Create {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Load, sort (stable) and save; in place unless --output is given
    Sort {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Load in one format and save in another (formats follow the extensions)
    Convert {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Print a collection, one point per line
    Show {
        #[arg(long)]
        input: PathBuf,
        /// Skip malformed lines of the custom format instead of failing
        #[arg(long)]
        lenient: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let format = cmd.format.as_deref();
    match cmd.action {
        Action::Create { out, count, seed } => commands::create(&out, count, seed, format),
        Action::Sort { input, output } => commands::sort(&input, output.as_deref(), format),
        Action::Convert { input, output } => commands::convert(&input, &output, format),
        Action::Show { input, lenient } => {
            for p in commands::show(&input, lenient, format)? {
                println!("{p}");
            }
            Ok(())
        }
    }
}
