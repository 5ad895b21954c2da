//! Spanish Name Generator demo
//!
//! Prints a few batches of generated names, or a batch built from a JSON
//! options file.

use std::path::PathBuf;

use clap::Parser;
use nombres::{options, ChainedSeeder, FullName, FullNameOptions, NameGenerator, WordTables};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Generate random Spanish personal names
#[derive(Parser)]
#[command(name = "nombres", version)]
struct Cli {
    /// Start the seed chain at this value for a reproducible run (0 = clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Names per batch (default 10, 30 for the mixed batch)
    #[arg(long)]
    count: Option<usize>,

    /// JSON file with full-name options; prints a single batch
    #[arg(long)]
    options: Option<PathBuf>,

    /// JSON file with custom tables: {"male": [..], "female": [..], "surnames": [..]}
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Print batches as JSON instead of comma-separated text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Batch {
    title: String,
    names: Vec<FullName>,
}

/// (title, male probability, two-surnames probability, default count)
const DEMO_BATCHES: &[(&str, i32, i32, usize)] = &[
    ("Nombres de varón con dos apellidos", 100, 100, 10),
    ("Nombres de varón con un apellido", 100, 0, 10),
    ("Nombres de mujer con dos apellidos", 0, 100, 10),
    ("Nombres de mujer con un apellido", 0, 0, 10),
    ("Nombres aleatorios", 50, 50, 30),
];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let tables = match &cli.tables {
        Some(path) => {
            info!("Loading tables from {}", path.display());
            WordTables::from_json_file(path)?
        }
        None => WordTables::builtin(),
    };
    let seeds = cli.seed.map(ChainedSeeder::from_seed).unwrap_or_default();
    let generator = NameGenerator::with_tables(tables, seeds);

    let batches = match &cli.options {
        Some(path) => {
            let opts: FullNameOptions = options::from_json_file(path)?;
            info!("Generating with {:?}", opts);
            vec![batch(&generator, "Nombres", &opts, cli.count.unwrap_or(10))]
        }
        None => DEMO_BATCHES
            .iter()
            .map(|&(title, male, two_surnames, count)| {
                let opts = FullNameOptions {
                    male_probability: male,
                    two_surnames_probability: two_surnames,
                    ..FullNameOptions::default()
                };
                batch(&generator, title, &opts, cli.count.unwrap_or(count))
            })
            .collect(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&batches)?);
    } else {
        for (i, batch) in batches.iter().enumerate() {
            print_batch(batch, i != 0);
        }
    }

    Ok(())
}

fn batch(generator: &NameGenerator, title: &str, opts: &FullNameOptions, count: usize) -> Batch {
    Batch {
        title: title.to_string(),
        names: (0..count).map(|_| generator.full_name_parts(opts)).collect(),
    }
}

fn print_batch(batch: &Batch, blank_line_above: bool) {
    if blank_line_above {
        println!();
    }
    println!("{}", batch.title);
    println!("{}", "=".repeat(batch.title.chars().count()));

    let names: Vec<String> = batch.names.iter().map(FullName::to_string).collect();
    println!("{}", names.join(", "));
}
