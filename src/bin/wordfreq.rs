//! Count and compare word frequencies of text corpora.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wordfreq_hash::{
    compare, read_tokens, ChainedTable, ProbedTable, WordTable, DEFAULT_CAPACITY,
};

#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Squared frequency error between two corpora, plus load factors.
    Compare {
        #[clap(value_parser)]
        first: PathBuf,
        #[clap(value_parser)]
        second: PathBuf,
        /// Buckets or slots per table.
        #[clap(short, long, value_parser, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },
    /// Occurrences of one word in each corpus under both table variants.
    Count {
        #[clap(value_parser, required = true)]
        files: Vec<PathBuf>,
        #[clap(short, long, value_parser)]
        word: String,
        #[clap(short, long, value_parser, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },
}

struct Tables {
    probed: ProbedTable,
    chained: ChainedTable,
}

fn load(path: &Path, capacity: usize) -> Result<Tables, Box<dyn Error>> {
    let tokens = read_tokens(path)?;
    let mut probed = ProbedTable::with_capacity(capacity)?;
    let mut chained = ChainedTable::with_capacity(capacity)?;
    for token in &tokens {
        probed.try_insert(token)?;
        chained.insert(token);
    }
    tracing::info!(
        path = %path.display(),
        words = chained.total_insertions(),
        unique = chained.unique_keys(),
        "counted corpus"
    );
    Ok(Tables { probed, chained })
}

fn run_compare(first: &Path, second: &Path, capacity: usize) -> Result<(), Box<dyn Error>> {
    let a = load(first, capacity)?;
    let b = load(second, capacity)?;

    let result = compare(&a.probed, &b.chained);
    println!("Total square error: {}", result.squared_error);
    println!(
        "Most different word: {}",
        result.most_divergent.as_deref().unwrap_or("")
    );
    println!("--------------------------------------");
    println!("{} (probed): {}", first.display(), a.probed.load_factor());
    println!("{} (chained): {}", first.display(), a.chained.load_factor());
    println!();
    println!("{} (probed): {}", second.display(), b.probed.load_factor());
    println!("{} (chained): {}", second.display(), b.chained.load_factor());
    Ok(())
}

fn run_count(files: &[PathBuf], word: &str, capacity: usize) -> Result<(), Box<dyn Error>> {
    for (i, path) in files.iter().enumerate() {
        if i > 0 {
            println!("--------------------");
        }
        let t = load(path, capacity)?;
        println!("{} (probed): {}", path.display(), t.probed.find_count(word));
        println!("{} (chained): {}", path.display(), t.chained.find_count(word));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = <Args as clap::Parser>::parse();
    let result = match args.command {
        Command::Compare {
            first,
            second,
            capacity,
        } => run_compare(&first, &second, capacity),
        Command::Count {
            files,
            word,
            capacity,
        } => run_count(&files, &word, capacity),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
