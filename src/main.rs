mod index;
mod query;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use index::SuffixTrie;
use query::QueryEngine;
use server::Response;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sxi")]
#[command(about = "Suffix-membership queries over a fixed word dictionary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the word indices of dictionary entries ending with SUFFIX
    Search {
        /// Suffix to look up
        suffix: String,

        /// Path to the dictionary file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,
    },
    /// Print the number of suffix occurrences ending with SUFFIX
    Count {
        /// Suffix to look up
        suffix: String,

        /// Path to the dictionary file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,
    },
    /// Serve JSON requests from stdin until EOF
    Serve {
        /// Path to the dictionary file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,
    },
    /// Show statistics for the dictionary's suffix trie
    Stats {
        /// Path to the dictionary file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { suffix, dict } => {
            let trie = load_trie(&dict)?;
            let engine = QueryEngine::new(&trie);
            let response = Response::Indices(engine.search(&suffix).to_vec());
            println!("{}", serde_json::to_string(&response)?);
        }
        Commands::Count { suffix, dict } => {
            let trie = load_trie(&dict)?;
            let engine = QueryEngine::new(&trie);
            let response = Response::Count {
                count: engine.count_words_with_suffix(&suffix),
            };
            println!("{}", serde_json::to_string(&response)?);
        }
        Commands::Serve { dict } => {
            let trie = load_trie(&dict)?;
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            server::run_loop(&trie, stdin, stdout)?;
        }
        Commands::Stats { dict } => {
            index::stats::show_stats(&dict)?;
        }
    }

    Ok(())
}

/// Load the dictionary fresh and report the load on stderr.
/// stdout stays reserved for JSON responses.
fn load_trie(dict: &Path) -> Result<SuffixTrie> {
    let trie = SuffixTrie::from_path(dict)?;
    eprintln!(
        "sxi: loaded {} words from {}",
        trie.store().len(),
        dict.display()
    );
    Ok(trie)
}
