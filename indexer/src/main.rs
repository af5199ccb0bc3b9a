use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lse_core::{KeywordIndex, Occurrence, TOP_N};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "lse")]
#[command(about = "Keyword index over a fixed set of text documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Sources {
    /// File listing the documents to index, or a directory of .txt files
    #[arg(long)]
    docs: String,
    /// File of noise words, whitespace separated
    #[arg(long)]
    noise: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents containing either of two keywords
    Search {
        #[command(flatten)]
        sources: Sources,
        kw1: String,
        kw2: String,
        /// Maximum number of documents to print, at most 5
        #[arg(long, default_value_t = TOP_N)]
        limit: usize,
        /// Print JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the occurrence list of a keyword, or every keyword when omitted
    Keywords {
        #[command(flatten)]
        sources: Sources,
        keyword: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read "kw1 kw2" pairs from stdin and print the top results for each
    Repl {
        #[command(flatten)]
        sources: Sources,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kw1: &'a str,
    kw2: &'a str,
    matched: bool,
    results: Vec<String>,
}

#[derive(Serialize)]
struct KeywordOutput<'a> {
    keyword: &'a str,
    occurrences: &'a [Occurrence],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { sources, kw1, kw2, limit, json } => {
            let index = load(&sources)?;
            search(&index, &kw1, &kw2, limit, json)
        }
        Commands::Keywords { sources, keyword, json } => {
            let index = load(&sources)?;
            keywords(&index, keyword.as_deref(), json)
        }
        Commands::Repl { sources } => {
            let index = load(&sources)?;
            repl(&index)
        }
    }
}

fn load(sources: &Sources) -> Result<KeywordIndex> {
    let index = KeywordIndex::make_index(&sources.docs, &sources.noise)?;
    tracing::info!(
        documents = index.document_count(),
        keywords = index.keyword_count(),
        "index ready"
    );
    Ok(index)
}

fn query_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn ranked(index: &KeywordIndex, kw1: &str, kw2: &str, limit: usize) -> Option<Vec<String>> {
    index.top_search(kw1, kw2, limit.clamp(1, TOP_N))
}

fn search(index: &KeywordIndex, kw1: &str, kw2: &str, limit: usize, json: bool) -> Result<()> {
    let (kw1, kw2) = (query_term(kw1), query_term(kw2));
    let found = ranked(index, &kw1, &kw2, limit);
    if json {
        let out = SearchOutput {
            kw1: &kw1,
            kw2: &kw2,
            matched: found.is_some(),
            results: found.unwrap_or_default(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    print_results(&mut io::stdout().lock(), found.as_deref())?;
    Ok(())
}

fn keywords(index: &KeywordIndex, keyword: Option<&str>, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    match keyword {
        Some(kw) => {
            let kw = query_term(kw);
            let occurrences = index.occurrences(&kw);
            if json {
                let listing = KeywordOutput { keyword: &kw, occurrences };
                writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
            } else {
                let list: Vec<String> = occurrences.iter().map(ToString::to_string).collect();
                writeln!(out, "{kw}: [{}]", list.join(", "))?;
            }
        }
        None => {
            let mut all: Vec<(&str, &[Occurrence])> = index.keywords().collect();
            all.sort_by(|a, b| a.0.cmp(b.0));
            if json {
                let listing: Vec<KeywordOutput> = all
                    .into_iter()
                    .map(|(keyword, occurrences)| KeywordOutput { keyword, occurrences })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
            } else {
                for (kw, occs) in all {
                    let top = occs.first().map(ToString::to_string).unwrap_or_default();
                    writeln!(out, "{kw}\t{} documents\ttop {top}", occs.len())?;
                }
            }
        }
    }
    Ok(())
}

fn repl(index: &KeywordIndex) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "Enter two keywords per line, blank line to quit:")?;
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let (Some(kw1), Some(kw2)) = (words.next(), words.next()) else {
            if line.trim().is_empty() {
                break;
            }
            writeln!(out, "need two keywords")?;
            continue;
        };
        let found = ranked(index, &query_term(kw1), &query_term(kw2), TOP_N);
        print_results(&mut out, found.as_deref())?;
        out.flush()?;
    }
    Ok(())
}

fn print_results<W: Write>(out: &mut W, found: Option<&[String]>) -> io::Result<()> {
    match found {
        Some(docs) if !docs.is_empty() => {
            for (rank, doc) in docs.iter().enumerate() {
                writeln!(out, "{}. {doc}", rank + 1)?;
            }
            Ok(())
        }
        _ => writeln!(out, "no matches"),
    }
}
