use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use lexigraph::GraphBuilder;

#[derive(Parser, Debug)]
#[command(name = "build_dawg")]
#[command(about = "Build a packed DAWG file from a newline-separated word list")]
#[command(version)]
struct Args {
    /// Word list file, one word per line
    #[arg(short, long)]
    wordlist: PathBuf,

    /// Output path for the packed DAWG
    #[arg(short, long, default_value = "lexicon.dat")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = GraphBuilder::new();
    for line in BufReader::new(File::open(&args.wordlist)?).lines() {
        let word = line?.trim().to_ascii_uppercase();
        if !word.is_empty() {
            builder.add_words([word]);
        }
    }

    let graph = builder.build()?;
    fs::write(&args.output, graph.to_bytes())?;
    println!(
        "wrote {} words ({} nodes) to {}",
        builder.word_count(),
        graph.node_count(),
        args.output.display()
    );
    Ok(())
}
