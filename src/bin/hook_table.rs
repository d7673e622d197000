use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use lexigraph::render::{render_hook_table, WordEntry};
use lexigraph::Lexicon;

#[derive(Parser, Debug)]
#[command(name = "hook_table")]
#[command(about = "Read letter banks from stdin and print a hook table per bank")]
#[command(version)]
struct Args {
    /// Packed DAWG file to query
    #[arg(short, long)]
    dawg: PathBuf,

    /// Emit JSON entries instead of the HTML table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let lexicon = Lexicon::from_file(&args.dawg)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let bank = line?.trim().to_ascii_uppercase();
        if bank.is_empty() {
            continue;
        }
        let entries: Vec<WordEntry> = lexicon
            .anagram(&bank)
            .iter()
            .map(|word| WordEntry::for_word(lexicon.graph(), word))
            .collect();
        if args.json {
            println!("{}", serde_json::to_string(&entries)?);
        } else {
            print!("{}", render_hook_table(&bank, &entries));
        }
    }
    Ok(())
}
