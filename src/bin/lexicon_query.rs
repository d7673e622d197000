use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use lexigraph::Lexicon;

#[derive(Parser, Debug)]
#[command(name = "lexicon_query")]
#[command(about = "One-shot lexicon queries against a packed DAWG file")]
#[command(version)]
struct Args {
    /// Packed DAWG file to query
    #[arg(short, long)]
    dawg: PathBuf,

    /// Test whether a word is in the lexicon
    #[arg(long)]
    check: Option<String>,

    /// Find all words matching a pattern (? matches any letter)
    #[arg(long)]
    pattern: Option<String>,

    /// Find all words formable from a letter bank (? is a blank)
    #[arg(long)]
    anagram: Option<String>,

    /// Show front and back hooks for a word
    #[arg(long)]
    hooks: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let lexicon = Lexicon::from_file(&args.dawg)?;

    if let Some(word) = args.check {
        let word = word.to_ascii_uppercase();
        let verdict = if lexicon.is_valid_word(&word) { "" } else { " NOT" };
        println!("{}: is{} a valid word", word, verdict);
    }

    if let Some(pattern) = args.pattern {
        let pattern = pattern.to_ascii_uppercase();
        for word in lexicon.find_pattern(&pattern) {
            println!("{}", word);
        }
    }

    if let Some(bank) = args.anagram {
        let bank = bank.to_ascii_uppercase();
        for word in lexicon.anagram(&bank) {
            println!("{}", word);
        }
    }

    if let Some(word) = args.hooks {
        let word = word.to_ascii_uppercase();
        let hooks = lexicon.hooks();
        let front: String = hooks.front_hooks(&word).into_iter().collect();
        let back: String = hooks.back_hooks(&word).into_iter().collect();
        println!(
            "{} {}{}{} {}",
            front,
            if hooks.has_internal_front_hook(&word) { "-" } else { "" },
            word,
            if hooks.has_internal_back_hook(&word) { "-" } else { "" },
            back
        );
    }

    Ok(())
}
