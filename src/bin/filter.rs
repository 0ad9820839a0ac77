// Boolmatch Filter CLI
// Command-line interface for matching text against a boolean expression

use boolmatch::Matcher;
use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Boolean Text Filter - match documents against a search expression
#[derive(Parser, Debug)]
#[command(name = "filter")]
#[command(
    about = "Match text against a boolean search expression (AND/OR/NOT/NEAR/ONEAR, wildcards, phrases)",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Search expression, e.g. 'apple AND (orange OR "blood orange")'
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// Documents to match; reads stdin line by line when omitted
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Print the hit sentence for each matching document
    #[arg(short, long)]
    snippet: bool,

    /// Print non-matching documents instead
    #[arg(short = 'v', long)]
    invert: bool,

    /// Print only the number of matching documents
    #[arg(short, long)]
    count: bool,

    /// Show the compiled expression before matching
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut matcher = match Matcher::new(&args.expression) {
        Ok(matcher) => matcher,
        Err(err) => {
            eprintln!("filter: {}", err);
            return ExitCode::from(2);
        }
    };

    if args.verbose {
        println!("Expression: {}", matcher);
        println!("Terms: {}\n", matcher.term_count());
    }

    let mut matched = 0usize;

    if args.texts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("filter: read error: {}", err);
                    break;
                }
            };
            matched += report(&mut matcher, &line, &args) as usize;
        }
    } else {
        for text in &args.texts {
            matched += report(&mut matcher, text, &args) as usize;
        }
    }

    if args.count {
        println!("{}", matched);
    }

    if matched > 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Match one document and print it per the output flags; returns whether
/// it counted as a hit
fn report(matcher: &mut Matcher, text: &str, args: &Args) -> bool {
    if args.snippet && !args.invert {
        let result = matcher.search(text);
        if result.has_match() {
            if !args.count {
                println!("{}", result.hit_sentence());
            }
            return true;
        }
        return false;
    }

    let is_match = matcher.is_match(text);
    let selected = is_match != args.invert;
    if selected && !args.count {
        println!("{}", text);
    }
    // exit status reflects real matches even under --invert
    is_match
}
