//! Bloomgate CLI - Bloom's Taxonomy Question Validation
//!
//! Command-line front end for the Bloomgate library.

use anyhow::{bail, Context, Result};
use bloomgate::prelude::*;
use bloomgate::validation::batch::load_requests;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bloomgate");

    // Pull out the global --wordlists option.
    let mut wordlists_path: Option<PathBuf> = None;
    let mut rest = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--wordlists" => {
                let path = args
                    .get(i + 1)
                    .context("--wordlists needs a file path")?;
                wordlists_path = Some(PathBuf::from(path));
                i += 2;
            }
            _ => {
                rest.push(args[i].clone());
                i += 1;
            }
        }
    }

    let Some(command) = rest.first() else {
        print_usage(program);
        return Ok(0);
    };

    match command.as_str() {
        "validate" => {
            if rest.len() < 3 {
                eprintln!("Error: Please specify a level and the question text");
                eprintln!("Usage: {} validate <level> <text...>", program);
                return Ok(2);
            }
            let validator = load_validator(wordlists_path)?;
            Ok(validate_question(&validator, &rest[1], &rest[2..].join(" ")))
        }
        "check" => {
            let Some(path) = rest.get(1) else {
                eprintln!("Error: Please specify a JSON file of questions");
                return Ok(2);
            };
            let validator = load_validator(wordlists_path)?;
            check_file(&validator, path)
        }
        "levels" => {
            let validator = load_validator(wordlists_path)?;
            list_levels(validator.wordlists());
            Ok(0)
        }
        "wordlists" => {
            let validator = load_validator(wordlists_path)?;
            print!("{}", validator.wordlists().to_toml_string()?);
            Ok(0)
        }
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(0)
        }
        other => bail!("Unknown command: {} (try '{} help')", other, program),
    }
}

fn print_usage(program: &str) {
    println!("🌸 Bloomgate - Bloom's Taxonomy Question Validation v{}", bloomgate::VERSION);
    println!();
    println!("Usage: {} [--wordlists <file.toml>] <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  validate <level> <text...>  Validate one question");
    println!("  check <questions.json>      Validate a JSON array of {{\"level\", \"text\"}} objects");
    println!("  levels                      List taxonomy levels and their keywords");
    println!("  wordlists                   Print the active wordlists as TOML");
    println!("  help                        Show this help message");
    println!();
    println!("Environment:");
    println!("  BLOOMGATE_WORDLISTS  Wordlist file used when --wordlists is not given");
    println!("  RUST_LOG             Log filter (e.g. debug)");
}

fn load_validator(path: Option<PathBuf>) -> Result<QuestionValidator> {
    let lists = Wordlists::load_or_builtin(path.as_deref()).context("Failed to load wordlists")?;
    Ok(QuestionValidator::new(Arc::new(lists)))
}

fn validate_question(validator: &QuestionValidator, level: &str, text: &str) -> i32 {
    // Typed on a command line, so case and padding are forgiven here.
    let claimed = match TaxonomyLevel::parse_lenient(level) {
        Ok(level) => ClaimedLevel::Known(level),
        Err(_) => {
            let names: Vec<_> = TaxonomyLevel::all().iter().map(|l| l.display_name()).collect();
            eprintln!("⚠️  '{}' is not a known level ({})", level, names.join(", "));
            ClaimedLevel::from_raw(level)
        }
    };

    match validator.validate(&ValidationRequest::new(claimed, text)) {
        ValidationResult::Accepted => {
            println!("✅ Accepted");
            0
        }
        ValidationResult::Rejected(rejection) => {
            println!("❌ {}", rejection);
            if let Some(fix) = rejection.suggested_fix() {
                println!("   → Suggestion: {}", fix);
            }
            1
        }
    }
}

fn check_file(validator: &QuestionValidator, path: &str) -> Result<i32> {
    let requests = load_requests(path).with_context(|| format!("Failed to read {}", path))?;
    let report = validate_batch(validator, &requests);

    println!("{}", report.to_json()?);
    eprintln!("{}", report.summary());

    Ok(if report.all_accepted() { 0 } else { 1 })
}

fn list_levels(lists: &Wordlists) {
    for level in TaxonomyLevel::all() {
        let keywords = lists.keywords_for(*level);
        println!("  📚 {} ({} keywords)", level, keywords.len());
        println!("      {}", keywords.join(", "));
        println!();
    }
    println!(
        "  🚫 {} restricted words, {} restricted phrases",
        lists.restricted_words().len(),
        lists.restricted_phrases().len()
    );
}
