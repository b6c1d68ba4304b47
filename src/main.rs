//! Minterm - CLI Entry Point
//!
//! Commands:
//! - `minterm show <term>` - Inspect a term's digits, length, and value
//! - `minterm diff <left> <right>` - Count differing digit positions

use clap::{Parser, Subcommand};
use minterm::{Digit, Term};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "minterm")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Minterm and implicant primitives for Quine-McCluskey Boolean minimization")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a single term
    Show {
        /// Term: a decimal integer (10) or a digit string (0b1010, 1-0x)
        term: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Count the digit positions at which two terms differ
    Diff {
        /// Left term (decimal integer or digit string)
        left: String,
        /// Right term (decimal integer or digit string)
        right: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show { term, json }) => {
            show_term(&term, json);
        }
        Some(Commands::Diff { left, right, json }) => {
            diff_terms(&left, &right, json);
        }
        None => {
            println!("Minterm v0.1.0");
            println!("Quine-McCluskey term primitives");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_terms();
        }
    }
}

/// Read a term from a command-line argument.
///
/// Bare decimal numbers are taken as integer values; anything else
/// (including the `0b` prefix form) is parsed as a digit string.
fn parse_term_arg(arg: &str) -> Term {
    let trimmed = arg.trim();

    if !trimmed.starts_with("0b") {
        if let Ok(value) = trimmed.parse::<u64>() {
            return Term::from_value(value);
        }
    }

    match Term::parse(trimmed) {
        Ok(term) => term,
        Err(e) => {
            eprintln!("Invalid term '{}': {}", arg, e);
            std::process::exit(1);
        }
    }
}

#[derive(Serialize)]
struct ShowOutput {
    term: String,
    length: usize,
    value: Option<u64>,
}

fn show_term(arg: &str, json: bool) {
    let term = parse_term_arg(arg);

    if json {
        let out = ShowOutput {
            term: term.to_string(),
            length: term.len(),
            value: term.value(),
        };
        println!("{}", serde_json::to_string_pretty(&out).expect("serializable output"));
        return;
    }

    println!("Term:   {}", term);
    println!("Length: {}", term.len());
    match term.value() {
        Some(v) => println!("Value:  {}", v),
        None => println!("Value:  (covers multiple values)"),
    }

    println!();
    for i in (0..term.len()).rev() {
        let digit = term.digit(i);
        let meaning = match digit {
            Digit::Set => "set",
            Digit::Unset => "unset",
            Digit::DontCare => "don't care",
        };
        println!("  2^{:<2} {} ({})", i, digit, meaning);
    }
}

#[derive(Serialize)]
struct DiffOutput {
    left: String,
    right: String,
    differences: usize,
    combinable: bool,
}

fn diff_terms(left_arg: &str, right_arg: &str, json: bool) {
    let left = parse_term_arg(left_arg);
    let right = parse_term_arg(right_arg);
    let differences = Term::count_differences(&left, &right);

    if json {
        let out = DiffOutput {
            left: left.to_string(),
            right: right.to_string(),
            differences,
            combinable: differences == 1,
        };
        println!("{}", serde_json::to_string_pretty(&out).expect("serializable output"));
        return;
    }

    println!("Left:        {}", left);
    println!("Right:       {}", right);
    println!("Differences: {}", differences);
    if differences == 1 {
        println!("The terms differ in exactly one position (combinable).");
    }
}

fn demo_terms() {
    println!("━━━ Term Demo ━━━");
    println!();

    println!("Digits:");
    println!("  1 = set, 0 = unset, - = don't care");
    println!();

    let five = Term::from_value(5);
    println!("Term from 5: {} (length {})", five, five.len());
    println!(
        "  digit(0)={} digit(1)={} digit(2)={} digit(3)={}",
        five.digit(0),
        five.digit(1),
        five.digit(2),
        five.digit(3)
    );
    println!();

    let a = Term::from_value(0b0100);
    let b = Term::from_value(0b0110);
    println!(
        "{} vs {} differ in {} position(s)",
        a,
        b,
        Term::count_differences(&a, &b)
    );

    let implicant = Term::parse("01-0").expect("valid digit string");
    println!(
        "{} vs {} differ in {} position(s)",
        a,
        implicant,
        Term::count_differences(&a, &implicant)
    );
    println!();

    println!("✓ Term primitives working!");
}
