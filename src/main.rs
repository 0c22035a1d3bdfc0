use std::fs;
use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::Colorize;
use rpncalc::{Calculator, Outcome};

/// rpncalc evaluates reverse Polish notation expressions and supports
/// user-defined functions, like `sq x : x x *`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Lines to evaluate. When omitted, rpncalc starts an interactive
    /// session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{}'. Perhaps this file does not exist?",
                &contents
            );
            std::process::exit(1);
        })
    } else {
        contents
    };

    run_script(&script);
}

fn run_script(script: &str) {
    let mut calc = Calculator::new();
    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match calc.eval_line(line) {
            Ok(Outcome::Value(value)) => println!("{value}"),
            Ok(Outcome::Defined(name)) => println!("Registered function: {name}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

fn repl() {
    let mut calc = Calculator::new();
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("{}", "> ".blue());
        if io::stdout().flush().is_err() {
            return;
        }

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            return;
        }
        // The session's shortcut list, like the buttons of a calculator app.
        if line == "fns" {
            for name in calc.function_names() {
                println!("{name}");
            }
            continue;
        }

        match calc.eval_line(line) {
            Ok(Outcome::Value(value)) => println!("{value}"),
            Ok(Outcome::Defined(name)) => {
                println!("{}", format!("Registered function: {name}").green());
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}
