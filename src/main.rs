use clap::Parser;
use error::ConsoleReporter;
use scanner::Scanner;
use std::{
    error::Error,
    fs,
    io::{self, Write},
};

mod error;
mod scanner;
mod token;

#[derive(Parser, Debug)]
struct Args {
    filename: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.filename {
        Some(filename) => run_script(&filename),
        None => repl(),
    }?;

    Ok(())
}

fn run_script(filename: &str) -> Result<(), Box<dyn Error>> {
    let source = String::from_utf8(fs::read(filename)?)?;
    let mut reporter = ConsoleReporter::new();

    for token in Scanner::new(source).scan_tokens(&mut reporter) {
        println!("{}", token);
    }

    if reporter.had_error() {
        std::process::exit(65);
    }

    Ok(())
}

fn repl() -> Result<(), Box<dyn Error>> {
    let mut reporter = ConsoleReporter::new();
    loop {
        let mut buf = String::new();
        io::stdout().write_all(b"> ")?;
        io::stdout().flush()?;
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(());
        }

        for token in Scanner::new(buf).scan_tokens(&mut reporter) {
            println!("{}", token);
        }
        // A bad line shouldn't poison the next one.
        reporter.reset();
    }
}
