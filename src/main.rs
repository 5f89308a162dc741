use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use lexcalc::{
    driver::driver::{evaluate_and_report, report, Report},
    logging,
};

#[derive(Parser)]
#[command(
    name = "lexcalc",
    about = "Evaluates left-to-right chains of integer additions and subtractions",
    version
)]
struct Cli {
    /// Expressions to evaluate (reads one per line from stdin when omitted)
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print only results and error reports
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut all_ok = true;
    let mut first = true;
    let mut run = |source: &str| {
        let outcome = evaluate_and_report(source);
        if !first && !cli.quiet {
            println!();
        }
        first = false;
        print_report(&outcome, cli.quiet);
        all_ok &= outcome.is_success();
    };

    if cli.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.is_empty() => continue,
                Ok(line) => run(&line),
                Err(error) => {
                    eprintln!("{}", report("", &error));
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        for expression in &cli.expressions {
            run(expression);
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(outcome: &Report, quiet: bool) {
    if !quiet {
        println!("{}", outcome.transcript);
        return;
    }

    match &outcome.outcome {
        Ok(result) => println!("{}", result),
        Err(message) => println!("{}", message),
    }
}
