// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process;
use std::time::Instant;

use clap::Parser;
use repmeasure::{Measurer, Report};

mod cli;
use cli::display;
use cli::progress::Progress;
use cli::Cli;

/// Exit status for malformed command lines (255 on Unix).
const USAGE_EXIT: i32 = -1;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too, on stdout
            let code = if e.use_stderr() { USAGE_EXIT } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let started = Instant::now();
    let file = cli.file.display().to_string();
    if !cli.quiet {
        display::run_header(&file);
    }

    let mut measurer = Measurer::with_observer(cli.options(), Progress::new(cli.quiet));
    let report = match measurer.run(&cli.file) {
        Ok(report) => report,
        Err(e) => {
            display::error(&e.to_string());
            return e.exit_code();
        }
    };

    if let Err(e) = print_report(&report, cli.json) {
        display::error(&e);
        return 1;
    }
    if !cli.quiet {
        display::run_footer(report.n, started.elapsed());
    }
    0
}

fn print_report(report: &Report, json: bool) -> Result<(), String> {
    if json {
        let line = serde_json::to_string(report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", line);
    } else {
        println!("{}", report);
    }
    Ok(())
}
