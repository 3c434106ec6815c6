//! `rfshop`: scheduling dashboard data from the command line.
//!
//! Run with: `rfshop <command>`
//!
//! This is a CLI tool for shop staff, so `println!` and `eprintln!` are
//! used for user-facing output; diagnostics go through `tracing`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::ExitCode;

mod commands;
mod report;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str);
    let rest = args.get(1..).unwrap_or_default();

    if matches!(command, Some("help" | "--help" | "-h") | None) {
        print_help();
        return ExitCode::SUCCESS;
    }

    let manager = match commands::bootstrap() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Startup failed: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Some("login") => commands::login(&manager, rest.first().cloned()).await,
        Some("sync") => commands::sync(&manager, rest.iter().any(|a| a == "--json")).await,
        Some("options") => commands::options(&manager, rest.first().map(String::as_str)).await,
        Some("set-quote") => match rest.split_first() {
            Some((record_id, assignments)) => {
                commands::set_quote(&manager, record_id, assignments).await
            }
            None => Err(anyhow::anyhow!("Usage: rfshop set-quote <record-id> <Field=Value>...")),
        },
        Some("line-status") => match rest.split_first() {
            Some((status, record_ids)) => {
                commands::set_line_status(&manager, status, record_ids).await
            }
            None => Err(anyhow::anyhow!("Usage: rfshop line-status <status> <record-id>...")),
        },
        Some("logout") => commands::logout(&manager),
        Some(unknown) => {
            eprintln!("Unknown command: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown command"))
        }
        None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("RFShop Scheduler");
    println!();
    println!("USAGE:");
    println!("    rfshop <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    login [token]                   Authenticate (token defaults to $RFSHOP_AIRTABLE_TOKEN)");
    println!("    sync [--json]                   Load active quotes and their lines");
    println!("    options [field]                 Show select options (live or default)");
    println!("    set-quote <id> <Field=Value>... Update scheduling fields of one quote");
    println!("    line-status <status> <id>...    Set the build status of many build lines");
    println!("    logout                          Forget the stored token");
    println!("    help                            Show this help message");
}
