// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, builder::PossibleValuesParser};

/// Process-level flags of the `fintrack` binary.
pub fn build_app() -> Command {
    Command::new("fintrack")
        .version(clap::crate_version!())
        .about("Personal finance tracker: profile, transactions and reports for one session")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Settings file (defaults to the platform config dir)"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Override the configured log level (error|warn|info|debug|trace)"),
        )
}

/// Grammar of the commands typed inside a session.
pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Commands available in a fintrack session")
        .disable_version_flag(true)
        .subcommand(
            Command::new("profile")
                .about("User profile form")
                .subcommand(
                    Command::new("save")
                        .about("Save (replace) the user profile")
                        .arg(text_arg("first", "first-name", "First name"))
                        .arg(text_arg("last", "last-name", "Last name"))
                        .arg(text_arg("email", "email", "Email"))
                        .arg(text_arg("income", "income", "Monthly income"))
                        .arg(text_arg("savings", "savings", "Savings goal")),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show the current profile")
                        .arg(flag("json", "Print as JSON")),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Add a transaction to the ledger")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Transaction date"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .allow_hyphen_values(true)
                                .help("Amount"),
                        )
                        .arg(text_arg("category", "category", "Category"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(PossibleValuesParser::new(["income", "expense"]))
                                .ignore_case(true)
                                .help("Transaction type"),
                        )
                        .arg(text_arg("description", "description", "Description")),
                )
                .subcommand(
                    Command::new("list")
                        .about("Show the ledger table")
                        .arg(flag("json", "Print as JSON"))
                        .arg(flag("jsonl", "Print one JSON object per line")),
                ),
        )
        .subcommand(
            Command::new("report").about("Generate a report").arg(
                Arg::new("period")
                    .long("period")
                    .value_parser(PossibleValuesParser::new(["monthly", "annual"]))
                    .ignore_case(true)
                    .help("Report period"),
            ),
        )
        .subcommand(Command::new("quit").alias("exit").about("End the session"))
}

// free text and signed numbers may start with '-'
fn text_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .allow_hyphen_values(true)
        .help(help)
}

fn flag(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).action(ArgAction::SetTrue).help(help)
}
