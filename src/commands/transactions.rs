// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use crate::models::TransactionKind;
use crate::session::{Session, TransactionForm};
use crate::settings::Settings;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, anyhow};
use std::io::Write;

pub fn handle(
    session: &mut Session,
    m: &clap::ArgMatches,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub, settings, out)?,
        Some(("list", sub)) => list(session, sub, out)?,
        _ => {}
    }
    Ok(())
}

fn text<'a>(sub: &'a clap::ArgMatches, id: &str) -> &'a str {
    sub.get_one::<String>(id).map(String::as_str).unwrap_or("")
}

/// Builds the raw form. A date that is given but not a calendar date is an
/// error here; an absent date is left for validation to report.
pub fn form_from(sub: &clap::ArgMatches) -> Result<TransactionForm> {
    let date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?;
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionKind>().map_err(|e| anyhow!(e)))
        .transpose()?;
    Ok(TransactionForm {
        date,
        amount: text(sub, "amount").to_string(),
        category: text(sub, "category").to_string(),
        kind,
        description: text(sub, "description").to_string(),
    })
}

fn add(
    session: &mut Session,
    sub: &clap::ArgMatches,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<()> {
    let form = form_from(sub)?;
    match session.add_transaction(&form) {
        Ok(tx) => {
            writeln!(out, "Transaction added!")?;
            writeln!(
                out,
                "#{} {} {} on {} ({}: {})",
                tx.transaction_id,
                tx.kind,
                fmt_money(&tx.amount, &settings.currency),
                tx.date,
                tx.category,
                tx.description
            )?;
        }
        Err(err @ ValidationError::NotANumber { .. }) => writeln!(
            out,
            "Invalid input: Please enter a valid amount. [{}: {}]",
            err.kind(),
            err
        )?,
        Err(err @ ValidationError::MissingField(_)) => writeln!(
            out,
            "Invalid input: Ensure all fields are filled out correctly. [{}: {}]",
            err.kind(),
            err
        )?,
    }
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = session.ledger().rows();
    if !maybe_print_json(out, json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data.iter().map(|r| r.cells()).collect();
        writeln!(
            out,
            "{}",
            pretty_table(
                &["ID", "Date", "Amount", "Category", "Type", "Description"],
                rows,
            )
        )?;
    }
    Ok(())
}
