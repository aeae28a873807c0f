// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use crate::session::{ProfileForm, Session};
use crate::settings::Settings;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use std::io::Write;

pub fn handle(
    session: &mut Session,
    m: &clap::ArgMatches,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<()> {
    match m.subcommand() {
        Some(("save", sub)) => save(session, sub, out)?,
        Some(("show", sub)) => show(session, sub, settings, out)?,
        _ => {}
    }
    Ok(())
}

fn text<'a>(sub: &'a clap::ArgMatches, id: &str) -> &'a str {
    sub.get_one::<String>(id).map(String::as_str).unwrap_or("")
}

pub fn form_from(sub: &clap::ArgMatches) -> ProfileForm {
    ProfileForm {
        first_name: text(sub, "first").to_string(),
        last_name: text(sub, "last").to_string(),
        email: text(sub, "email").to_string(),
        income: text(sub, "income").to_string(),
        savings: text(sub, "savings").to_string(),
    }
}

fn save(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    match session.save_profile(&form_from(sub)) {
        Ok(_) => writeln!(out, "User data saved!")?,
        Err(err @ ValidationError::NotANumber { .. }) => writeln!(
            out,
            "Invalid input: Please enter valid numbers for income and savings. [{}: {}]",
            err.kind(),
            err
        )?,
        Err(err) => writeln!(out, "Invalid input: [{}: {}]", err.kind(), err)?,
    }
    Ok(())
}

fn show(
    session: &Session,
    sub: &clap::ArgMatches,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(p) = session.profile() else {
        writeln!(out, "No profile saved yet")?;
        return Ok(());
    };
    if maybe_print_json(out, sub.get_flag("json"), false, p)? {
        return Ok(());
    }
    let rows = vec![
        vec!["User ID".to_string(), p.user_id.to_string()],
        vec!["First Name".to_string(), p.first_name.clone()],
        vec!["Last Name".to_string(), p.last_name.clone()],
        vec!["Email".to_string(), p.email.clone()],
        vec![
            "Monthly Income".to_string(),
            fmt_money(&p.monthly_income, &settings.currency),
        ],
        vec![
            "Savings Goal".to_string(),
            fmt_money(&p.target_savings, &settings.currency),
        ],
    ];
    writeln!(out, "{}", pretty_table(&["Field", "Value"], rows))?;
    Ok(())
}
