// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented front end. One call to [`run`] is one session; state lives
//! only as long as the loop does.

use crate::session::Session;
use crate::settings::Settings;
use crate::utils::split_line;
use crate::{cli, commands};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Outcome of one command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands until EOF or `quit`. A failing command is reported and the
/// loop keeps going.
pub fn run(
    session: &mut Session,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    settings: &Settings,
    interactive: bool,
) -> Result<()> {
    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "{}", settings.prompt)?;
            out.flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match execute(session, &line, out, settings) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                tracing::debug!("command failed: {err:#}");
                writeln!(out, "Error: {:#}", err)?;
            }
        }
    }
    Ok(())
}

/// Parses and dispatches a single command line.
pub fn execute(
    session: &mut Session,
    line: &str,
    out: &mut dyn Write,
    settings: &Settings,
) -> Result<Flow> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Flow::Continue);
    }
    let mut words = split_line(trimmed)?;
    words.insert(0, "fintrack".to_string());

    let matches = match cli::build_cli().try_get_matches_from(words) {
        Ok(m) => m,
        // usage errors and --help both land here
        Err(e) => {
            write!(out, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
    };

    match matches.subcommand() {
        Some(("profile", sub)) => commands::profile::handle(session, sub, settings, out)?,
        Some(("tx", sub)) => commands::transactions::handle(session, sub, settings, out)?,
        Some(("report", sub)) => commands::reports::handle(session, sub, out)?,
        Some(("quit", _)) => return Ok(Flow::Quit),
        _ => {
            write!(out, "{}", cli::build_cli().render_help())?;
        }
    }
    Ok(Flow::Continue)
}
