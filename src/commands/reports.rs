// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::report::ReportPeriod;
use crate::session::Session;
use anyhow::{Result, anyhow};
use std::io::Write;

pub fn handle(session: &Session, m: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let period = m
        .get_one::<String>("period")
        .map(|s| s.parse::<ReportPeriod>().map_err(|e| anyhow!(e)))
        .transpose()?;
    // nothing selected, nothing to say
    if let Some(notice) = session.generate_report(period) {
        writeln!(out, "{}", notice)?;
    }
    Ok(())
}
