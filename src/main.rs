// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::io::{self, IsTerminal};
use std::path::Path;

use fintrack::{cli, session::Session, settings::Settings, shell};

fn main() -> Result<()> {
    let matches = cli::build_app().get_matches();

    let settings = match matches.get_one::<String>("config") {
        Some(path) => Settings::load_from(Path::new(path))?,
        None => Settings::load()?,
    };
    let level = matches
        .get_one::<String>("log_level")
        .unwrap_or(&settings.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(format!("fintrack={level}"))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let mut session = Session::new();
    tracing::info!("session started");
    shell::run(&mut session, &mut input, &mut out, &settings, interactive)?;
    tracing::info!(
        transactions = session.ledger().len(),
        "session ended"
    );
    Ok(())
}
