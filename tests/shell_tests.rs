// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::{
    session::Session,
    settings::Settings,
    shell::{self, Flow},
};
use std::io::Cursor;

fn run_script(session: &mut Session, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    shell::run(session, &mut input, &mut out, &Settings::default(), false).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn full_session_script() {
    let mut s = Session::new();
    let out = run_script(
        &mut s,
        r#"
# profile first
profile save --first-name Ada --last-name Lovelace --email ada@example.com --income 3000.50 --savings 500
tx add --date 2024-01-15 --amount 42.00 --category Food --type expense --description "Lunch with Bo"
tx add --date 2024-01-16 --amount forty --category Food --type expense --description Dinner
tx add --date 2024-01-31 --amount 3000.50 --category Salary --type income --description January
report --period monthly
report
"#,
    );
    assert!(out.contains("User data saved!"));
    assert_eq!(out.matches("Transaction added!").count(), 2);
    assert!(out.contains("Please enter a valid amount"));
    assert_eq!(out.matches("Generating").count(), 1);
    assert!(out.contains("Generating Monthly Report..."));
    assert_eq!(s.ledger().len(), 2);
    assert_eq!(s.ledger().get(1).unwrap().description, "Lunch with Bo");
    assert_eq!(s.ledger().get(2).unwrap().category, "Salary");
}

#[test]
fn errors_do_not_stop_the_session() {
    let mut s = Session::new();
    let out = run_script(
        &mut s,
        "bogus\ntx add --date nope\nprofile save --income 1 --savings 1 --first-name \"Ada\nprofile save --income 1 --savings 1\n",
    );
    assert!(out.contains("Error: Invalid date"));
    assert!(out.contains("Unterminated"));
    assert!(out.contains("User data saved!"));
    assert!(s.profile().is_some());
}

#[test]
fn quit_stops_reading() {
    let mut s = Session::new();
    let out = run_script(&mut s, "report --period annual\nexit\nreport --period monthly\n");
    assert!(out.contains("Generating Annual Report..."));
    assert!(!out.contains("Monthly"));
}

#[test]
fn execute_signals_quit() {
    let mut s = Session::new();
    let mut out = Vec::new();
    let settings = Settings::default();
    assert_eq!(
        shell::execute(&mut s, "   ", &mut out, &settings).unwrap(),
        Flow::Continue
    );
    assert_eq!(
        shell::execute(&mut s, "quit", &mut out, &settings).unwrap(),
        Flow::Quit
    );
    assert!(out.is_empty());
}

#[test]
fn help_is_printed_not_fatal() {
    let mut s = Session::new();
    let out = run_script(&mut s, "help\ntx --help\n");
    assert!(out.contains("profile"));
    assert!(out.contains("list"));
}

#[test]
fn prompt_only_when_interactive() {
    let mut s = Session::new();
    let mut input = Cursor::new(b"report --period monthly\n".to_vec());
    let mut out = Vec::new();
    shell::run(&mut s, &mut input, &mut out, &Settings::default(), true).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("fintrack> "));
    assert!(text.contains("Generating Monthly Report..."));
}

#[test]
fn negative_money_through_the_shell() {
    let mut s = Session::new();
    let out = run_script(&mut s, "profile save --income -20 --savings 0\n");
    assert!(out.contains("User data saved!"));
    assert_eq!(
        s.profile().unwrap().monthly_income,
        rust_decimal::Decimal::new(-20, 0)
    );
}
