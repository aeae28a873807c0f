// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Monthly,
    Annual,
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportPeriod::Monthly => f.write_str("Monthly"),
            ReportPeriod::Annual => f.write_str("Annual"),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(ReportPeriod::Monthly),
            "annual" => Ok(ReportPeriod::Annual),
            other => Err(format!("Unknown report period '{}' (use monthly|annual)", other)),
        }
    }
}

/// Notice shown when a report is requested. Reports are not computed yet, so
/// the ledger is never consulted; no selection yields no notice.
pub fn report_notice(period: Option<ReportPeriod>) -> Option<&'static str> {
    match period? {
        ReportPeriod::Monthly => Some("Generating Monthly Report..."),
        ReportPeriod::Annual => Some("Generating Annual Report..."),
    }
}
