// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! State owned by one running session: the current profile and the ledger.
//!
//! Every user action goes through [`Session`] and runs to completion before
//! the next one. A rejected action leaves the state as it was.

use crate::error::ValidationError;
use crate::ledger::Ledger;
use crate::models::{Profile, TransactionKind, TransactionRecord};
use crate::report::{ReportPeriod, report_notice};
use crate::validate::{validate_profile, validate_transaction};
use chrono::NaiveDate;

/// The single session user always gets this id.
pub const SESSION_USER_ID: u32 = 1;

/// Raw input of the profile form.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub income: String,
    pub savings: String,
}

/// Raw input of the transaction form. Date and type come from closed
/// pickers upstream and may be left unset.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub date: Option<NaiveDate>,
    pub amount: String,
    pub category: String,
    pub kind: Option<TransactionKind>,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct Session {
    profile: Option<Profile>,
    ledger: Ledger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Replaces the profile wholesale. Earlier ledger records keep the
    /// snapshot they were built with.
    pub fn save_profile(&mut self, form: &ProfileForm) -> Result<&Profile, ValidationError> {
        let profile = validate_profile(
            SESSION_USER_ID,
            &form.first_name,
            &form.last_name,
            &form.email,
            &form.income,
            &form.savings,
        )
        .inspect_err(|err| tracing::warn!(kind = err.kind(), "profile rejected: {err}"))?;
        tracing::debug!(user_id = profile.user_id, "profile saved");
        Ok(self.profile.insert(profile))
    }

    pub fn add_transaction(
        &mut self,
        form: &TransactionForm,
    ) -> Result<&TransactionRecord, ValidationError> {
        let record = validate_transaction(
            self.profile.as_ref(),
            self.ledger.next_id(),
            form.date,
            &form.amount,
            &form.category,
            form.kind,
            &form.description,
        )
        .inspect_err(|err| tracing::warn!(kind = err.kind(), "transaction rejected: {err}"))?;
        tracing::debug!(
            transaction_id = record.transaction_id,
            kind = %record.kind,
            "transaction appended"
        );
        Ok(self.ledger.append(record))
    }

    pub fn generate_report(&self, period: Option<ReportPeriod>) -> Option<&'static str> {
        let notice = report_notice(period);
        tracing::debug!(period = ?period, "report requested");
        notice
    }
}
