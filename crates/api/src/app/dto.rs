use serde::{Deserialize, Serialize};

use libris_circulation::{Loan, UserAccount};
use libris_core::{Entity, Money, SiteId};
use libris_infra::handlers::UserSummary;

// -------------------------
// Request DTOs
// -------------------------
//
// Commands whose every field travels in the body are deserialized straight
// into the handler command types; only path-split commands need a DTO.

#[derive(Debug, Deserialize)]
pub struct ReceiveTransferRequest {
    pub target_site_id: SiteId,
}

// -------------------------
// Response DTOs
// -------------------------

/// Uniform reply to every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    pub error_code: Option<String>,
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommandResponse {
    pub fn accepted(id: impl ToString) -> Self {
        Self {
            success: true,
            error_code: None,
            id: Some(id.to_string()),
            penalty: None,
            message: None,
        }
    }

    pub fn rejected(code: &str) -> Self {
        Self {
            success: false,
            error_code: Some(code.to_string()),
            id: None,
            penalty: None,
            message: None,
        }
    }

    pub fn fault(code: &str, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::rejected(code)
        }
    }

    pub fn with_penalty(mut self, penalty: Money) -> Self {
        self.penalty = Some(penalty.to_string());
        self
    }
}

pub fn loan_to_json(loan: &Loan) -> serde_json::Value {
    serde_json::json!({
        "id": loan.id().to_string(),
        "book_copy_id": loan.book_copy_id().to_string(),
        "borrowed_at": loan.borrowed_at().to_rfc3339(),
        "due_date": loan.due_date().to_rfc3339(),
        "returned_at": loan.returned_at().map(|d| d.to_rfc3339()),
    })
}

pub fn account_to_json(account: &UserAccount) -> serde_json::Value {
    serde_json::json!({
        "id": account.id().to_string(),
        "name": account.name(),
        "active_loans_count": account.active_loans_count(),
        "amount_due": account.amount_due().to_string(),
    })
}

pub fn user_to_json(summary: &UserSummary) -> serde_json::Value {
    let mut body = account_to_json(&summary.account);
    body["active_loans"] = summary.active_loans.iter().map(loan_to_json).collect();
    body
}
