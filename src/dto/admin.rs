//! Maintenance operation payloads.

use serde::Serialize;
use utoipa::ToSchema;

/// Summary of one reconciliation run.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReconcileResponse {
    pub message: String,
    /// Employees whose point total diverged from the ledger sum.
    pub employees_repaired: u64,
    /// Teams whose point total diverged from the ledger sum.
    pub teams_repaired: u64,
    /// Teams whose members mirror had to be rebuilt.
    pub memberships_repaired: u64,
    /// Employees whose team assignment pointed at a deleted team.
    pub orphans_cleared: u64,
}
