//! Governance server port definition.

use serde_json::Value;

use crate::domain::{AppError, Proposal};

/// Port for the universe-governance API, one method per endpoint.
///
/// Implementations own transport concerns; callers only see typed results.
/// Write responses carry no information beyond success, so the mutation
/// methods return `()`.
pub trait GovernanceApi {
    /// Fetch `/universe`: current universe metadata. The schema is owned by
    /// the server; callers get the raw JSON value.
    fn fetch_universe(&self) -> Result<Value, AppError>;

    /// Fetch `/proposals`: all proposals, in server order.
    fn fetch_proposals(&self) -> Result<Vec<Proposal>, AppError>;

    /// Create a universe via `/create_universe` with body `{"name": …}`.
    fn create_universe(&self, name: &str) -> Result<(), AppError>;

    /// File a proposal via `/propose` with body `{"text": …}`.
    fn submit_proposal(&self, text: &str) -> Result<(), AppError>;

    /// Cast a vote via `/vote` with body `{"id": …, "vote": …}`.
    fn submit_vote(&self, id: &str, vote: &str) -> Result<(), AppError>;
}
