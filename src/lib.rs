//! nova: terminal console for a universe-governance server.
//!
//! Reads `/universe` and `/proposals` and renders them as two titled
//! sections, and submits create/propose/vote mutations, refreshing the
//! view after each. Server-side governance semantics are external; this
//! crate owns only the client contract.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{
    AppContext,
    commands::{create_universe, propose, show, vote},
};
use domain::ApiConfig;
use services::{HttpGovernanceApi, TerminalView};

pub use app::commands::show::{METADATA_FAILURE_NOTICE, PROPOSALS_FAILURE_NOTICE};
pub use domain::{AppError, BACKEND_URL_ENV, Proposal};

fn context(server: Option<&str>) -> Result<AppContext<HttpGovernanceApi, TerminalView>, AppError> {
    let config = ApiConfig::resolve(server)?;
    let api = HttpGovernanceApi::new(&config)?;
    Ok(AppContext::new(api, TerminalView::new()))
}

/// Render the dashboard: universe metadata and the proposal list.
pub fn show(server: Option<&str>) -> Result<(), AppError> {
    let mut ctx = context(server)?;
    show::execute(&mut ctx);
    Ok(())
}

/// Create a universe, then render the refreshed dashboard.
pub fn create_universe(server: Option<&str>, name: &str) -> Result<(), AppError> {
    let mut ctx = context(server)?;
    create_universe::execute(&mut ctx, name)
}

/// File a proposal, then render the refreshed dashboard.
pub fn propose(server: Option<&str>, text: &str) -> Result<(), AppError> {
    let mut ctx = context(server)?;
    propose::execute(&mut ctx, text)
}

/// Cast a vote on a proposal, then render the refreshed dashboard.
pub fn vote(server: Option<&str>, id: &str, choice: &str) -> Result<(), AppError> {
    let mut ctx = context(server)?;
    vote::execute(&mut ctx, id, choice)
}
