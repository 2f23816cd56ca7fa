mod dashboard_view;
mod governance_api;

pub use dashboard_view::DashboardView;
pub use governance_api::GovernanceApi;
