use crate::ports::{DashboardView, GovernanceApi};

/// Application context holding dependencies for command execution.
pub struct AppContext<A: GovernanceApi, V: DashboardView> {
    api: A,
    view: V,
}

impl<A: GovernanceApi, V: DashboardView> AppContext<A, V> {
    /// Create a new application context.
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Get a reference to the governance API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Get a mutable reference to the dashboard view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
