use crate::app::AppContext;
use crate::app::commands::show;
use crate::domain::AppError;
use crate::ports::{DashboardView, GovernanceApi};

/// Execute the vote command: cast the vote, then re-render the dashboard
/// from fresh server state.
pub fn execute<A, V>(ctx: &mut AppContext<A, V>, id: &str, vote: &str) -> Result<(), AppError>
where
    A: GovernanceApi,
    V: DashboardView,
{
    ctx.api().submit_vote(id, vote)?;
    show::execute(ctx);
    Ok(())
}
