use crate::app::AppContext;
use crate::app::commands::show;
use crate::domain::AppError;
use crate::ports::{DashboardView, GovernanceApi};

/// Execute the propose command: submit the proposal text, then re-render
/// the dashboard from fresh server state.
pub fn execute<A, V>(ctx: &mut AppContext<A, V>, text: &str) -> Result<(), AppError>
where
    A: GovernanceApi,
    V: DashboardView,
{
    ctx.api().submit_proposal(text)?;
    show::execute(ctx);
    Ok(())
}
