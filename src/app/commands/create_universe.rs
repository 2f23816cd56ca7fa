use crate::app::AppContext;
use crate::app::commands::show;
use crate::domain::AppError;
use crate::ports::{DashboardView, GovernanceApi};

/// Execute the create-universe command: submit the name, then re-render the
/// dashboard from fresh server state.
///
/// A failed write is returned to the caller and the refresh is skipped; the
/// view keeps whatever it showed before.
pub fn execute<A, V>(ctx: &mut AppContext<A, V>, name: &str) -> Result<(), AppError>
where
    A: GovernanceApi,
    V: DashboardView,
{
    ctx.api().create_universe(name)?;
    show::execute(ctx);
    Ok(())
}
