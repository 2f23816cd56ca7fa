use crate::app::AppContext;
use crate::domain::Proposal;
use crate::ports::{DashboardView, GovernanceApi};

/// Fixed notice rendered when the universe metadata load fails.
pub const METADATA_FAILURE_NOTICE: &str = "Failed to load metadata";
/// Fixed notice rendered when the proposals load fails.
pub const PROPOSALS_FAILURE_NOTICE: &str = "Failed to load proposals";

/// Execute the show command: fetch both read endpoints and project them
/// onto the view.
///
/// Each region has its own failure scope. A failed or unparsable fetch
/// renders that region's fixed failure notice; the sibling region still
/// loads. Every call replaces prior region content in full, so repeated
/// calls never accumulate lines.
pub fn execute<A, V>(ctx: &mut AppContext<A, V>)
where
    A: GovernanceApi,
    V: DashboardView,
{
    let metadata = ctx
        .api()
        .fetch_universe()
        .ok()
        .and_then(|meta| serde_json::to_string_pretty(&meta).ok());
    match metadata {
        Some(text) => ctx.view_mut().show_universe(&text),
        None => ctx.view_mut().show_universe(METADATA_FAILURE_NOTICE),
    }

    let proposals = ctx.api().fetch_proposals();
    match proposals {
        Ok(list) => {
            let lines: Vec<String> = list.iter().map(Proposal::summary_line).collect();
            ctx.view_mut().show_proposals(&lines);
        }
        Err(_) => ctx.view_mut().show_proposals_notice(PROPOSALS_FAILURE_NOTICE),
    }
}
