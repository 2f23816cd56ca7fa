//! Render-surface port for the dashboard regions.

/// Sink for the two dashboard regions.
///
/// Every call replaces the named region's previous content in full;
/// implementations must not accumulate output across calls.
pub trait DashboardView {
    /// Replace the universe metadata region with the given text.
    fn show_universe(&mut self, text: &str);

    /// Replace the proposals region with one line per proposal, in the
    /// order given.
    fn show_proposals(&mut self, lines: &[String]);

    /// Replace the proposals region with a plain notice (load failure).
    fn show_proposals_notice(&mut self, text: &str);
}
