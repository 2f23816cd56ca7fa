//! Stdout renderer for the dashboard regions.

use crate::ports::DashboardView;

/// Prints each region as a titled section.
#[derive(Debug, Clone, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl DashboardView for TerminalView {
    fn show_universe(&mut self, text: &str) {
        println!("== Universe ==");
        println!("{}", text);
        println!();
    }

    fn show_proposals(&mut self, lines: &[String]) {
        println!("== Proposals ==");
        for line in lines {
            println!("{}", line);
        }
    }

    fn show_proposals_notice(&mut self, text: &str) {
        println!("== Proposals ==");
        println!("{}", text);
    }
}
