//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod languages;
mod output;
mod reverse;

pub use check::{CheckReport, TemplateCheck};
pub use languages::{LanguageInfo, LanguagesReport};
pub use output::{Output, Report, TerminalOutput};
pub use reverse::ReverseReport;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
