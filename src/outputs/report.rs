//! Markdown rendering of a [`Report`].
//!
//! ```text
//! # Foreign Worker Hiring News
//! _Last 7 days · 12 articles · 5 outlets · latest 2024-01-08_
//!
//! ## Articles per day
//! | Date | Articles |
//! ...
//! ## Top articles
//! ### 2024-01-08
//! 1. **[title](link)** (score 45) 연합뉴스 · 3시간 전
//! ```
//!
//! Day counts run oldest first; the top-article sections run newest first.

use crate::digest::Report;
use std::fmt;

/// Display adapter that writes a report as Markdown.
pub struct MarkdownReport<'a>(pub &'a Report);

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let overview = &report.overview;

        writeln!(f, "# Foreign Worker Hiring News\n")?;
        write!(
            f,
            "_Last {} days · {} articles · {} outlets",
            report.query.days, overview.total, overview.press_count
        )?;
        if let Some(latest) = overview.latest {
            write!(f, " · latest {}", latest.date())?;
        }
        writeln!(f, "_\n")?;

        if report.query.keywords.is_empty() {
            writeln!(f, "Keywords: all\n")?;
        } else {
            writeln!(f, "Keywords: {}\n", report.query.keywords.join(", "))?;
        }

        if report.digest.is_empty() {
            return writeln!(f, "No articles in the selected period.");
        }

        writeln!(f, "## Articles per day\n")?;
        writeln!(f, "| Date | Articles |")?;
        writeln!(f, "|------|----------|")?;
        for (day, count) in &report.digest.counts {
            writeln!(f, "| {day} | {count} |")?;
        }

        writeln!(f, "\n## Top articles")?;
        for (day, top) in report.top.iter().rev() {
            writeln!(f, "\n### {day}\n")?;
            for (rank, scored) in top.iter().enumerate() {
                let record = &scored.record;
                write!(
                    f,
                    "{}. **[{}]({})** (score {})",
                    rank + 1,
                    escape_link_text(&record.title),
                    record.link,
                    scored.score
                )?;
                let meta: Vec<&str> = [record.press.as_str(), record.display_date.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect();
                if !meta.is_empty() {
                    write!(f, " {}", meta.join(" · "))?;
                }
                writeln!(f)?;
                if !record.summary.is_empty() {
                    writeln!(f, "   > {}", record.summary)?;
                }
            }
        }
        Ok(())
    }
}

pub fn render_markdown(report: &Report) -> String {
    MarkdownReport(report).to_string()
}

fn escape_link_text(s: &str) -> String {
    s.replace('[', "\\[").replace(']', "\\]")
}
