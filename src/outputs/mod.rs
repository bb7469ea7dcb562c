//! Human-readable output.
//!
//! - [`report`]: Markdown rendering of a query-pipeline [`Report`](crate::digest::Report),
//!   printed by the `report` subcommand

pub mod report;
