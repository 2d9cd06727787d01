//! Ratatui widgets for the sift TUI.

pub mod help;
pub mod query_bar;
pub mod result_list;
