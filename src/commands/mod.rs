//! CLI commands for marginalia

pub mod add;
pub mod delete;
pub mod dispatch;
pub mod document;
pub mod export;
pub mod list;
pub mod search;
pub mod tags;
