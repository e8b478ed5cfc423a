//! CLI Commands

pub mod resolve;
pub mod settings;
