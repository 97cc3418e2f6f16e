pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod forge;
pub mod matcher;
pub mod reconcile;
pub mod release;
pub mod report;
pub mod tracker;
pub mod ui;
