//! Core library for the `prewarm-deck` CLI.
//!
//! The deck explains two-phase processor pre-warming: an early broadcast
//! hint that lets hardware start warming, followed by a late targeted
//! signal once the workload's node is known. The library holds the step
//! catalogs for the depicted pipelines, the playback engine that walks them
//! and classifies processor temperature, the presenter runtime and terminal
//! UI, and the static asset server used for the web build.
pub mod args;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod entry;
pub mod error;
pub mod gate;
pub mod logger;
pub mod navigation;
pub mod playback;
pub mod presenter;
pub mod serve;
pub mod shutdown;
pub mod ui;
