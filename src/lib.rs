//! ytc_rs
//!
//! A small Rust library for fetching public statistics of a YouTube channel and
//! its recent uploads, and rendering them as a Markdown report. Pairs with the
//! `ytc` CLI.
//!
//! ### Features
//! - Channel summary (name, subscribers, total views, total videos)
//! - Per-video views, likes and comments for the most recent uploads
//! - Markdown report with a summary block and a per-video table
//! - PNG/SVG horizontal bar chart of the likes-to-views ratio
//!
//! ### Example
//! ```no_run
//! use ytc_rs::{Client, Config};
//!
//! let config = Config::from_env()?;
//! let client = Client::new(&config)?;
//! let analysis = ytc_rs::analyze::collect(&client, "UC_x5XG1OV2P6uZZ5FSM9Ttw")?;
//! let report = ytc_rs::report::render(&analysis.summary, &analysis.items, &config);
//! ytc_rs::storage::save_report(&report, "output.md")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analyze;
pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod storage;

pub use analyze::{ChannelAnalysis, analyze};
pub use api::{Client, HttpGet, HttpResponse};
pub use config::{Config, OutputPaths};
pub use error::{AnalyzeError, ApiError, ConfigError, Endpoint};
pub use models::{ChannelSummary, ItemRecord};
pub use report::RenderedReport;
