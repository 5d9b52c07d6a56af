//! bookdash
//!
//! A lightweight Rust library for the hotel bookings dashboard: fetch the
//! backend's pre-aggregated chart payloads, reshape them into renderable
//! datasets, draw line/bar charts, and export or summarize the reshaped
//! data. Pairs with the `bookdash` CLI and the `bookdash-gui` desktop app.
//!
//! ### Features
//! - Fetch the revenue trend and bookings-by-month payloads
//! - Pivot them into line datasets / a dense per-month bar matrix
//! - Render SVG/PNG charts (or RGB buffers for GUI textures)
//! - Save the reshaped data as CSV or JSON, plus per-hotel summaries
//!
//! ### Example
//! ```no_run
//! use bookdash::color::RandomPalette;
//! use bookdash::{ChartKind, Client, Dashboard};
//!
//! let client = Client::default();
//! let mut dash = Dashboard::new(client, Box::new(RandomPalette::new()));
//! dash.select(Some(ChartKind::RevenueTrend))?;
//! if let Some(model) = dash.active() {
//!     bookdash::viz::render_to_file(model, "revenue.svg", 1000, 600)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod color;
pub mod controller;
pub mod models;
pub mod stats;
pub mod storage;
pub mod transform;
pub mod viz;

pub use api::Client;
pub use controller::{ChartModel, Dashboard, DataSource, LoadGate, LoadToken};
pub use models::{BookingsPayload, ChartKind, TrendPayload};
