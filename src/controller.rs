//! Selector dispatch and chart lifecycle.
//!
//! [`Dashboard`] owns the single live [`ChartModel`]: every selection change
//! releases the previous model before anything else happens, so two charts
//! never coexist. [`LoadGate`] hands out generation tokens for asynchronous
//! front ends, so a response from an abandoned load is dropped instead of
//! overwriting a newer chart.

use crate::api;
use crate::color::Palette;
use crate::models::{BookingsPayload, ChartKind, TrendPayload};
use crate::transform::{self, BarMatrix, LineDataset};
use anyhow::{Context, Result};

/// Where chart payloads come from. The HTTP [`api::Client`] in production,
/// a stub in tests.
pub trait DataSource {
    fn revenue_trend(&self) -> Result<TrendPayload>;
    fn bookings_by_month(&self) -> Result<BookingsPayload>;
}

impl DataSource for api::Client {
    fn revenue_trend(&self) -> Result<TrendPayload> {
        self.fetch_revenue_trend()
    }

    fn bookings_by_month(&self) -> Result<BookingsPayload> {
        self.fetch_bookings_by_month()
    }
}

/// A fully reshaped chart, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartModel {
    Line(Vec<LineDataset>),
    Bar(BarMatrix),
}

impl ChartModel {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartModel::Line(_) => ChartKind::RevenueTrend,
            ChartModel::Bar(_) => ChartKind::BookingsByMonth,
        }
    }
}

/// Chart area states. Transitions happen only on selector events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Hidden,
    Line,
    Bar,
}

/// What a selection change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Whether a previously live chart was released.
    pub torn_down: bool,
    pub view: View,
}

/// Parse a selector value (`none`, `amount`, `bookings`).
pub fn parse_selection(value: &str) -> Result<Option<ChartKind>> {
    match value {
        "none" => Ok(None),
        "amount" => Ok(Some(ChartKind::RevenueTrend)),
        "bookings" => Ok(Some(ChartKind::BookingsByMonth)),
        other => anyhow::bail!("unknown chart selection: {other:?}"),
    }
}

fn build<S: DataSource + ?Sized>(
    kind: ChartKind,
    source: &S,
    palette: &mut dyn Palette,
) -> Result<ChartModel> {
    match kind {
        ChartKind::RevenueTrend => {
            let payload = source.revenue_trend()?;
            Ok(ChartModel::Line(transform::line_datasets(&payload, palette)?))
        }
        ChartKind::BookingsByMonth => {
            let payload = source.bookings_by_month()?;
            Ok(ChartModel::Bar(transform::bar_matrix(&payload, palette)?))
        }
    }
}

/// Fetch and reshape one chart. The error context names the chart, which is
/// what the front ends surface to the user.
pub fn load_chart<S: DataSource + ?Sized>(
    kind: ChartKind,
    source: &S,
    palette: &mut dyn Palette,
) -> Result<ChartModel> {
    build(kind, source, palette)
        .with_context(|| format!("loading {} chart", kind.display_name()))
}

/// The selector controller: one data source, one palette, at most one live
/// chart model.
pub struct Dashboard<S> {
    source: S,
    palette: Box<dyn Palette>,
    active: Option<ChartModel>,
    visible: bool,
}

impl<S: DataSource> Dashboard<S> {
    pub fn new(source: S, palette: Box<dyn Palette>) -> Self {
        Self {
            source,
            palette,
            active: None,
            visible: false,
        }
    }

    /// Apply a selection change.
    ///
    /// The previous chart is always released first. `None` hides the chart
    /// area without touching the network. On a load failure the chart area
    /// stays visible with no chart installed and the error propagates to the
    /// caller, which surfaces it; there is no retry.
    pub fn select(&mut self, choice: Option<ChartKind>) -> Result<Transition> {
        let torn_down = self.active.take().is_some();
        log::info!("selector changed to {choice:?}");
        match choice {
            None => {
                self.visible = false;
                Ok(Transition {
                    torn_down,
                    view: View::Hidden,
                })
            }
            Some(kind) => {
                self.visible = true;
                let model = load_chart(kind, &self.source, self.palette.as_mut())?;
                let view = match model.kind() {
                    ChartKind::RevenueTrend => View::Line,
                    ChartKind::BookingsByMonth => View::Bar,
                };
                self.active = Some(model);
                Ok(Transition { torn_down, view })
            }
        }
    }

    /// The live chart, if one is installed.
    pub fn active(&self) -> Option<&ChartModel> {
        self.active.as_ref()
    }

    /// Whether the chart area is shown. After a failed load this is `true`
    /// with no active chart.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn view(&self) -> View {
        match self.active {
            Some(ChartModel::Line(_)) => View::Line,
            Some(ChartModel::Bar(_)) => View::Bar,
            None => View::Hidden,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Generation token for one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Hands out [`LoadToken`]s and decides which responses still count.
///
/// Issue a token per load attempt; a result is applied only while its token
/// is the most recent one, so rapid selection switches cannot resurrect a
/// stale chart.
#[derive(Debug, Default)]
pub struct LoadGate {
    current: u64,
}

impl LoadGate {
    pub fn issue(&mut self) -> LoadToken {
        self.current = self.current.wrapping_add(1);
        LoadToken(self.current)
    }

    pub fn admits(&self, token: LoadToken) -> bool {
        token.0 == self.current
    }

    /// Invalidate every outstanding token (the selector moved to `none`).
    pub fn revoke_all(&mut self) {
        self.current = self.current.wrapping_add(1);
    }
}
