use anyhow::Result;
use bookdash::color::{OfficePalette, Palette, RandomPalette};
use bookdash::controller::ChartModel;
use bookdash::{ChartKind, Client, Dashboard, stats, storage, viz};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bookdash",
    version,
    about = "Fetch, reshape, visualize & export hotel booking charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one chart's data (and optionally save, plot, and print summaries).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum ChartArg {
    /// Revenue trend line chart.
    Amount,
    /// Bookings-by-month bar chart.
    Bookings,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Which chart to load.
    #[arg(short, long, value_enum)]
    chart: ChartArg,
    /// Base URL of the dashboard backend.
    #[arg(long, default_value = bookdash::api::DEFAULT_BASE_URL)]
    base_url: String,
    /// Save reshaped data to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Render the chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print per-hotel summaries to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Cycle a fixed palette instead of random series colors.
    #[arg(long, default_value_t = false)]
    fixed_colors: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let kind = match args.chart {
        ChartArg::Amount => ChartKind::RevenueTrend,
        ChartArg::Bookings => ChartKind::BookingsByMonth,
    };
    let palette: Box<dyn Palette> = if args.fixed_colors {
        Box::new(OfficePalette::default())
    } else {
        Box::new(RandomPalette::new())
    };

    let mut dash = Dashboard::new(Client::new(&args.base_url), palette);
    dash.select(Some(kind))?;
    let model = dash
        .active()
        .ok_or_else(|| anyhow::anyhow!("no chart installed after load"))?;

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match (fmt.as_str(), model) {
            ("csv", ChartModel::Line(datasets)) => storage::save_trend_csv(datasets, path)?,
            ("json", ChartModel::Line(datasets)) => storage::save_trend_json(datasets, path)?,
            ("csv", ChartModel::Bar(matrix)) => storage::save_bookings_csv(matrix, path)?,
            ("json", ChartModel::Bar(matrix)) => storage::save_bookings_json(matrix, path)?,
            (other, _) => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} data to {}", kind.display_name(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::render_to_file(model, plot_path, args.width, args.height)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    if args.stats {
        match model {
            ChartModel::Line(datasets) => {
                for s in stats::revenue_summary(datasets) {
                    println!(
                        "{}  count={}  min={} max={} mean={} median={}",
                        s.hotel,
                        s.count,
                        fmt_opt(s.min),
                        fmt_opt(s.max),
                        fmt_opt(s.mean),
                        fmt_opt(s.median)
                    );
                }
            }
            ChartModel::Bar(matrix) => {
                for s in stats::bookings_summary(matrix) {
                    println!(
                        "{}  total={}  busiest={}",
                        s.hotel,
                        s.total,
                        s.busiest_month.as_deref().unwrap_or("NA")
                    );
                }
            }
        }
    }

    Ok(())
}
