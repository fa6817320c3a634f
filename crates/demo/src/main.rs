// File: crates/demo/src/main.rs
// Summary: Demo loads OHLC CSV and writes Highcharts and Plotly pages (ranges, closes, deltas) to target/out.

use anyhow::{Context, Result};
use chart_core::highcharts::{self, props};
use chart_core::{plotly, ChartDocument, HighchartsChart, PlotlyChart};
use chart_render_html::{open_in_browser, write_page, RenderConfig, Renderer};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug)]
struct Candle {
    t: f64,
    o: f64,
    h: f64,
    l: f64,
    c: f64,
}

/// Turn an OHLC CSV into Highcharts and Plotly pages under target/out.
#[derive(Parser, Debug)]
#[command(name = "constellation-demo", version, about)]
struct Args {
    /// OHLC CSV file (.csv and .cvs are tried both ways)
    #[arg(default_value = "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.cvs")]
    input: String,

    /// Render config (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Open the combined page in the default browser
    #[arg(long)]
    open: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(p) => RenderConfig::load(p)?,
        None => RenderConfig::default(),
    };
    let renderer = Renderer::new(config);
    info!(theme = renderer.theme().name, "renderer ready");

    // Accept path from CLI or fall back to sample filename (supports .csv/.cvs swap)
    let (path, used_alt) = resolve_path(&args.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let candles = load_ohlc_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = candles.len(), "loaded candles");

    if candles.is_empty() {
        anyhow::bail!("no candles loaded; check headers/delimiter.");
    }

    // Aggregate large inputs so the pages stay responsive
    let target_points = 1500usize;
    let n = candles.len();
    let bucket = if n > target_points { ((n as f64) / (target_points as f64)).ceil() as usize } else { 1 };
    let candles = aggregate_ohlc(&candles, bucket);
    let avg_close = candles.iter().map(|c| c.c).sum::<f64>() / candles.len() as f64;

    let mut docs: Vec<ChartDocument> = Vec::new();

    // 1) High/low ranges with closes on top
    let ranges = candles.iter().map(|c| vec![c.t, c.l, c.h]).collect::<Vec<_>>();
    let closes = candles.iter().map(|c| (c.t, c.c)).collect::<Vec<_>>();
    let range_chart = HighchartsChart::new()
        .with_title("Price range")
        .with_x_title("Time")
        .with_y_title("Price")
        .plot([
            highcharts::matrix_series("columnrange", ranges),
            highcharts::xy_series("line", closes.iter().copied()),
        ])
        .with_labels(["High/Low", "Close"])
        .with_all([
            props().tooltip().shared(true),
            props().series().at(1).as_line().line_width(1),
            props().y_axis().at(0).plot_lines().at(0).value(avg_close),
            props().y_axis().at(0).plot_lines().at(0).dash_style("Dash"),
            props().y_axis().at(0).plot_lines().at(0).label().text("average close"),
        ]);
    docs.push(range_chart.document());

    // 2) Close minus open as columns around zero
    let deltas = candles.iter().map(|c| (c.t, c.c - c.o)).collect::<Vec<_>>();
    let delta_chart = HighchartsChart::new()
        .with_title("Close - Open")
        .with_legend(false)
        .plot([highcharts::xy_series("column", deltas.iter().copied())])
        .with_all([
            props().series().at(0).as_bar().point_padding(0),
            props().series().at(0).as_bar().group_padding(0),
            props().credits().enabled(false),
        ]);
    docs.push(delta_chart.document());

    // 3) Plotly closes with the average as a horizontal shape
    let (xs, ys): (Vec<f64>, Vec<f64>) = closes.iter().copied().unzip();
    let (x0, x1) = (xs.first().copied().unwrap_or(0.0), xs.last().copied().unwrap_or(0.0));
    let plotly_close = PlotlyChart::new()
        .with_title("Close")
        .with_x_title("Time")
        .plot([plotly::trace("scatter", xs.clone(), ys)])
        .with_label("close")
        .with_all([
            plotly::props().data().at(0).mode("lines"),
            plotly::props().data().at(0).line().width(1.5),
            plotly::props().layout().shapes().at(0).kind("line"),
            plotly::props().layout().shapes().at(0).x0(x0),
            plotly::props().layout().shapes().at(0).x1(x1),
            plotly::props().layout().shapes().at(0).y0(avg_close),
            plotly::props().layout().shapes().at(0).y1(avg_close),
            plotly::props().layout().shapes().at(0).line().dash("dot"),
        ]);
    docs.push(plotly_close.document());

    // 4) Plotly histogram of deltas
    let delta_values = deltas.iter().map(|&(_, d)| d).collect::<Vec<_>>();
    let plotly_hist = PlotlyChart::new()
        .with_title("Delta distribution")
        .with(plotly::props().data().at(0).as_histogram().x(delta_values))
        .with(plotly::props().data().at(0).kind("histogram"))
        .with(plotly::props().data().at(0).as_histogram().nbinsx(40));
    docs.push(plotly_hist.document());

    for (doc, suffix) in docs.iter().zip(["ranges", "deltas", "close", "hist"]) {
        let out = out_name_with(&path, suffix);
        write_page(&out, &renderer.render_page(doc))?;
    }

    let all = out_name_with(&path, "all");
    write_page(&all, &renderer.render_page_many(&docs))?;

    if args.open {
        if let Err(err) = open_in_browser(&all) {
            warn!(%err, "could not open browser");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.html
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("chart_{}.html", suffix));
    } else {
        out.push(format!("chart_{}_{}.html", short, suffix));
    }
    out
}

/// Load Binance-like OHLC CSV into Candle vec.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    // Common Binance headers
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    let mut row_index = 0_f64;

    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };

        // x-value: parsed time, else running row index
        let t = match i_time.and_then(|ix| rec.get(ix)).and_then(parse_time_to_f64) {
            Some(t) => t,
            None => {
                let v = row_index;
                row_index += 1.0;
                v
            }
        };

        if let (Some(o), Some(h), Some(l), Some(c)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            out.push(Candle { t, o, h, l, c });
        }
    }
    Ok(out)
}

fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let n = s.parse::<i64>().ok()?;
    // epoch ms -> sec
    if n > 10_i64.pow(12) {
        return Some(n as f64 / 1000.0);
    }
    Some(n as f64)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Merge runs of `bucket` candles: first open, max high, min low, last close.
fn aggregate_ohlc(candles: &[Candle], bucket: usize) -> Vec<Candle> {
    if bucket <= 1 {
        return candles.to_vec();
    }
    candles
        .chunks(bucket)
        .filter_map(|chunk| {
            let first = chunk.first()?;
            let last = chunk.last()?;
            Some(Candle {
                t: first.t,
                o: first.o,
                h: chunk.iter().map(|c| c.h).fold(f64::NEG_INFINITY, f64::max),
                l: chunk.iter().map(|c| c.l).fold(f64::INFINITY, f64::min),
                c: last.c,
            })
        })
        .collect()
}
