// File: crates/demo/src/main.rs
// Summary: Demo host; registers the employee status chart, mounts it on SVG/PNG surfaces, and feeds it rows.

mod input;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use headcount_core::{RasterSurface, RenderOptions, Surface, SvgSurface, Theme};
use headcount_plugin::{options_json, DependencyLoader, EmployeeStatusChart, Registry, RenderStatus, VisConfig, Visualization};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    fn theme(self) -> Theme {
        match self {
            ThemeName::Light => Theme::light(),
            ThemeName::Dark => Theme::dark(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "headcount-demo", about = "Render an employee status chart from CSV or JSON rows")]
struct Args {
    /// CSV with job_level,employee_status columns, or a JSON array of host rows
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Both)]
    format: Format,
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
    /// Overrides chart_title from --config
    #[arg(long)]
    title: Option<String>,
    /// Host config as a JSON object, e.g. '{"chart_title":"Q3"}'
    #[arg(long)]
    config: Option<String>,
    /// Place column headers from the first row's proportions
    #[arg(long)]
    first_row_headers: bool,
    #[arg(long, value_enum, default_value_t = ThemeName::Light)]
    theme: ThemeName,
    #[arg(long, default_value_t = 5000)]
    ready_timeout_ms: u64,
    /// Print the option schema offered to the host and exit
    #[arg(long)]
    print_options: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut registry = Registry::new();
    let base = RenderOptions { theme: args.theme.theme(), ..RenderOptions::default() };
    registry.register(Box::new(
        EmployeeStatusChart::new()
            .with_render_options(base)
            .with_ready_timeout(Duration::from_millis(args.ready_timeout_ms)),
    ))?;
    let vis = registry
        .get_mut(EmployeeStatusChart::ID)
        .context("employee status chart not registered")?;

    if args.print_options {
        println!("{}", serde_json::to_string_pretty(&options_json(vis.options())?)?);
        return Ok(());
    }

    let input = args.input.clone().context("an input file is required")?;
    let rows = input::load_rows(&input).with_context(|| format!("failed to load rows from '{}'", input.display()))?;
    log::info!("loaded {} rows from {}", rows.len(), input.display());

    let config = build_config(&args)?;
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");

    if matches!(args.format, Format::Svg | Format::Both) {
        let mut svg = SvgSurface::new();
        run_lifecycle(vis, &mut svg, &rows, &config, &args.out_dir)?;
        let out = args.out_dir.join(format!("{stem}_employee_status.svg"));
        svg.write_to(&out)?;
        println!("Wrote {}", out.display());
    }
    if matches!(args.format, Format::Png | Format::Both) {
        let mut raster = RasterSurface::new(args.theme.theme().background);
        run_lifecycle(vis, &mut raster, &rows, &config, &args.out_dir)?;
        let out = args.out_dir.join(format!("{stem}_employee_status.png"));
        raster.write_png(&out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<VisConfig> {
    let mut config = match &args.config {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw).context("--config is not valid JSON")?;
            VisConfig::from_json(&value)?
        }
        None => VisConfig::default(),
    };
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }
    config.first_row_headers |= args.first_row_headers;
    Ok(config)
}

/// Mount on `surface`, then deliver one update, as a dashboard would.
fn run_lifecycle(
    vis: &mut dyn Visualization,
    surface: &mut dyn Surface,
    rows: &[serde_json::Value],
    config: &VisConfig,
    out_dir: &Path,
) -> Result<()> {
    vis.mount(surface, output_dir_loader(out_dir))?;
    let status = vis.update(
        rows,
        surface,
        config,
        Box::new(|status: RenderStatus| log::info!("render finished: {status:?}")),
    )?;
    if status == RenderStatus::Empty {
        log::warn!("input had no rows; output is empty");
    }
    Ok(())
}

/// The only thing the demo waits on before drawing: a writable output directory.
fn output_dir_loader(out_dir: &Path) -> DependencyLoader {
    let dir = out_dir.to_path_buf();
    Box::new(move || std::fs::create_dir_all(&dir).map_err(|e| format!("creating {}: {e}", dir.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_accepts_known_names() {
        let args = Args::try_parse_from(["headcount-demo", "in.csv", "--theme", "dark"]).unwrap();
        assert_eq!(args.theme, ThemeName::Dark);
        assert_eq!(args.theme.theme().name, "dark");
        let args = Args::try_parse_from(["headcount-demo", "in.csv"]).unwrap();
        assert_eq!(args.theme.theme(), Theme::light());
    }

    #[test]
    fn theme_flag_rejects_typos() {
        let err = Args::try_parse_from(["headcount-demo", "in.csv", "--theme", "drak"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn title_flag_overrides_config() {
        let args = Args::try_parse_from([
            "headcount-demo",
            "in.csv",
            "--config",
            r#"{"chart_title":"From Config","first_row_headers":false}"#,
            "--title",
            "From Flag",
            "--first-row-headers",
        ])
        .unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.chart_title, "From Flag");
        assert!(config.first_row_headers);
    }
}
