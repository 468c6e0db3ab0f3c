// File: crates/headcount-plugin/src/employee_status.rs
// Summary: The employee status butterfly chart as a host visualization.

use std::time::Duration;

use headcount_core::{aggregate, render, HeaderPlacement, RenderOptions, Scene, Surface};
use serde_json::Value;

use crate::error::PluginError;
use crate::options::{employee_chart_options, OptionSpec, VisConfig};
use crate::readiness::{DependencyLoader, Readiness, DEFAULT_READY_TIMEOUT};
use crate::rows::decode_rows;
use crate::visualization::{RenderStatus, Visualization};

pub const PLACEHOLDER_TEXT: &str = "Ready to render!";

pub struct EmployeeStatusChart {
    options: Vec<OptionSpec>,
    base: RenderOptions,
    ready_timeout: Duration,
    readiness: Option<Readiness>,
}

impl Default for EmployeeStatusChart {
    fn default() -> Self { Self::new() }
}

impl EmployeeStatusChart {
    pub const ID: &'static str = "employee_status_chart";

    pub fn new() -> Self {
        Self {
            options: employee_chart_options(),
            base: RenderOptions::default(),
            ready_timeout: DEFAULT_READY_TIMEOUT,
            readiness: None,
        }
    }

    /// Canvas size, margins and theme used for every render.
    pub fn with_render_options(mut self, base: RenderOptions) -> Self {
        self.base = base;
        self
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    pub fn is_mounted(&self) -> bool { self.readiness.is_some() }

    fn render_options(&self, config: &VisConfig) -> RenderOptions {
        let mut opts = self.base.clone();
        opts.title = Some(config.chart_title.clone()).filter(|t| !t.is_empty());
        if config.first_row_headers {
            opts.headers = HeaderPlacement::FirstRow;
        }
        opts
    }
}

impl Visualization for EmployeeStatusChart {
    fn id(&self) -> &'static str { Self::ID }

    fn options(&self) -> &[OptionSpec] { &self.options }

    fn mount(&mut self, surface: &mut dyn Surface, loader: DependencyLoader) -> Result<(), PluginError> {
        surface.clear();
        Scene::placeholder(PLACEHOLDER_TEXT, &self.base).paint(surface)?;
        self.readiness = Some(Readiness::spawn(loader));
        log::debug!("{} mounted; waiting on dependencies", Self::ID);
        Ok(())
    }

    fn render(&mut self, rows: &[Value], surface: &mut dyn Surface, config: &VisConfig) -> Result<RenderStatus, PluginError> {
        if rows.is_empty() {
            log::info!("{}: no rows, clearing", Self::ID);
            surface.clear();
            return Ok(RenderStatus::Empty);
        }
        let records = decode_rows(rows)?;

        let timeout = self.ready_timeout;
        self.readiness
            .as_mut()
            .ok_or(PluginError::NotMounted(Self::ID))?
            .wait(timeout)?;

        let summaries = aggregate(&records);
        let opts = self.render_options(config);
        render(&summaries, &opts, surface)?;
        Ok(RenderStatus::Rendered { job_levels: summaries.len(), records: records.len() })
    }
}
