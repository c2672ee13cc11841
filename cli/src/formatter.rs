use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use serde::Serialize;
use springboard::RunStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A labelled value shown next to the result, such as a leaf number
#[derive(Debug, Clone, Serialize)]
pub struct Detail {
    pub name: String,
    pub value: String,
}

/// Outcome of one command
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub algorithm: String,
    pub result: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RunStats>,
}

impl RunReport {
    pub fn new(algorithm: impl Into<String>, result: String, stats: RunStats) -> Self {
        Self {
            algorithm: algorithm.into(),
            result,
            details: Vec::new(),
            stats: Some(stats),
        }
    }

    pub fn add_detail(&mut self, name: String, value: String) {
        self.details.push(Detail { name, value });
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Render a report; statistics are dropped unless `show_stats` is set
    pub fn format_report(
        &self,
        report: &RunReport,
        format: OutputFormat,
        show_stats: bool,
    ) -> serde_json::Result<String> {
        let mut report = report.clone();
        if !show_stats {
            report.stats = None;
        }

        match format {
            OutputFormat::Json => {
                let mut output = serde_json::to_string_pretty(&report)?;
                output.push('\n');
                Ok(output)
            }
            OutputFormat::Text => Ok(self.format_text(&report)),
        }
    }

    fn format_text(&self, report: &RunReport) -> String {
        let mut output = format!("{}: {}\n", report.algorithm, report.result);

        if !report.details.is_empty() {
            output.push('\n');
            output.push_str(&self.format_details_table(&report.details));
            output.push('\n');
        }

        if let Some(stats) = &report.stats {
            output.push('\n');
            output.push_str(&self.format_stats_table(stats));
            output.push('\n');
        }

        output
    }

    fn format_details_table(&self, details: &[Detail]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Leaf").set_alignment(CellAlignment::Left),
            Cell::new("Number").set_alignment(CellAlignment::Right),
        ]));

        for detail in details {
            table.add_row(Row::from(vec![
                Cell::new(&detail.name).set_alignment(CellAlignment::Left),
                Cell::new(&detail.value).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }

    fn format_stats_table(&self, stats: &RunStats) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Statistic").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Right),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Thunks forced"),
            Cell::new(stats.steps).set_alignment(CellAlignment::Right),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Elapsed (µs)"),
            Cell::new(stats.elapsed_micros).set_alignment(CellAlignment::Right),
        ]));

        table.to_string()
    }
}
