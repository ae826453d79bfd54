use petals::{Page, Placement, Selectors};
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetalReport {
    pub index: usize,
    pub name: Option<String>,
    pub placement: Option<Placement>,
}

impl PetalReport {
    fn plain_line(&self) -> String {
        let name = self.name.as_deref().unwrap_or("-");
        let placement = self
            .placement
            .map_or_else(|| "unplaced".to_string(), |p| p.to_string());
        format!("{:>3}  {:<16} {}\n", self.index, name, placement)
    }
}

/// One entry per petal on the page, in document order.
pub fn petal_reports(page: &Page, selectors: &Selectors) -> Vec<PetalReport> {
    page.query_selector_all(&selectors.petal)
        .enumerate()
        .map(|(index, node)| PetalReport {
            index,
            name: node.name().map(str::to_string),
            placement: node.placement,
        })
        .collect()
}

pub fn format_reports(
    reports: &[PetalReport],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports),
        OutputFormat::Plain => Ok(reports.iter().map(PetalReport::plain_line).collect()),
    }
}
