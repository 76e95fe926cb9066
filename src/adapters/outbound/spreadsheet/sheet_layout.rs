//! Workbook layout of a vulnerability report.
//!
//! The layout is computed as plain data first (sheet names, headers, cell
//! values, column widths) so the rendering step only has to copy it into
//! the workbook.

use crate::tracking::domain::{Component, Report, ReportedProject};
use std::collections::HashSet;

/// Name of the first sheet
pub const SUMMARY_SHEET_NAME: &str = "Summary";

/// Sheet names longer than this are rejected by spreadsheet applications
pub const MAX_SHEET_NAME_LENGTH: usize = 31;

/// Placeholder for a component field the platform did not provide
pub const NOT_AVAILABLE: &str = "n/a";

/// Column width per rendered character
pub const COLUMN_WIDTH_SCALE: f64 = 1.2;

/// Characters the xlsx format forbids in sheet names
const FORBIDDEN_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

const SHEET_NAME_ESCAPE: char = '_';

const SUMMARY_HEADERS: [&str; 6] = [
    "Project Name",
    "Version",
    "Vulnerabilities",
    "Vulnerable Components",
    "Components",
    "Risk Score",
];

/// Summary column carrying the traffic-light indicator
pub const RISK_SCORE_COLUMN: u16 = 5;

/// Band of a risk score, from the lowest risk up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Best,
    Middle,
    Worst,
}

/// One rule of an icon set: the value reaches the rule's icon when it is
/// at least `threshold`, or strictly above it with `greater_than`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconRule {
    pub threshold: f64,
    pub greater_than: bool,
}

impl IconRule {
    pub fn reached_by(&self, value: f64) -> bool {
        if self.greater_than {
            value > self.threshold
        } else {
            value >= self.threshold
        }
    }
}

/// Score thresholds of the three risk bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBands {
    /// Lowest score of the worst band
    pub worst_from: f64,
    /// Scores above this and below `worst_from` form the middle band
    pub middle_above: f64,
}

impl RiskBands {
    pub const DEFAULT: RiskBands = RiskBands {
        worst_from: 10.0,
        middle_above: 0.0,
    };

    pub fn band(&self, score: f64) -> RiskBand {
        if score >= self.worst_from {
            RiskBand::Worst
        } else if score > self.middle_above {
            RiskBand::Middle
        } else {
            RiskBand::Best
        }
    }

    /// Icon-set rules ordered like `[Best, Middle, Worst]`.
    ///
    /// The first rule only anchors the bottom of the scale; a value gets the
    /// icon of the last rule it reaches.
    pub fn icon_rules(&self) -> [IconRule; 3] {
        [
            IconRule {
                threshold: self.middle_above,
                greater_than: false,
            },
            IconRule {
                threshold: self.middle_above,
                greater_than: true,
            },
            IconRule {
                threshold: self.worst_from,
                greater_than: false,
            },
        ]
    }
}

/// Column rendered with the risk-score traffic lights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskIndicator {
    pub column: u16,
    pub bands: RiskBands,
}

const PROJECT_HEADERS: [&str; 5] = ["Name", "Version", "License", "PURL", "Checksum"];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(value: Option<&str>) -> Self {
        Cell::Text(
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
        )
    }

    /// The value as a spreadsheet application displays it
    pub fn rendered(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
    /// Column that gets the risk-score icon set
    pub risk_indicator: Option<RiskIndicator>,
}

impl SheetLayout {
    /// Width of every column, from the longest rendered value of the data rows
    ///
    /// Columns without data rows are `None` and keep the default width.
    pub fn column_widths(&self) -> Vec<Option<f64>> {
        (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.rendered().chars().count())
                    .max()
                    .map(column_width)
            })
            .collect()
    }
}

/// Width of a column whose longest value has `max_len` characters
pub fn column_width(max_len: usize) -> f64 {
    max_len as f64 * COLUMN_WIDTH_SCALE
}

/// Lays out the summary sheet followed by one detail sheet per project,
/// in report order.
pub fn layout_report(report: &Report) -> Vec<SheetLayout> {
    let mut taken = HashSet::from([SUMMARY_SHEET_NAME.to_lowercase()]);
    let mut sheets = Vec::with_capacity(report.projects.len() + 1);

    sheets.push(summary_sheet(&report.projects));
    for project in &report.projects {
        let name = unique_sheet_name(
            sheet_name(&project.name, project.version.as_deref()),
            &mut taken,
        );
        sheets.push(project_sheet(name, &project.dependencies));
    }

    sheets
}

fn summary_sheet(projects: &[ReportedProject]) -> SheetLayout {
    let rows = projects
        .iter()
        .map(|p| {
            vec![
                Cell::Text(p.name.clone()),
                Cell::text(p.version.as_deref()),
                Cell::Number(p.vulnerabilities as f64),
                Cell::Number(p.vulnerable_components as f64),
                Cell::Number(p.components as f64),
                Cell::Number(p.inherited_risk_score),
            ]
        })
        .collect();

    SheetLayout {
        name: SUMMARY_SHEET_NAME.to_string(),
        headers: SUMMARY_HEADERS.to_vec(),
        rows,
        risk_indicator: Some(RiskIndicator {
            column: RISK_SCORE_COLUMN,
            bands: RiskBands::DEFAULT,
        }),
    }
}

fn project_sheet(name: String, dependencies: &[Component]) -> SheetLayout {
    let rows = dependencies
        .iter()
        .map(|c| {
            vec![
                Cell::text(c.name.as_deref()),
                Cell::text(c.version.as_deref()),
                Cell::text(c.license.as_deref()),
                Cell::text(c.purl.as_deref()),
                Cell::text(c.sha256.as_deref()),
            ]
        })
        .collect();

    SheetLayout {
        name,
        headers: PROJECT_HEADERS.to_vec(),
        rows,
        risk_indicator: None,
    }
}

/// Detail sheet name: `"<name> <version>"`, escaped and cut to 31 characters.
pub fn sheet_name(name: &str, version: Option<&str>) -> String {
    let raw = format!("{} {}", name, version.unwrap_or(NOT_AVAILABLE));
    let mut escaped: Vec<char> = raw
        .chars()
        .map(|c| {
            if FORBIDDEN_SHEET_NAME_CHARS.contains(&c) {
                SHEET_NAME_ESCAPE
            } else {
                c
            }
        })
        .take(MAX_SHEET_NAME_LENGTH)
        .collect();

    // apostrophes are not allowed at either end
    if escaped.first() == Some(&'\'') {
        escaped[0] = SHEET_NAME_ESCAPE;
    }
    if let Some(last) = escaped.last_mut() {
        if *last == '\'' {
            *last = SHEET_NAME_ESCAPE;
        }
    }

    escaped.into_iter().collect()
}

/// Sheet names are unique case-insensitively; collisions get a `~N` suffix.
fn unique_sheet_name(candidate: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(candidate.to_lowercase()) {
        return candidate;
    }

    for n in 2.. {
        let suffix = format!("~{}", n);
        let keep = MAX_SHEET_NAME_LENGTH - suffix.len();
        let name: String = candidate.chars().take(keep).chain(suffix.chars()).collect();
        if taken.insert(name.to_lowercase()) {
            return name;
        }
    }
    unreachable!("unbounded suffix search always finds a free name")
}
