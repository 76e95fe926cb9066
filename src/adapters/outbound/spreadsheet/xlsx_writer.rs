use super::sheet_layout::{layout_report, Cell, RiskBand, RiskBands, SheetLayout};
use crate::ports::outbound::ReportWriter;
use crate::shared::error::DtrackError;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use crate::tracking::domain::Report;
use anyhow::Context;
use rust_xlsxwriter::{
    ConditionalFormatCustomIcon, ConditionalFormatIconSet, ConditionalFormatIconType,
    ConditionalFormatType, Format, Workbook, Worksheet,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const FONT_NAME: &str = "Consolas";
const FONT_SIZE: f64 = 9.0;

/// XlsxReportWriter adapter rendering a report as an xlsx workbook
///
/// The workbook holds a summary sheet followed by one sheet per project.
pub struct XlsxReportWriter {
    output_dir: PathBuf,
}

impl XlsxReportWriter {
    pub const EXTENSION: &'static str = "xlsx";

    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn render(sheets: &[SheetLayout], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let cell_format = Format::new()
            .set_font_name(FONT_NAME)
            .set_font_size(FONT_SIZE);
        let heading_format = cell_format.clone().set_bold();

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, sheet, &cell_format, &heading_format)
                .with_context(|| format!("Failed to render sheet '{}'", sheet.name))?;
        }

        workbook.save(path).map_err(|e| DtrackError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &SheetLayout,
    cell_format: &Format,
    heading_format: &Format,
) -> Result<()> {
    worksheet.set_name(sheet.name.as_str())?;

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, heading_format)?;
    }

    for (index, row) in sheet.rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string_with_format(
                        row_num,
                        col as u16,
                        text.as_str(),
                        cell_format,
                    )?;
                }
                Cell::Number(number) => {
                    worksheet.write_number_with_format(
                        row_num,
                        col as u16,
                        *number,
                        cell_format,
                    )?;
                }
            }
        }
    }

    for (col, width) in sheet.column_widths().into_iter().enumerate() {
        if let Some(width) = width {
            worksheet.set_column_width(col as u16, width)?;
        }
    }

    if let Some(indicator) = sheet.risk_indicator {
        if !sheet.rows.is_empty() {
            worksheet.add_conditional_format(
                1,
                indicator.column,
                sheet.rows.len() as u32,
                indicator.column,
                &risk_score_icons(&indicator.bands),
            )?;
        }
    }

    Ok(())
}

/// Traffic lights reversed so that green marks the lowest band.
fn risk_score_icons(bands: &RiskBands) -> ConditionalFormatIconSet {
    let icons = bands.icon_rules().map(|rule| {
        ConditionalFormatCustomIcon::new()
            .set_rule(ConditionalFormatType::Number, rule.threshold)
            .set_greater_than(rule.greater_than)
    });

    ConditionalFormatIconSet::new()
        .set_icon_type(ConditionalFormatIconType::ThreeTrafficLights)
        .reverse_icons(true)
        .set_icons(&icons)
}

impl ReportWriter for XlsxReportWriter {
    fn write(&self, report: &Report) -> Result<PathBuf> {
        let path = self.output_dir.join(report.file_name(Self::EXTENSION));
        validate_output_path(&path)?;

        info!("Writing to {}...", path.display());
        let sheets = layout_report(report);
        Self::render(&sheets, &path)?;
        info!(
            "...ready: {} project sheet(s) for {}",
            sheets.len() - 1,
            report.release_tag
        );

        let critical = report
            .projects
            .iter()
            .filter(|p| RiskBands::DEFAULT.band(p.inherited_risk_score) == RiskBand::Worst)
            .count();
        if critical > 0 {
            warn!(
                "{} project(s) of {} reach a risk score of {} or more",
                critical,
                report.release_tag,
                RiskBands::DEFAULT.worst_from
            );
        }

        Ok(path)
    }
}
