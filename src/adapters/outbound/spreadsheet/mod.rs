/// Spreadsheet adapter rendering reports as xlsx workbooks
mod sheet_layout;
mod xlsx_writer;

pub use sheet_layout::{
    column_width, layout_report, sheet_name, Cell, IconRule, RiskBand, RiskBands, RiskIndicator,
    SheetLayout, COLUMN_WIDTH_SCALE, MAX_SHEET_NAME_LENGTH, NOT_AVAILABLE, SUMMARY_SHEET_NAME,
};
pub use xlsx_writer::XlsxReportWriter;
