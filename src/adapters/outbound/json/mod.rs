/// JSON adapter writing the report aggregate as a JSON document
mod json_writer;

pub use json_writer::JsonReportWriter;
