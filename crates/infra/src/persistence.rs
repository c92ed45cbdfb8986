// crates/infra/src/persistence.rs
mod csv_sink;
mod file_reader;
mod file_writer;
mod output_path;
mod row;

pub use csv_sink::CsvRowSink;
pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use output_path::{default_output_name, unique_output_path};
pub use row::InventoryRow;
