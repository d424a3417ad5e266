#[macro_use]
extern crate serde;

mod error;
pub use error::ExportError;

mod mask;
pub use mask::night_window;

mod raw;
pub use raw::{RawExportRow, read_export, read_export_path};

mod payload;

mod parser;
pub use parser::{PARSE_STEPS, ParsedExport, SessionSegment, parse_export};
