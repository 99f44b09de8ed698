//! # tidysheet
//!
//! Turns messy, delimiter-ambiguous text into a well-formed table and
//! cleans recognized columns into canonical types.
//!
//! The crate has two core transforms, used in sequence:
//!
//! - [`infer`]: heuristic text-to-table inference. Semicolons separate
//!   rows, commas and whitespace runs separate cells, the widest row wins
//!   and shorter rows are padded. Never fails: unusable input yields the
//!   explicitly-empty table plus a `tracing` diagnostic.
//! - [`normalize`]: rewrites recognized columns (`Name`, `Age`, `Dept`,
//!   `Salary`, `Join Date`) into canonical typed values after trimming and
//!   title-casing every header. A cell that cannot be converted becomes
//!   the first-class [`Value::Missing`] marker, never an error.
//!
//! Around them sit the collaborator layers an interactive application
//! needs: structured upload readers ([`read_table`] for CSV and Excel
//! files), pure edit operations on [`Table`], and exporters ([`export`])
//! for CSV, JSON, xlsx and PDF. Missing values render blank in every
//! export format.
//!
//! Both transforms are pure functions over an in-memory table: no shared
//! state, no I/O, safe to call concurrently on independent inputs.
//!
//! ```
//! use tidysheet::{export, infer, normalize, ExportFormat};
//!
//! let table = normalize(&infer("name, age; alice, 30; bob"));
//! assert_eq!(table.columns(), &["Column 1", "Column 2"]);
//! let csv = export(&table, ExportFormat::Csv).unwrap();
//! assert!(!csv.is_empty());
//! ```
mod error;
pub mod export;
pub mod infer;
pub mod normalize;
pub mod reader;
pub mod table;

pub use crate::error::TidySheetError;
pub use crate::export::export;
pub use crate::export::ExportFormat;
pub use crate::infer::infer;
pub use crate::infer::try_infer;
pub use crate::normalize::normalize;
pub use crate::normalize::Field;
pub use crate::reader::read_table;
pub use crate::table::Table;
pub use crate::table::TableError;
pub use crate::table::Value;
