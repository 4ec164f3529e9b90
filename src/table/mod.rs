pub mod columns;
mod frame;
mod record;

pub use frame::EmissionsTable;
pub use record::{EmissionsRecord, Metric};
