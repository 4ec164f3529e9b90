mod group;

pub use group::{GroupSummary, StackRecord, key_order_by_magnitude, key_order_by_value};
