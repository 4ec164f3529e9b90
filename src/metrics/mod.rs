mod per_capita;
mod share;

pub use per_capita::per_capita_table;
pub use share::compute_shares;
