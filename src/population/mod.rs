mod registry;

pub use registry::{PopulationLookup, PopulationRegistry};
