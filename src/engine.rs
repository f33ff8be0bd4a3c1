//! Rule extraction through the external evaluation engine

pub mod eslint;
pub mod extractor;
pub mod probe;

pub use eslint::{EngineSnapshot, NodeEngine, RuleEngine};
pub use extractor::RuleExtractor;
pub use probe::ProbeFile;
