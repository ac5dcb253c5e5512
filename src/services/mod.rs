pub mod inference;
pub mod providers;
pub mod recommendations;

pub use inference::{OllamaClient, ProbeOutcome};
pub use providers::{MetadataProvider, TmdbProvider};
