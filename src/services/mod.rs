pub mod extractor;
pub mod metadata;
pub mod prompt;
pub mod providers;
pub mod recommendations;
pub mod suggestion_chain;

pub use metadata::MetadataFetcher;
pub use recommendations::Recommender;
pub use suggestion_chain::{ChainStatus, SuggestionChain};
