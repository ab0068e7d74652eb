// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use filters::is_mutually_interested;
pub use matcher::{Matcher, MatchResult};
pub use normalize::{count_shared, normalize, normalize_entry};
pub use scoring::{calculate_similarity, similarity};
