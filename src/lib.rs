//! Campus Match - compatibility scoring for a university dating app
//!
//! This library provides the typed profile model and the pairwise
//! similarity scorer used to rank candidates, plus a small matcher and an
//! in-memory profile store around it.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, normalize, similarity, calculate_similarity};
pub use crate::models::{
    Factoid, FactoidData, FindMatchesRequest, FindMatchesResponse, ScoredMatch, ScoringPoints,
    Similarity, UserData, UserProfile,
};
pub use crate::services::{ProfileStore, StoreError};
