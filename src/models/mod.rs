// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ClassYear, Factoid, FactoidCard, FactoidData, Gender, ModelError, QuickFacts, ScoredMatch,
    ScoringPoints, SexualPreference, Similarity, StudentType, UserData, UserProfile, YearCode,
    MAX_CATEGORY_POINTS,
};
pub use requests::FindMatchesRequest;
pub use responses::FindMatchesResponse;
