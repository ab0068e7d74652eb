use crate::models::{ModelError, UserProfile};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when loading or querying profiles
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid profile {key}: {source}")]
    InvalidProfile {
        key: String,
        #[source]
        source: ModelError,
    },

    #[error("Profile stored under {key} claims userId {user_id}")]
    KeyMismatch { key: String, user_id: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// In-memory profile pool hydrated from a snapshot keyed by user id
///
/// The snapshot is a JSON object `{ "<userId>": <profile>, ... }` as exported
/// from the app's realtime database. Every profile is validated on load, so
/// anything handed out by the store is safe to score.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: BTreeMap<String, UserProfile>,
}

impl ProfileStore {
    /// Build a store from already constructed profiles, keyed by their user id
    pub fn from_profiles<I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = UserProfile>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.user_id.clone(), profile))
                .collect(),
        }
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let documents: BTreeMap<String, Value> = serde_json::from_str(json)?;
        let mut profiles = BTreeMap::new();

        for (key, document) in documents {
            let mut profile: UserProfile = serde_json::from_value(document).map_err(|e| {
                StoreError::InvalidProfile {
                    key: key.clone(),
                    source: ModelError::from(e),
                }
            })?;

            // Exports usually omit the id inside the record
            if profile.user_id.is_empty() {
                profile.user_id = key.clone();
            } else if profile.user_id != key {
                return Err(StoreError::KeyMismatch {
                    key,
                    user_id: profile.user_id,
                });
            }

            if let Err(e) = profile.validate() {
                return Err(StoreError::InvalidProfile {
                    key,
                    source: ModelError::from(e),
                });
            }

            profiles.insert(key, profile);
        }

        tracing::debug!("Loaded {} profiles from snapshot", profiles.len());

        Ok(Self { profiles })
    }

    /// Read and parse a snapshot file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        tracing::info!("Loading profiles from {}", path.display());

        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Get a single profile by user ID
    pub fn get(&self, user_id: &str) -> Result<&UserProfile, StoreError> {
        self.profiles
            .get(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("Profile not found for user {}", user_id)))
    }

    /// Every profile except the viewer's own, in user id order
    pub fn candidates_for(&self, user_id: &str) -> Vec<&UserProfile> {
        self.profiles
            .iter()
            .filter(|(key, _)| key.as_str() != user_id)
            .map(|(_, profile)| profile)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
