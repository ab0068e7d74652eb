use std::cmp::Ordering;

use crate::core::{filters::is_mutually_interested, scoring::calculate_similarity};
use crate::models::{ScoredMatch, ScoringPoints, UserProfile};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Ranks a candidate pool for one viewer
///
/// # Pipeline Stages
/// 1. Drop the viewer's own profile
/// 2. Mutual-interest filtering (optional)
/// 3. Compatibility scoring
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    points: ScoringPoints,
    require_mutual_interest: bool,
}

impl Matcher {
    pub fn new(points: ScoringPoints, require_mutual_interest: bool) -> Self {
        Self {
            points,
            require_mutual_interest,
        }
    }

    pub fn with_default_points() -> Self {
        Self::new(ScoringPoints::default(), true)
    }

    /// Score and rank `candidates` for `viewer`
    ///
    /// Matches are ordered by points achieved, then by compatibility ratio,
    /// then by user id so equal scores rank deterministically.
    pub fn find_matches<'a, I>(&self, viewer: &UserProfile, candidates: I, limit: usize) -> MatchResult
    where
        I: IntoIterator<Item = &'a UserProfile>,
    {
        let mut total_candidates = 0;

        let mut scored_matches: Vec<ScoredMatch> = candidates
            .into_iter()
            .inspect(|_| total_candidates += 1)
            // Stage 1: never match a user with themselves
            .filter(|candidate| candidate.user_id != viewer.user_id)
            // Stage 2: orientation
            .filter(|candidate| !self.require_mutual_interest || is_mutually_interested(viewer, candidate))
            // Stage 3: scoring
            .map(|candidate| {
                let score = calculate_similarity(viewer, candidate, &self.points);

                ScoredMatch {
                    user_id: candidate.user_id.clone(),
                    first_name: candidate.first_name.clone(),
                    last_name: candidate.last_name.clone(),
                    points_achieved: score.achieved,
                    points_possible: score.possible,
                    compatibility: score.ratio(),
                }
            })
            .collect();

        tracing::debug!(
            "Scored {} of {} candidates for {}",
            scored_matches.len(),
            total_candidates,
            viewer.user_id
        );

        // Stage 4: rank
        scored_matches.sort_by(|a, b| {
            b.points_achieved
                .cmp(&a.points_achieved)
                .then_with(|| {
                    b.compatibility
                        .partial_cmp(&a.compatibility)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        scored_matches.truncate(limit);

        MatchResult {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Factoid, FactoidData, Gender, SexualPreference, StudentType, UserData, YearCode};
    use chrono::NaiveDate;

    fn create_candidate(id: &str, gender: Gender, preference: SexualPreference, major: &str) -> UserProfile {
        UserProfile {
            user_id: id.to_string(),
            first_name: format!("User {}", id),
            last_name: "Candidate".to_string(),
            user_data: UserData {
                birth_date: NaiveDate::from_ymd_opt(2001, 9, 30).unwrap(),
                gender,
                sexual_preference: preference,
                student_type: StudentType::OutOfState,
                year_code: YearCode(3),
                year_explanation: None,
                major: major.to_string(),
                sports: None,
                calls_home: None,
                greek_life_organisation: None,
                looking_for: None,
            },
            factoid_data: FactoidData::default(),
        }
    }

    fn create_viewer() -> UserProfile {
        let mut viewer = create_candidate("viewer", Gender::Female, SexualPreference::Males, "Physics");
        viewer.user_data.birth_date = NaiveDate::from_ymd_opt(2002, 2, 2).unwrap();
        viewer.user_data.student_type = StudentType::InState;
        viewer.user_data.year_code = YearCode(0);
        viewer
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_default_points();
        let viewer = create_viewer();

        let candidates = vec![
            viewer.clone(),
            create_candidate("1", Gender::Male, SexualPreference::Females, "Physics"),
            create_candidate("2", Gender::Male, SexualPreference::Males, "Physics"),
            create_candidate("3", Gender::Female, SexualPreference::Males, "Physics"),
        ];

        let result = matcher.find_matches(&viewer, &candidates, 10);

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, "1");
        assert_eq!(result.matches[0].points_achieved, 20);
        assert_eq!(result.matches[0].points_possible, 45);
    }

    #[test]
    fn test_mutual_interest_can_be_disabled() {
        let matcher = Matcher::new(ScoringPoints::default(), false);
        let viewer = create_viewer();

        let candidates = vec![
            create_candidate("1", Gender::Male, SexualPreference::Females, "Physics"),
            create_candidate("2", Gender::Male, SexualPreference::Males, "Physics"),
        ];

        let result = matcher.find_matches(&viewer, &candidates, 10);
        assert_eq!(result.matches.len(), 2);
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = Matcher::with_default_points();
        let viewer = create_viewer();

        let mut sporty = create_candidate("a", Gender::Male, SexualPreference::Females, "Art");
        sporty.user_data.sports = Some(Factoid::new(vec!["Soccer".to_string()]));
        let mut viewer = viewer;
        viewer.user_data.sports = Some(Factoid::new(vec!["Hockey".to_string()]));

        let candidates = vec![
            create_candidate("c", Gender::Male, SexualPreference::Females, "Art"),
            sporty,
            create_candidate("b", Gender::Male, SexualPreference::Females, "Physics"),
        ];

        let result = matcher.find_matches(&viewer, &candidates, 10);
        let order: Vec<&str> = result.matches.iter().map(|m| m.user_id.as_str()).collect();

        // b: 20/45, a: 5/55, c: 0/45
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ties_broken_by_ratio_then_id() {
        let matcher = Matcher::with_default_points();
        let mut viewer = create_viewer();
        viewer.user_data.major = "Art".to_string();
        viewer.user_data.calls_home = Some(Factoid::new("Reno".to_string()));

        let mut far = create_candidate("a", Gender::Male, SexualPreference::Females, "Art");
        far.user_data.calls_home = Some(Factoid::new("Boise".to_string()));

        let candidates = vec![
            create_candidate("z", Gender::Male, SexualPreference::Females, "Art"),
            far,
            create_candidate("y", Gender::Male, SexualPreference::Females, "Art"),
        ];

        let result = matcher.find_matches(&viewer, &candidates, 10);
        let order: Vec<&str> = result.matches.iter().map(|m| m.user_id.as_str()).collect();

        // All achieve 20; "a" contested an extra 20 points
        assert_eq!(order, vec!["y", "z", "a"]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_points();
        let viewer = create_viewer();

        let candidates: Vec<UserProfile> = (0..20)
            .map(|i| create_candidate(&i.to_string(), Gender::Male, SexualPreference::Females, "Physics"))
            .collect();

        let result = matcher.find_matches(&viewer, &candidates, 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }
}
