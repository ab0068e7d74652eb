use chrono::Datelike;

use crate::core::normalize::count_shared;
use crate::models::{ScoringPoints, Similarity, UserData, UserProfile};

/// Compatibility of `candidate` as seen from `me`, using the default point table
pub fn similarity(me: &UserProfile, candidate: &UserProfile) -> Similarity {
    calculate_similarity(me, candidate, &ScoringPoints::default())
}

/// Score a candidate against a profile.
///
/// Scoring rules (each category independent, results summed):
///   sports        both listed: per shared sport +sports/+sports,
///                 no overlap +sports_partial/+sports
///   hometown      both listed: +hometown possible, achieved if equal ignoring case
///   greek life    both listed: +greek_life/+greek_life (names not compared)
///   major         exact match: +major achieved
///   birthday      same month and day: +birthday achieved
///   looking for   both listed: per shared entry +looking_for/+looking_for,
///                 plus +looking_for possible once
///   student type  equal: +student_type achieved
///   year code     equal raw code: +year_code achieved
///
/// `possible` starts at [`ScoringPoints::base_possible`]. The result is never
/// normalized; sums saturate at `u32::MAX` instead of wrapping.
pub fn calculate_similarity(
    me: &UserProfile,
    candidate: &UserProfile,
    points: &ScoringPoints,
) -> Similarity {
    let mine = &me.user_data;
    let theirs = &candidate.user_data;

    let mut score = Similarity {
        achieved: 0,
        possible: points.base_possible(),
    };

    score_sports(mine, theirs, points, &mut score);
    score_hometown(mine, theirs, points, &mut score);
    score_greek_life(mine, theirs, points, &mut score);
    score_looking_for(mine, theirs, points, &mut score);

    if mine.major == theirs.major {
        score.award(points.major, 0);
    }

    if same_birthday(mine, theirs) {
        score.award(points.birthday, 0);
    }

    if mine.student_type == theirs.student_type {
        score.award(points.student_type, 0);
    }

    if mine.year_code == theirs.year_code {
        score.award(points.year_code, 0);
    }

    score
}

#[inline]
fn score_sports(mine: &UserData, theirs: &UserData, points: &ScoringPoints, score: &mut Similarity) {
    let (Some(my_sports), Some(their_sports)) = (&mine.sports, &theirs.sports) else {
        return;
    };

    let shared = count_shared(&my_sports.value, &their_sports.value);
    if shared > 0 {
        let earned = shared.saturating_mul(points.sports);
        score.award(earned, earned);
    } else {
        // Both play something, just not the same thing
        score.award(points.sports_partial, points.sports);
    }
}

#[inline]
fn score_hometown(mine: &UserData, theirs: &UserData, points: &ScoringPoints, score: &mut Similarity) {
    let (Some(my_home), Some(their_home)) = (&mine.calls_home, &theirs.calls_home) else {
        return;
    };

    if my_home.value.to_lowercase() == their_home.value.to_lowercase() {
        score.award(points.hometown, 0);
    }
    score.award(0, points.hometown);
}

#[inline]
fn score_greek_life(mine: &UserData, theirs: &UserData, points: &ScoringPoints, score: &mut Similarity) {
    if mine.greek_life_organisation.is_some() && theirs.greek_life_organisation.is_some() {
        score.award(points.greek_life, points.greek_life);
    }
}

#[inline]
fn score_looking_for(mine: &UserData, theirs: &UserData, points: &ScoringPoints, score: &mut Similarity) {
    let (Some(my_intents), Some(their_intents)) = (&mine.looking_for, &theirs.looking_for) else {
        return;
    };

    let shared = count_shared(my_intents, their_intents);
    let earned = shared.saturating_mul(points.looking_for);
    score.award(earned, earned.saturating_add(points.looking_for));
}

#[inline]
fn same_birthday(mine: &UserData, theirs: &UserData) -> bool {
    mine.birth_date.month() == theirs.birth_date.month()
        && mine.birth_date.day() == theirs.birth_date.day()
}
