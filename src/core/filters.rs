use crate::models::UserProfile;

/// Check that each profile falls within the other's sexual preference
#[inline]
pub fn is_mutually_interested(me: &UserProfile, candidate: &UserProfile) -> bool {
    let mine = &me.user_data;
    let theirs = &candidate.user_data;

    mine.sexual_preference.accepts(theirs.gender) && theirs.sexual_preference.accepts(mine.gender)
}
