use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Errors raised while building a profile from persisted data
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Malformed profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Profile failed validation: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid {field} code: {value}")]
    InvalidCode { field: &'static str, value: u32 },
}

/// Gender code as stored by the app (male=0, female=1, other=2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl TryFrom<u32> for Gender {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Gender::Male),
            1 => Ok(Gender::Female),
            2 => Ok(Gender::Other),
            _ => Err(ModelError::InvalidCode { field: "gender", value }),
        }
    }
}

impl From<Gender> for u32 {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Other => 2,
        }
    }
}

/// Who a user wants to be matched with.
///
/// Stored as one digit per accepted gender, concatenated in ascending order
/// (1=males, 2=females, 3=other, 12, 13, 23). Unknown codes decode to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum SexualPreference {
    Males,
    Females,
    Other,
    MalesAndFemales,
    MalesAndOther,
    FemalesAndOther,
}

impl SexualPreference {
    /// Whether someone of `gender` falls inside this preference
    pub fn accepts(self, gender: Gender) -> bool {
        match self {
            SexualPreference::Males => gender == Gender::Male,
            SexualPreference::Females => gender == Gender::Female,
            SexualPreference::Other => gender == Gender::Other,
            SexualPreference::MalesAndFemales => gender != Gender::Other,
            SexualPreference::MalesAndOther => gender != Gender::Female,
            SexualPreference::FemalesAndOther => gender != Gender::Male,
        }
    }
}

impl From<u32> for SexualPreference {
    fn from(value: u32) -> Self {
        match value {
            1 => SexualPreference::Males,
            2 => SexualPreference::Females,
            12 => SexualPreference::MalesAndFemales,
            13 => SexualPreference::MalesAndOther,
            23 => SexualPreference::FemalesAndOther,
            _ => SexualPreference::Other,
        }
    }
}

impl From<SexualPreference> for u32 {
    fn from(value: SexualPreference) -> Self {
        match value {
            SexualPreference::Males => 1,
            SexualPreference::Females => 2,
            SexualPreference::Other => 3,
            SexualPreference::MalesAndFemales => 12,
            SexualPreference::MalesAndOther => 13,
            SexualPreference::FemalesAndOther => 23,
        }
    }
}

/// Residency status (in-state=0, out-of-state=1, international=2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum StudentType {
    InState,
    OutOfState,
    International,
}

impl TryFrom<u32> for StudentType {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StudentType::InState),
            1 => Ok(StudentType::OutOfState),
            2 => Ok(StudentType::International),
            _ => Err(ModelError::InvalidCode { field: "studentType", value }),
        }
    }
}

impl From<StudentType> for u32 {
    fn from(value: StudentType) -> Self {
        match value {
            StudentType::InState => 0,
            StudentType::OutOfState => 1,
            StudentType::International => 2,
        }
    }
}

/// Raw class-year code.
///
/// Kept as the stored number so two unusual years only compare equal when
/// their codes do; use [`YearCode::class_year`] for the decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearCode(pub u32);

impl YearCode {
    pub fn class_year(self) -> ClassYear {
        match self.0 {
            0 => ClassYear::Freshman,
            1 => ClassYear::Sophomore,
            2 => ClassYear::Junior,
            3 => ClassYear::Senior,
            4 => ClassYear::FifthYear,
            _ => ClassYear::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    FifthYear,
    /// Described by the profile's `yearExplanation`
    Other,
}

impl ClassYear {
    pub fn label(self) -> &'static str {
        match self {
            ClassYear::Freshman => "Freshman",
            ClassYear::Sophomore => "Sophomore",
            ClassYear::Junior => "Junior",
            ClassYear::Senior => "Senior",
            ClassYear::FifthYear => "Fifth Year",
            ClassYear::Other => "Other",
        }
    }
}

/// An optional, user-authored fact shown as a card on the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factoid<T> {
    pub value: T,
    #[serde(rename = "displayOrder", default)]
    pub display_order: i32,
    #[serde(rename = "isHidden", default)]
    pub is_hidden: bool,
}

impl<T> Factoid<T> {
    /// Visible factoid at display position 0
    pub fn new(value: T) -> Self {
        Self {
            value,
            display_order: 0,
            is_hidden: false,
        }
    }

    pub fn ordered(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }
}

/// Demographic and preference attributes read by the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserData {
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    pub gender: Gender,
    #[serde(rename = "sexualPreference")]
    pub sexual_preference: SexualPreference,
    #[serde(rename = "studentType")]
    pub student_type: StudentType,
    #[serde(rename = "yearCode")]
    pub year_code: YearCode,
    #[serde(rename = "yearExplanation", default, skip_serializing_if = "Option::is_none")]
    pub year_explanation: Option<String>,
    #[validate(length(min = 1))]
    pub major: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sports: Option<Factoid<Vec<String>>>,
    #[serde(rename = "callsHome", default, skip_serializing_if = "Option::is_none")]
    pub calls_home: Option<Factoid<String>>,
    #[serde(rename = "greekLifeOrganisation", default, skip_serializing_if = "Option::is_none")]
    pub greek_life_organisation: Option<Factoid<String>>,
    #[serde(rename = "lookingFor", default, skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<Vec<String>>,
}

/// Display-only facts; never read by the scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactoidData {
    #[serde(default)]
    pub facts: Vec<Factoid<String>>,
}

/// A user's full profile as handed over by the data-access layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[validate(nested)]
    #[serde(rename = "userData")]
    pub user_data: UserData,
    #[serde(rename = "factoidData")]
    pub factoid_data: FactoidData,
}

impl UserProfile {
    /// Parse and validate a single profile record
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let profile: UserProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Compatibility of `other` as seen from this profile, with the default point table
    pub fn similarity(&self, other: &UserProfile) -> Similarity {
        crate::core::scoring::similarity(self, other)
    }

    pub fn quick_facts(&self) -> QuickFacts<'_> {
        QuickFacts {
            gender: self.user_data.gender,
            major: &self.user_data.major,
            class_year: self.user_data.year_code.class_year(),
            year_explanation: self.user_data.year_explanation.as_deref(),
        }
    }

    /// Non-hidden factoid cards in display order
    pub fn visible_factoids(&self) -> Vec<FactoidCard<'_>> {
        let data = &self.user_data;
        let mut cards: Vec<(i32, FactoidCard<'_>)> = Vec::new();

        if let Some(home) = data.calls_home.as_ref().filter(|f| !f.is_hidden) {
            cards.push((home.display_order, FactoidCard::Hometown(&home.value)));
        }
        if let Some(org) = data.greek_life_organisation.as_ref().filter(|f| !f.is_hidden) {
            cards.push((org.display_order, FactoidCard::GreekLife(&org.value)));
        }
        if let Some(sports) = data.sports.as_ref().filter(|f| !f.is_hidden) {
            cards.push((sports.display_order, FactoidCard::Sports(&sports.value)));
        }
        for fact in self.factoid_data.facts.iter().filter(|f| !f.is_hidden) {
            cards.push((fact.display_order, FactoidCard::Fact(&fact.value)));
        }

        cards.sort_by_key(|(order, _)| *order);
        cards.into_iter().map(|(_, card)| card).collect()
    }
}

/// Typed view over the headline facts of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickFacts<'a> {
    pub gender: Gender,
    pub major: &'a str,
    pub class_year: ClassYear,
    pub year_explanation: Option<&'a str>,
}

impl<'a> QuickFacts<'a> {
    /// Class year as displayed; unusual years fall back to the user's own wording
    pub fn year_label(&self) -> &'a str {
        match (self.class_year, self.year_explanation) {
            (ClassYear::Other, Some(explanation)) if !explanation.trim().is_empty() => explanation,
            (year, _) => year.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoidCard<'a> {
    Hometown(&'a str),
    GreekLife(&'a str),
    Sports(&'a [String]),
    Fact(&'a str),
}

/// Unnormalized compatibility: points achieved out of points possible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Similarity {
    pub achieved: u32,
    pub possible: u32,
}

impl Similarity {
    /// Add points to both sides, saturating at `u32::MAX`
    pub fn award(&mut self, achieved: u32, possible: u32) {
        self.achieved = self.achieved.saturating_add(achieved);
        self.possible = self.possible.saturating_add(possible);
    }

    /// `achieved / possible`, or 0.0 when nothing was contestable
    pub fn ratio(&self) -> f64 {
        if self.possible == 0 {
            return 0.0;
        }
        self.achieved as f64 / self.possible as f64
    }
}

/// Points awarded per scoring category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ScoringPoints {
    /// Per shared sport, added to both achieved and possible
    #[validate(range(max = 10_000))]
    pub sports: u32,
    /// Achieved when both list sports but none overlap
    #[validate(range(max = 10_000))]
    pub sports_partial: u32,
    #[validate(range(max = 10_000))]
    pub hometown: u32,
    #[validate(range(max = 10_000))]
    pub greek_life: u32,
    #[validate(range(max = 10_000))]
    pub major: u32,
    #[validate(range(max = 10_000))]
    pub birthday: u32,
    /// Per shared entry, plus once to possible whenever both specify it
    #[validate(range(max = 10_000))]
    pub looking_for: u32,
    #[validate(range(max = 10_000))]
    pub student_type: u32,
    #[validate(range(max = 10_000))]
    pub year_code: u32,
}

/// Upper bound accepted for any single category when points are configured
pub const MAX_CATEGORY_POINTS: u32 = 10_000;

impl ScoringPoints {
    /// Possible points every pair contests before optional categories
    pub fn base_possible(&self) -> u32 {
        self.major
            .saturating_add(self.birthday)
            .saturating_add(self.student_type)
            .saturating_add(self.year_code)
    }
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            sports: 10,
            sports_partial: 5,
            hometown: 20,
            greek_life: 15,
            major: 20,
            birthday: 5,
            looking_for: 10,
            student_type: 10,
            year_code: 10,
        }
    }
}

/// Ranked candidate returned by the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "pointsAchieved")]
    pub points_achieved: u32,
    #[serde(rename = "pointsPossible")]
    pub points_possible: u32,
    pub compatibility: f64,
}
