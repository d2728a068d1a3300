//! Form field definitions and the record built from one submission.
//!
//! Numeric fields carry the bounds shown in the form; values are clamped
//! and snapped to the field step on construction, so an out-of-range value
//! is never silently accepted. Categorical fields are typed enums whose
//! string forms match the fitted encoder's vocabulary.

use crate::data::schema::CATEGORICAL_FIELDS;

/// Inclusive bounds, step, and default for one numeric form field.
#[derive(Debug, Clone, Copy)]
pub struct NumericField {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl NumericField {
    /// Snap to the field step and clamp into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            (value / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const AGE: NumericField = NumericField {
    label: "Age",
    min: 18.0,
    max: 65.0,
    step: 1.0,
    default: 25.0,
};

pub const INITIAL_SKILL: NumericField = NumericField {
    label: "Initial Skill Level",
    min: 0.0,
    max: 10.0,
    step: 0.5,
    default: 5.0,
};

pub const TRAINING_HOURS: NumericField = NumericField {
    label: "Training Hours Completed",
    min: 0.0,
    max: 500.0,
    step: 1.0,
    default: 50.0,
};

pub const CONFIDENCE: NumericField = NumericField {
    label: "Confidence Level",
    min: 0.0,
    max: 10.0,
    step: 1.0,
    default: 5.0,
};

pub const FEEDBACK: NumericField = NumericField {
    label: "Feedback Score",
    min: 0.0,
    max: 10.0,
    step: 1.0,
    default: 5.0,
};

pub const ACTIVITY: NumericField = NumericField {
    label: "Activity Participation",
    min: 0.0,
    max: 10.0,
    step: 1.0,
    default: 5.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Phd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Masters => "Master's",
            EducationLevel::Phd => "PhD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profession {
    Manager,
    SoftwareEngineer,
    DataScientist,
    Other,
}

impl Profession {
    pub const ALL: [Profession; 4] = [
        Profession::Manager,
        Profession::SoftwareEngineer,
        Profession::DataScientist,
        Profession::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Manager => "Manager",
            Profession::SoftwareEngineer => "Software Engineer",
            Profession::DataScientist => "Data Scientist",
            Profession::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Communication,
    Leadership,
    Technical,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Communication,
        SkillCategory::Leadership,
        SkillCategory::Technical,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Communication => "Communication",
            SkillCategory::Leadership => "Leadership",
            SkillCategory::Technical => "Technical",
            SkillCategory::Other => "Other",
        }
    }
}

/// One submission of the prediction form.
///
/// Created fresh per submission and discarded after rendering; nothing is
/// carried across submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub age: f64,
    pub gender: Gender,
    pub education: EducationLevel,
    pub profession: Profession,
    pub skill: SkillCategory,
    pub initial_skill: f64,
    pub training_hours: f64,
    pub confidence: f64,
    pub feedback: f64,
    pub activity: f64,
}

impl InputRecord {
    /// Build a record, clamping every numeric value into its field bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: f64,
        gender: Gender,
        education: EducationLevel,
        profession: Profession,
        skill: SkillCategory,
        initial_skill: f64,
        training_hours: f64,
        confidence: f64,
        feedback: f64,
        activity: f64,
    ) -> Self {
        InputRecord {
            age: AGE.clamp(age),
            gender,
            education,
            profession,
            skill,
            initial_skill: INITIAL_SKILL.clamp(initial_skill),
            training_hours: TRAINING_HOURS.clamp(training_hours),
            confidence: CONFIDENCE.clamp(confidence),
            feedback: FEEDBACK.clamp(feedback),
            activity: ACTIVITY.clamp(activity),
        }
    }

    /// Numeric features in the order they precede the encoded columns.
    pub fn numeric_values(&self) -> [f64; 6] {
        [
            self.age,
            self.initial_skill,
            self.training_hours,
            self.confidence,
            self.feedback,
            self.activity,
        ]
    }

    /// Categorical fields paired with their schema names.
    pub fn categorical_values(&self) -> [(&'static str, &'static str); 4] {
        [
            (CATEGORICAL_FIELDS[0], self.gender.as_str()),
            (CATEGORICAL_FIELDS[1], self.education.as_str()),
            (CATEGORICAL_FIELDS[2], self.profession.as_str()),
            (CATEGORICAL_FIELDS[3], self.skill.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn record_with_age(age: f64) -> InputRecord {
        InputRecord::new(
            age,
            Gender::Female,
            EducationLevel::Masters,
            Profession::DataScientist,
            SkillCategory::Technical,
            5.0,
            50.0,
            5.0,
            5.0,
            5.0,
        )
    }

    #[test]
    fn age_clamps_to_bounds() {
        assert_abs_diff_eq!(record_with_age(17.0).age, 18.0);
        assert_abs_diff_eq!(record_with_age(66.0).age, 65.0);
        assert_abs_diff_eq!(record_with_age(40.0).age, 40.0);
    }

    #[test]
    fn training_hours_clamp_to_bounds() {
        let mut rec = record_with_age(30.0);
        rec = InputRecord::new(
            rec.age,
            rec.gender,
            rec.education,
            rec.profession,
            rec.skill,
            rec.initial_skill,
            501.0,
            rec.confidence,
            rec.feedback,
            rec.activity,
        );
        assert_abs_diff_eq!(rec.training_hours, 500.0);

        let rec = InputRecord::new(
            30.0,
            Gender::Male,
            EducationLevel::Phd,
            Profession::Manager,
            SkillCategory::Other,
            5.0,
            -1.0,
            5.0,
            5.0,
            5.0,
        );
        assert_abs_diff_eq!(rec.training_hours, 0.0);
    }

    #[test]
    fn initial_skill_snaps_to_half_steps() {
        assert_abs_diff_eq!(INITIAL_SKILL.clamp(5.3), 5.5);
        assert_abs_diff_eq!(INITIAL_SKILL.clamp(5.1), 5.0);
        assert_abs_diff_eq!(INITIAL_SKILL.clamp(12.0), 10.0);
        assert_abs_diff_eq!(INITIAL_SKILL.clamp(-0.4), 0.0);
    }

    #[test]
    fn numeric_values_keep_field_order() {
        let rec = InputRecord::new(
            30.0,
            Gender::Male,
            EducationLevel::Bachelors,
            Profession::Manager,
            SkillCategory::Leadership,
            6.5,
            120.0,
            7.0,
            4.0,
            8.0,
        );
        assert_eq!(rec.numeric_values(), [30.0, 6.5, 120.0, 7.0, 4.0, 8.0]);
    }

    #[test]
    fn categorical_values_match_encoder_vocabulary() {
        let rec = record_with_age(30.0);
        let cats = rec.categorical_values();
        assert_eq!(cats[0], ("Gender", "Female"));
        assert_eq!(cats[1], ("Education Level", "Master's"));
        assert_eq!(cats[2], ("Profession", "Data Scientist"));
        assert_eq!(cats[3], ("Skill Category", "Technical"));
    }
}
