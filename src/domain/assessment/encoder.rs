//! Input encoder - turns questionnaire answers into a [`SubjectRecord`].

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::scales::{
    ActivityDays, Age, Height, MainMeals, ScreenTime, VegetableFrequency, WaterIntake,
};
use super::subject::{Field, SubjectRecord};
use super::vocabulary::{
    AlcoholFrequency, AnswerChoice, Gender, SnackFrequency, Transport, YesNo,
};

/// Raw answers as submitted by the form: display labels and plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSheet {
    pub gender: String,
    pub age: i64,
    pub height: f64,
    pub family_history: String,
    pub favc: String,
    pub fcvc: i64,
    pub ncp: i64,
    pub caec: String,
    pub smoke: String,
    pub ch2o: i64,
    pub scc: String,
    pub faf: i64,
    pub tue: i64,
    pub calc: String,
    pub mtrans: String,
}

impl Default for AnswerSheet {
    /// The answers the form starts with.
    fn default() -> Self {
        Self {
            gender: Gender::Female.label().to_string(),
            age: 25,
            height: 1.70,
            family_history: YesNo::Yes.label().to_string(),
            favc: YesNo::Yes.label().to_string(),
            fcvc: 2,
            ncp: 3,
            caec: SnackFrequency::Never.label().to_string(),
            smoke: YesNo::No.label().to_string(),
            ch2o: 2,
            scc: YesNo::No.label().to_string(),
            faf: 1,
            tue: 1,
            calc: AlcoholFrequency::Never.label().to_string(),
            mtrans: Transport::PublicTransportation.label().to_string(),
        }
    }
}

/// Maps display labels to training codes using the static vocabularies.
pub struct InputEncoder;

impl InputEncoder {
    /// Encodes one answer sheet.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found: an empty or unknown label,
    /// or a number outside its scale.
    pub fn encode(answers: &AnswerSheet) -> Result<SubjectRecord, ValidationError> {
        Ok(SubjectRecord {
            gender: choice(Field::Gender, &answers.gender)?,
            age: Age::try_new(answers.age)?,
            height: Height::try_new(answers.height)?,
            family_history: choice(Field::FamilyHistory, &answers.family_history)?,
            favc: choice(Field::Favc, &answers.favc)?,
            fcvc: VegetableFrequency::try_new(Field::Fcvc.name(), answers.fcvc)?,
            ncp: MainMeals::try_new(Field::Ncp.name(), answers.ncp)?,
            caec: choice(Field::Caec, &answers.caec)?,
            smoke: choice(Field::Smoke, &answers.smoke)?,
            ch2o: WaterIntake::try_new(Field::Ch2o.name(), answers.ch2o)?,
            scc: choice(Field::Scc, &answers.scc)?,
            faf: ActivityDays::try_new(Field::Faf.name(), answers.faf)?,
            tue: ScreenTime::try_new(Field::Tue.name(), answers.tue)?,
            calc: choice(Field::Calc, &answers.calc)?,
            mtrans: choice(Field::Mtrans, &answers.mtrans)?,
        })
    }
}

fn choice<C: AnswerChoice>(field: Field, label: &str) -> Result<C, ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::empty_field(field.name()));
    }
    C::from_label(label).ok_or_else(|| ValidationError::unknown_label(field.name(), label))
}
