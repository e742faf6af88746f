//! Subject record - one fully encoded questionnaire, ready for the classifier.

use serde::Serialize;
use std::fmt;

use super::scales::{
    ActivityDays, Age, Height, MainMeals, ScreenTime, VegetableFrequency, WaterIntake,
};
use super::vocabulary::{
    AlcoholFrequency, AnswerChoice, Gender, SnackFrequency, Transport, YesNo,
};

/// The fifteen input columns of the classifier, in training order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Gender,
    Age,
    Height,
    FamilyHistory,
    Favc,
    Fcvc,
    Ncp,
    Caec,
    Smoke,
    Ch2o,
    Scc,
    Faf,
    Tue,
    Calc,
    Mtrans,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::Gender,
        Field::Age,
        Field::Height,
        Field::FamilyHistory,
        Field::Favc,
        Field::Fcvc,
        Field::Ncp,
        Field::Caec,
        Field::Smoke,
        Field::Ch2o,
        Field::Scc,
        Field::Faf,
        Field::Tue,
        Field::Calc,
        Field::Mtrans,
    ];

    /// Column name used in the training data.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Gender => "Gender",
            Field::Age => "Age",
            Field::Height => "Height",
            Field::FamilyHistory => "family_history",
            Field::Favc => "FAVC",
            Field::Fcvc => "FCVC",
            Field::Ncp => "NCP",
            Field::Caec => "CAEC",
            Field::Smoke => "SMOKE",
            Field::Ch2o => "CH2O",
            Field::Scc => "SCC",
            Field::Faf => "FAF",
            Field::Tue => "TUE",
            Field::Calc => "CALC",
            Field::Mtrans => "MTRANS",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// True for fields whose value is a vocabulary code rather than a number.
    pub fn is_categorical(&self) -> bool {
        matches!(
            self,
            Field::Gender
                | Field::FamilyHistory
                | Field::Favc
                | Field::Caec
                | Field::Smoke
                | Field::Scc
                | Field::Calc
                | Field::Mtrans
        )
    }

    /// True if `code` belongs to this field's training vocabulary.
    pub fn accepts_code(&self, code: &str) -> bool {
        match self {
            Field::Gender => Gender::from_code(code).is_some(),
            Field::FamilyHistory | Field::Favc | Field::Smoke | Field::Scc => {
                YesNo::from_code(code).is_some()
            }
            Field::Caec => SnackFrequency::from_code(code).is_some(),
            Field::Calc => AlcoholFrequency::from_code(code).is_some(),
            Field::Mtrans => Transport::from_code(code).is_some(),
            _ => false,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single encoded column value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Category(&'static str),
}

/// One subject's encoded answers.
///
/// Serializes to a single row keyed by training column names, e.g.
/// `{"Gender":"Female","Age":25,...,"MTRANS":"Walking"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRecord {
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Age")]
    pub age: Age,
    #[serde(rename = "Height")]
    pub height: Height,
    pub family_history: YesNo,
    #[serde(rename = "FAVC")]
    pub favc: YesNo,
    #[serde(rename = "FCVC")]
    pub fcvc: VegetableFrequency,
    #[serde(rename = "NCP")]
    pub ncp: MainMeals,
    #[serde(rename = "CAEC")]
    pub caec: SnackFrequency,
    #[serde(rename = "SMOKE")]
    pub smoke: YesNo,
    #[serde(rename = "CH2O")]
    pub ch2o: WaterIntake,
    #[serde(rename = "SCC")]
    pub scc: YesNo,
    #[serde(rename = "FAF")]
    pub faf: ActivityDays,
    #[serde(rename = "TUE")]
    pub tue: ScreenTime,
    #[serde(rename = "CALC")]
    pub calc: AlcoholFrequency,
    #[serde(rename = "MTRANS")]
    pub mtrans: Transport,
}

impl SubjectRecord {
    /// Returns the encoded value of one column.
    pub fn value_of(&self, field: Field) -> FeatureValue {
        match field {
            Field::Gender => FeatureValue::Category(self.gender.code()),
            Field::Age => FeatureValue::Numeric(f64::from(self.age.years())),
            Field::Height => FeatureValue::Numeric(self.height.meters()),
            Field::FamilyHistory => FeatureValue::Category(self.family_history.code()),
            Field::Favc => FeatureValue::Category(self.favc.code()),
            Field::Fcvc => FeatureValue::Numeric(f64::from(self.fcvc.value())),
            Field::Ncp => FeatureValue::Numeric(f64::from(self.ncp.value())),
            Field::Caec => FeatureValue::Category(self.caec.code()),
            Field::Smoke => FeatureValue::Category(self.smoke.code()),
            Field::Ch2o => FeatureValue::Numeric(f64::from(self.ch2o.value())),
            Field::Scc => FeatureValue::Category(self.scc.code()),
            Field::Faf => FeatureValue::Numeric(f64::from(self.faf.value())),
            Field::Tue => FeatureValue::Numeric(f64::from(self.tue.value())),
            Field::Calc => FeatureValue::Category(self.calc.code()),
            Field::Mtrans => FeatureValue::Category(self.mtrans.code()),
        }
    }

    /// All columns in training order.
    pub fn features(&self) -> [(Field, FeatureValue); 15] {
        Field::ALL.map(|field| (field, self.value_of(field)))
    }
}
