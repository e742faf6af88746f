//! Assessment module - questionnaire encoding and the tendency decision.
//!
//! - `vocabulary` - enumerated answers and their label/code tables
//! - `scales` - bounded numeric and ordinal answers
//! - `subject` - the encoded fifteen-column record
//! - `encoder` - answer sheet to subject record
//! - `decision` - threshold rule and assessment outcome

mod decision;
mod encoder;
mod scales;
mod subject;
mod vocabulary;

pub use decision::{Assessment, Tendency, DECISION_THRESHOLD};
pub use encoder::{AnswerSheet, InputEncoder};
pub use scales::{
    ActivityDays, Age, Height, MainMeals, Ordinal, ScreenTime, VegetableFrequency, WaterIntake,
};
pub use subject::{FeatureValue, Field, SubjectRecord};
pub use vocabulary::{AlcoholFrequency, AnswerChoice, Gender, SnackFrequency, Transport, YesNo};
