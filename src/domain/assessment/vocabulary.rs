//! Answer vocabularies - the enumerated choices offered by the questionnaire.
//!
//! Each choice has two spellings: the Portuguese label shown to the user and
//! the code the classifier was trained on. Both directions are total over
//! [`AnswerChoice::ALL`]; anything else is rejected rather than defaulted.

use serde::{Deserialize, Serialize};

/// A closed set of answers with a display label and a training code.
pub trait AnswerChoice: Sized + Copy + PartialEq + 'static {
    /// Every choice, in the order the form offers them.
    const ALL: &'static [Self];

    /// Label shown to the user.
    fn label(&self) -> &'static str;

    /// Token the classifier was trained on.
    fn code(&self) -> &'static str;

    /// Looks up a choice by its display label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Looks up a choice by its training code.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Display labels in form order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

/// Gender (`Gender`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl AnswerChoice for Gender {
    const ALL: &'static [Self] = &[Gender::Female, Gender::Male];

    fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Feminino",
            Gender::Male => "Masculino",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

/// Binary answer shared by `family_history`, `FAVC`, `SMOKE` and `SCC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl AnswerChoice for YesNo {
    const ALL: &'static [Self] = &[YesNo::Yes, YesNo::No];

    fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Sim",
            YesNo::No => "Não",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

/// Snacking between meals (`CAEC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnackFrequency {
    #[serde(rename = "no")]
    Never,
    Sometimes,
    Frequently,
    Always,
}

impl AnswerChoice for SnackFrequency {
    const ALL: &'static [Self] = &[
        SnackFrequency::Never,
        SnackFrequency::Sometimes,
        SnackFrequency::Frequently,
        SnackFrequency::Always,
    ];

    fn label(&self) -> &'static str {
        match self {
            SnackFrequency::Never => "Não",
            SnackFrequency::Sometimes => "Às vezes",
            SnackFrequency::Frequently => "Frequentemente",
            SnackFrequency::Always => "Sempre",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            SnackFrequency::Never => "no",
            SnackFrequency::Sometimes => "Sometimes",
            SnackFrequency::Frequently => "Frequently",
            SnackFrequency::Always => "Always",
        }
    }
}

/// Alcohol consumption (`CALC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlcoholFrequency {
    #[serde(rename = "no")]
    Never,
    Sometimes,
    Frequently,
}

impl AnswerChoice for AlcoholFrequency {
    const ALL: &'static [Self] = &[
        AlcoholFrequency::Never,
        AlcoholFrequency::Sometimes,
        AlcoholFrequency::Frequently,
    ];

    fn label(&self) -> &'static str {
        match self {
            AlcoholFrequency::Never => "Não",
            AlcoholFrequency::Sometimes => "Às vezes",
            AlcoholFrequency::Frequently => "Frequentemente",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AlcoholFrequency::Never => "no",
            AlcoholFrequency::Sometimes => "Sometimes",
            AlcoholFrequency::Frequently => "Frequently",
        }
    }
}

/// Main means of transport (`MTRANS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    #[serde(rename = "Public_Transportation")]
    PublicTransportation,
    Automobile,
    Walking,
    Bike,
    Motorbike,
}

impl AnswerChoice for Transport {
    const ALL: &'static [Self] = &[
        Transport::PublicTransportation,
        Transport::Automobile,
        Transport::Walking,
        Transport::Bike,
        Transport::Motorbike,
    ];

    fn label(&self) -> &'static str {
        match self {
            Transport::PublicTransportation => "Transporte Público",
            Transport::Automobile => "Carro",
            Transport::Walking => "Caminhada",
            Transport::Bike => "Bicicleta",
            Transport::Motorbike => "Moto",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Transport::PublicTransportation => "Public_Transportation",
            Transport::Automobile => "Automobile",
            Transport::Walking => "Walking",
            Transport::Bike => "Bike",
            Transport::Motorbike => "Motorbike",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_serde_matches_code<C: AnswerChoice + Serialize>() {
        for choice in C::ALL {
            let json = serde_json::to_string(choice).unwrap();
            assert_eq!(json, format!("\"{}\"", choice.code()));
        }
    }

    fn assert_round_trips<C: AnswerChoice + std::fmt::Debug>() {
        for choice in C::ALL {
            assert_eq!(C::from_label(choice.label()), Some(*choice));
            assert_eq!(C::from_code(choice.code()), Some(*choice));
        }
    }

    #[test]
    fn sim_encodes_to_yes_and_nao_to_no() {
        assert_eq!(YesNo::from_label("Sim").map(|c| c.code()), Some("yes"));
        assert_eq!(YesNo::from_label("Não").map(|c| c.code()), Some("no"));
    }

    #[test]
    fn transport_labels_map_to_training_codes() {
        let pairs = [
            ("Transporte Público", "Public_Transportation"),
            ("Carro", "Automobile"),
            ("Caminhada", "Walking"),
            ("Bicicleta", "Bike"),
            ("Moto", "Motorbike"),
        ];
        for (label, code) in pairs {
            assert_eq!(Transport::from_label(label).map(|t| t.code()), Some(code));
        }
    }

    #[test]
    fn snack_frequency_codes_keep_training_capitalization() {
        assert_eq!(SnackFrequency::from_label("Às vezes").unwrap().code(), "Sometimes");
        assert_eq!(SnackFrequency::from_label("Não").unwrap().code(), "no");
        assert_eq!(SnackFrequency::from_label("Sempre").unwrap().code(), "Always");
    }

    #[test]
    fn alcohol_frequency_has_no_always_option() {
        assert_eq!(AlcoholFrequency::ALL.len(), 3);
        assert!(AlcoholFrequency::from_label("Sempre").is_none());
        assert!(AlcoholFrequency::from_code("Always").is_none());
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(Gender::from_label("Outro").is_none());
        assert!(YesNo::from_label("sim").is_none());
        assert!(YesNo::from_label("yes").is_none());
        assert!(Transport::from_label("").is_none());
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(SnackFrequency::from_code("sometimes").is_none());
        assert!(SnackFrequency::from_code("Sometimes").is_some());
    }

    #[test]
    fn labels_are_in_form_order() {
        assert_eq!(Gender::labels(), vec!["Feminino", "Masculino"]);
        assert_eq!(
            SnackFrequency::labels(),
            vec!["Não", "Às vezes", "Frequentemente", "Sempre"]
        );
    }

    #[test]
    fn every_vocabulary_round_trips() {
        assert_round_trips::<Gender>();
        assert_round_trips::<YesNo>();
        assert_round_trips::<SnackFrequency>();
        assert_round_trips::<AlcoholFrequency>();
        assert_round_trips::<Transport>();
    }

    #[test]
    fn serde_representation_is_the_training_code() {
        assert_serde_matches_code::<Gender>();
        assert_serde_matches_code::<YesNo>();
        assert_serde_matches_code::<SnackFrequency>();
        assert_serde_matches_code::<AlcoholFrequency>();
        assert_serde_matches_code::<Transport>();
    }
}
