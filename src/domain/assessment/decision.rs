//! Decision rule - turns a predisposition probability into a tendency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Probability;

/// Probabilities at or above this value are classified as elevated.
pub const DECISION_THRESHOLD: f64 = 0.55;

/// Classification of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tendency {
    Elevated,
    Low,
}

impl Tendency {
    /// Applies the fixed threshold (inclusive on the high side).
    pub fn from_probability(probability: Probability) -> Self {
        if probability.value() >= DECISION_THRESHOLD {
            Tendency::Elevated
        } else {
            Tendency::Low
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Tendency::Elevated)
    }

    /// Short title shown in the result card.
    pub fn title(&self) -> &'static str {
        match self {
            Tendency::Elevated => "Atenção: Tendência Elevada",
            Tendency::Low => "Ótimo: Tendência Baixa",
        }
    }

    /// Guidance paragraph shown under the title.
    pub fn advice(&self) -> &'static str {
        match self {
            Tendency::Elevated => {
                "Seus hábitos e histórico sugerem uma predisposição maior. \
                 Pequenas mudanças na rotina podem fazer uma grande diferença a longo prazo!"
            }
            Tendency::Low => {
                "Seus padrões atuais indicam um baixo risco de desenvolvimento de obesidade. \
                 Continue mantendo um estilo de vida equilibrado!"
            }
        }
    }
}

impl fmt::Display for Tendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tendency::Elevated => "elevated tendency",
            Tendency::Low => "low tendency",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one evaluation: the raw probability and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub probability: Probability,
    pub tendency: Tendency,
}

impl Assessment {
    pub fn from_probability(probability: Probability) -> Self {
        Self {
            probability,
            tendency: Tendency::from_probability(probability),
        }
    }

    /// True when the subject is classified as predisposed.
    pub fn is_predisposed(&self) -> bool {
        self.tendency.is_elevated()
    }

    /// Title with the percentage, e.g. `Atenção: Tendência Elevada (80.0%)`.
    pub fn headline(&self) -> String {
        format!("{} ({})", self.tendency.title(), self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(value: f64) -> Probability {
        Probability::try_new(value).unwrap()
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Tendency::from_probability(p(0.55)), Tendency::Elevated);
    }

    #[test]
    fn just_below_threshold_is_low() {
        assert_eq!(Tendency::from_probability(p(0.549999)), Tendency::Low);
    }

    #[test]
    fn extremes() {
        assert_eq!(Tendency::from_probability(p(0.0)), Tendency::Low);
        assert_eq!(Tendency::from_probability(p(1.0)), Tendency::Elevated);
    }

    #[test]
    fn high_probability_renders_elevated_headline() {
        let assessment = Assessment::from_probability(p(0.80));
        assert!(assessment.is_predisposed());
        assert_eq!(assessment.headline(), "Atenção: Tendência Elevada (80.0%)");
    }

    #[test]
    fn low_probability_renders_low_headline() {
        let assessment = Assessment::from_probability(p(0.10));
        assert!(!assessment.is_predisposed());
        assert_eq!(assessment.headline(), "Ótimo: Tendência Baixa (10.0%)");
    }

    #[test]
    fn tendency_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Tendency::Elevated).unwrap(), "\"elevated\"");
        assert_eq!(serde_json::to_string(&Tendency::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn tendency_display() {
        assert_eq!(Tendency::Elevated.to_string(), "elevated tendency");
        assert_eq!(Tendency::Low.to_string(), "low tendency");
    }

    proptest! {
        #[test]
        fn classification_depends_only_on_probability(value in 0.0f64..=1.0) {
            let a = Assessment::from_probability(p(value));
            let b = Assessment::from_probability(p(value));
            prop_assert_eq!(a.tendency, b.tendency);
            prop_assert_eq!(a.is_predisposed(), value >= DECISION_THRESHOLD);
        }

        #[test]
        fn classification_is_monotonic(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
            let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
            if Tendency::from_probability(p(lo)).is_elevated() {
                prop_assert!(Tendency::from_probability(p(hi)).is_elevated());
            }
        }
    }
}
