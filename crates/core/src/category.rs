use serde::{Deserialize, Serialize};

/// The four selectable number categories.
///
/// Selection is display state only; it never changes what the averager
/// computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberCategory {
    #[default]
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl NumberCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Prime, Self::Fibonacci, Self::Even, Self::Random];

    /// Single-letter identifier (`p`, `f`, `e`, `r`).
    pub fn id(self) -> char {
        match self {
            Self::Prime     => 'p',
            Self::Fibonacci => 'f',
            Self::Even      => 'e',
            Self::Random    => 'r',
        }
    }

    pub fn from_id(id: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Prime     => "Prime",
            Self::Fibonacci => "Fibonacci",
            Self::Even      => "Even",
            Self::Random    => "Random",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Prime     => "Calculate average of prime numbers",
            Self::Fibonacci => "Calculate average of Fibonacci numbers",
            Self::Even      => "Calculate average of even numbers",
            Self::Random    => "Calculate average of random numbers",
        }
    }
}

impl std::fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for category in NumberCategory::ALL {
            assert_eq!(NumberCategory::from_id(category.id()), Some(category));
        }
        assert_eq!(NumberCategory::from_id('x'), None);
    }

    #[test]
    fn default_is_prime() {
        assert_eq!(NumberCategory::default(), NumberCategory::Prime);
    }

    #[test]
    fn deserializes_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            category: NumberCategory,
        }
        let w: Wrapper = toml::from_str(r#"category = "fibonacci""#).unwrap();
        assert_eq!(w.category, NumberCategory::Fibonacci);
    }
}
