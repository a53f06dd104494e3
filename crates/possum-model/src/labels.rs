//! Class-index to population-label mapping for the trained model.
//!
//! The artifact was trained with class 0 = the Victoria population; every
//! other class index collapses to "Other".

/// Predicted possum population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    /// Class 0 — the Victoria (Vic) population.
    Victoria,
    /// Any non-zero class.
    Other,
}

impl Population {
    /// Map a raw class index from the classifier to a population label.
    pub fn from_class_index(index: i64) -> Self {
        if index == 0 {
            Self::Victoria
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Victoria => "Victoria (Vic)",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_zero_is_victoria() {
        assert_eq!(Population::from_class_index(0), Population::Victoria);
        assert_eq!(Population::from_class_index(0).as_str(), "Victoria (Vic)");
    }

    #[test]
    fn any_nonzero_class_is_other() {
        assert_eq!(Population::from_class_index(1), Population::Other);
        assert_eq!(Population::from_class_index(2), Population::Other);
        assert_eq!(Population::from_class_index(-3), Population::Other);
        assert_eq!(Population::from_class_index(1).as_str(), "Other");
    }
}
