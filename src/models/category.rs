#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodAndDining,
    Utility,
    Shopping,
    Education,
    PersonalCare,
    Travel,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Utility => "Utility",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::Travel => "Travel",
        }
    }

    /// Parse a display name (case-insensitive) or a one-word alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food & dining" | "food&dining" | "food and dining" | "food" | "dining" => {
                Some(Self::FoodAndDining)
            }
            "utility" | "utilities" => Some(Self::Utility),
            "shopping" => Some(Self::Shopping),
            "education" => Some(Self::Education),
            "personal care" | "personal-care" | "personalcare" | "personal" => {
                Some(Self::PersonalCare)
            }
            "travel" => Some(Self::Travel),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndDining,
            Self::Utility,
            Self::Shopping,
            Self::Education,
            Self::PersonalCare,
            Self::Travel,
        ]
    }

    /// Next category in display order; `None` wraps back to "no filter".
    pub fn cycle(current: Option<Category>) -> Option<Category> {
        let all = Self::all();
        match current {
            None => all.first().copied(),
            Some(c) => {
                let idx = all.iter().position(|x| *x == c).unwrap_or(0);
                all.get(idx + 1).copied()
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
