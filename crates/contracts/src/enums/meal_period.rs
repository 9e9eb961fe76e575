use serde::{Deserialize, Serialize};

/// Meal periods that gate menu visibility, in resolution priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriodId {
    Breakfast,
    Lunch,
    Tea,
    Dinner,
}

impl MealPeriodId {
    /// Code used in query strings and serialized payloads
    pub fn code(&self) -> &'static str {
        match self {
            MealPeriodId::Breakfast => "breakfast",
            MealPeriodId::Lunch => "lunch",
            MealPeriodId::Tea => "tea",
            MealPeriodId::Dinner => "dinner",
        }
    }

    /// Short label for the period chips on a menu card
    pub fn label(&self) -> &'static str {
        match self {
            MealPeriodId::Breakfast => "Breakfast",
            MealPeriodId::Lunch => "Lunch",
            MealPeriodId::Tea => "Tea",
            MealPeriodId::Dinner => "Dinner",
        }
    }

    /// All periods in declaration order. The order is the tie-break for
    /// overlapping windows.
    pub fn all() -> [MealPeriodId; 4] {
        [
            MealPeriodId::Breakfast,
            MealPeriodId::Lunch,
            MealPeriodId::Tea,
            MealPeriodId::Dinner,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "breakfast" => Some(MealPeriodId::Breakfast),
            "lunch" => Some(MealPeriodId::Lunch),
            "tea" => Some(MealPeriodId::Tea),
            "dinner" => Some(MealPeriodId::Dinner),
            _ => None,
        }
    }
}

impl Default for MealPeriodId {
    fn default() -> Self {
        MealPeriodId::Breakfast
    }
}

impl std::fmt::Display for MealPeriodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for id in MealPeriodId::all() {
            assert_eq!(MealPeriodId::from_code(id.code()), Some(id));
        }
        assert_eq!(MealPeriodId::from_code("brunch"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&MealPeriodId::Tea).unwrap();
        assert_eq!(json, "\"tea\"");
    }
}
