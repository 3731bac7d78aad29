use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Spending/earning category. The known set has fixed glyphs; anything else
/// is kept verbatim in `Unknown` and rendered with a fallback glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Leisure,
    Salary,
    Education,
    Health,
    Other,
    Unknown(String),
}

pub const FALLBACK_GLYPH: &str = "❓";

impl Category {
    pub const KNOWN: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Leisure,
        Category::Salary,
        Category::Education,
        Category::Health,
        Category::Other,
    ];

    /// Parses a category label. English names and the pt-BR labels of the
    /// entry form are both recognised, ignoring case.
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        let category = match label.to_lowercase().as_str() {
            "food" | "alimentação" | "alimentacao" => Category::Food,
            "transport" | "transporte" => Category::Transport,
            "housing" | "moradia" => Category::Housing,
            "leisure" | "lazer" => Category::Leisure,
            "salary" | "salário" | "salario" => Category::Salary,
            "education" | "educação" | "educacao" => Category::Education,
            "health" | "saúde" | "saude" => Category::Health,
            "other" | "outros" => Category::Other,
            _ => Category::Unknown(label.to_string()),
        };
        Ok(category)
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Leisure => "Leisure",
            Category::Salary => "Salary",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Other => "Other",
            Category::Unknown(label) => label,
        }
    }

    /// Label in the given locale; only pt-BR has its own names.
    pub fn localized_label(&self, locale: &str) -> &str {
        if !locale.to_ascii_lowercase().starts_with("pt") {
            return self.label();
        }
        match self {
            Category::Food => "Alimentação",
            Category::Transport => "Transporte",
            Category::Housing => "Moradia",
            Category::Leisure => "Lazer",
            Category::Salary => "Salário",
            Category::Education => "Educação",
            Category::Health => "Saúde",
            Category::Other => "Outros",
            Category::Unknown(label) => label,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚗",
            Category::Housing => "🏠",
            Category::Leisure => "🎬",
            Category::Salary => "💰",
            Category::Education => "📚",
            Category::Health => "💊",
            Category::Other => "📦",
            Category::Unknown(_) => FALLBACK_GLYPH,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Category::parse(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(label) => label,
            known => known.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_form_labels() {
        assert_eq!(Category::parse("Food").unwrap(), Category::Food);
        assert_eq!(Category::parse("  alimentação ").unwrap(), Category::Food);
        assert_eq!(Category::parse("Salário").unwrap(), Category::Salary);
        assert_eq!(Category::parse("OUTROS").unwrap(), Category::Other);
    }

    #[test]
    fn unrecognised_label_is_kept_with_fallback_glyph() {
        let category = Category::parse(" Pets ").unwrap();
        assert_eq!(category, Category::Unknown("Pets".to_string()));
        assert_eq!(category.label(), "Pets");
        assert_eq!(category.glyph(), FALLBACK_GLYPH);
        assert!(!category.is_known());
    }

    #[test]
    fn empty_label_is_rejected() {
        assert_eq!(Category::parse("   "), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn every_known_category_has_its_own_glyph() {
        let mut glyphs: Vec<_> = Category::KNOWN.iter().map(Category::glyph).collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Category::KNOWN.len());
        assert!(!glyphs.contains(&FALLBACK_GLYPH));
    }

    #[test]
    fn localized_labels_round_trip_through_parse() {
        for category in Category::KNOWN {
            let label = category.localized_label("pt-BR");
            assert_eq!(Category::parse(label).unwrap(), category);
        }
        assert_eq!(Category::Health.localized_label("en-US"), "Health");
    }
}
