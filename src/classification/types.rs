//! Classification domain types.

use serde::Serialize;

/// Body mass index categories, from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Magreza")]
    Underweight,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Sobrepeso")]
    Overweight,
    #[serde(rename = "Obesidade")]
    Obesity,
    #[serde(rename = "Obesidade Grave")]
    SevereObesity,
}

impl Category {
    /// Label reported to clients.
    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Magreza",
            Category::Normal => "Normal",
            Category::Overweight => "Sobrepeso",
            Category::Obesity => "Obesidade",
            Category::SevereObesity => "Obesidade Grave",
        }
    }

    /// Obesity grade: 0 below overweight, then 1 to 3.
    pub fn obesity_grade(self) -> u8 {
        match self {
            Category::Underweight | Category::Normal => 0,
            Category::Overweight => 1,
            Category::Obesity => 2,
            Category::SevereObesity => 3,
        }
    }

    /// Human readable sentence describing the category.
    pub fn message(self) -> &'static str {
        match self {
            Category::Underweight => "A pessoa está abaixo do peso (Magreza)",
            Category::Normal => "A pessoa está com peso normal",
            Category::Overweight => "A pessoa está com sobrepeso",
            Category::Obesity => "A pessoa está com obesidade",
            Category::SevereObesity => "A pessoa está com obesidade grave",
        }
    }
}

/// Why a raw value could not become a [`BmiReading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    #[error("Input should be a valid number, unable to parse string as a number")]
    NotANumber,
    #[error("Input should be a finite number")]
    NotFinite,
    #[error("Input should be greater than 0")]
    NotPositive,
}

/// A validated body mass index: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BmiReading(f64);

impl BmiReading {
    pub fn new(value: f64) -> Result<Self, ReadingError> {
        if !value.is_finite() {
            return Err(ReadingError::NotFinite);
        }
        if value <= 0.0 {
            return Err(ReadingError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Parse a query-string value. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ReadingError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ReadingError::NotANumber)?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Result of classifying one reading, as returned by `GET /imc`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    #[serde(rename = "imc")]
    pub bmi: f64,
    #[serde(rename = "classificacao")]
    pub category: Category,
    #[serde(rename = "obesidade_grau")]
    pub obesity_grade: u8,
    #[serde(rename = "mensagem")]
    pub message: &'static str,
}

impl Classification {
    pub fn new(reading: BmiReading, category: Category) -> Self {
        Self {
            bmi: reading.value(),
            category,
            obesity_grade: category.obesity_grade(),
            message: category.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_and_scientific_numbers() {
        assert_eq!(BmiReading::parse("25.5").unwrap().value(), 25.5);
        assert_eq!(BmiReading::parse(" 2.2e1 ").unwrap().value(), 22.0);
        assert_eq!(BmiReading::parse("30").unwrap().value(), 30.0);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(BmiReading::parse("abc"), Err(ReadingError::NotANumber));
        assert_eq!(BmiReading::parse(""), Err(ReadingError::NotANumber));
        assert_eq!(BmiReading::parse("0"), Err(ReadingError::NotPositive));
        assert_eq!(BmiReading::parse("-3.2"), Err(ReadingError::NotPositive));
        assert_eq!(BmiReading::parse("inf"), Err(ReadingError::NotFinite));
        assert_eq!(BmiReading::parse("NaN"), Err(ReadingError::NotFinite));
    }

    #[test]
    fn category_label_matches_serialized_name() {
        for category in [
            Category::Underweight,
            Category::Normal,
            Category::Overweight,
            Category::Obesity,
            Category::SevereObesity,
        ] {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.label());
        }
    }

    #[test]
    fn classification_wire_shape() {
        let reading = BmiReading::new(25.5).unwrap();
        let json = serde_json::to_value(Classification::new(reading, Category::Overweight)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "imc": 25.5,
                "classificacao": "Sobrepeso",
                "obesidade_grau": 1,
                "mensagem": "A pessoa está com sobrepeso",
            })
        );
    }
}
