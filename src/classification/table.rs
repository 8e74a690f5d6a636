//! Classification table.
//!
//! Ranges are half-open so every positive reading falls in exactly one
//! category, including values such as 24.95 that sit between the
//! one-decimal bounds of the published table.

use super::types::{BmiReading, Category, Classification};

/// Lower bound of the normal range.
pub const NORMAL_FROM: f64 = 18.5;
/// Lower bound of the overweight range.
pub const OVERWEIGHT_FROM: f64 = 25.0;
/// Lower bound of the obesity range.
pub const OBESITY_FROM: f64 = 30.0;
/// Lower bound of the severe obesity range.
pub const SEVERE_OBESITY_FROM: f64 = 40.0;

/// Category of a reading.
pub fn category_of(reading: BmiReading) -> Category {
    let value = reading.value();
    if value < NORMAL_FROM {
        Category::Underweight
    } else if value < OVERWEIGHT_FROM {
        Category::Normal
    } else if value < OBESITY_FROM {
        Category::Overweight
    } else if value < SEVERE_OBESITY_FROM {
        Category::Obesity
    } else {
        Category::SevereObesity
    }
}

/// Classify a reading into its full response form.
pub fn classify(reading: BmiReading) -> Classification {
    Classification::new(reading, category_of(reading))
}
