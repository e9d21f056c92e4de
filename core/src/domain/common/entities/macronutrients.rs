use std::ops::Add;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Calories, protein, carbs and fat as whole numbers.
///
/// Used both for a recipe's nutrition facts and for a customer's daily goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Macronutrients {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl Macronutrients {
    pub const fn new(calories: i64, protein: i64, carbs: i64, fat: i64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn scaled(self, factor: i64) -> Self {
        self.map(|value| value.saturating_mul(factor))
    }

    /// Field-wise absolute difference.
    pub fn abs_diff(self, other: Self) -> Self {
        self.zip(other, |a, b| a.saturating_sub(b).saturating_abs())
    }

    pub fn map(self, f: impl Fn(i64) -> i64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
        }
    }

    pub fn zip(self, other: Self, f: impl Fn(i64, i64) -> i64) -> Self {
        Self {
            calories: f(self.calories, other.calories),
            protein: f(self.protein, other.protein),
            carbs: f(self.carbs, other.carbs),
            fat: f(self.fat, other.fat),
        }
    }

    /// `(name, value)` pairs in a fixed order.
    pub fn fields(&self) -> [(&'static str, i64); 4] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ]
    }
}

impl Add for Macronutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, i64::saturating_add)
    }
}
