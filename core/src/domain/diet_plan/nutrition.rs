use std::collections::HashMap;

use tracing::warn;

use crate::domain::{
    common::entities::macronutrients::Macronutrients, diet_plan::entities::Meal,
    diet_plan::value_objects::PlanValidation, recipe::entities::Recipe,
};

/// Sums `nutrition * portion` over the meals.
///
/// Meals whose recipe is missing from `recipes` contribute nothing.
pub fn aggregate_nutrition(meals: &[Meal], recipes: &[Recipe]) -> Macronutrients {
    let catalog: HashMap<u64, &Recipe> = recipes.iter().map(|r| (r.id, r)).collect();

    meals
        .iter()
        .filter_map(|meal| match catalog.get(&meal.recipe_id) {
            Some(recipe) => Some(recipe.nutrition.scaled(i64::from(meal.portion))),
            None => {
                warn!(
                    recipe_id = meal.recipe_id,
                    meal_type = %meal.meal_type,
                    "Skipping meal with unknown recipe"
                );
                None
            }
        })
        .fold(Macronutrients::default(), |total, facts| total + facts)
}

/// A field is out of tolerance when it differs from the goal by strictly more
/// than 10% of the goal.
pub fn exceeds_tolerance(difference: i64, goal: i64) -> bool {
    difference.saturating_mul(10) > goal
}

pub fn evaluate_plan(total_nutrition: Macronutrients, goal: Macronutrients) -> PlanValidation {
    let differences = total_nutrition.abs_diff(goal);

    let valid = differences
        .fields()
        .iter()
        .zip(goal.fields())
        .all(|((_, difference), (_, target))| !exceeds_tolerance(*difference, target));

    PlanValidation {
        valid,
        total_nutrition,
        goal,
        differences,
        restrictions_met: true,
    }
}
