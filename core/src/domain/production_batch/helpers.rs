use crate::domain::{diet_plan::entities::DietPlan, production_batch::entities::RecipeBatch};

/// Total portions per recipe across the plans, in order of first appearance.
///
/// Recipes whose portions sum to zero are left out.
pub fn aggregate_recipe_batches(plans: &[DietPlan]) -> Vec<RecipeBatch> {
    let mut batches: Vec<RecipeBatch> = Vec::new();

    for meal in plans.iter().flat_map(|plan| plan.meals.iter()) {
        match batches.iter_mut().find(|b| b.recipe_id == meal.recipe_id) {
            Some(batch) => batch.portions = batch.portions.saturating_add(meal.portion),
            None => batches.push(RecipeBatch {
                recipe_id: meal.recipe_id,
                portions: meal.portion,
            }),
        }
    }

    batches.retain(|b| b.portions > 0);
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet_plan::entities::Meal;

    fn plan(id: u64, meals: &[(u64, u32)]) -> DietPlan {
        DietPlan {
            id,
            customer_id: 1,
            date: "2025-11-17".to_string(),
            meals: meals
                .iter()
                .map(|(recipe_id, portion)| Meal {
                    meal_type: "LUNCH".to_string(),
                    recipe_id: *recipe_id,
                    portion: *portion,
                })
                .collect(),
        }
    }

    #[test]
    fn test_portions_are_summed_across_plans() {
        let plans = vec![plan(1, &[(2, 1), (1, 1), (3, 1)]), plan(2, &[(1, 2), (3, 1)])];

        let batches = aggregate_recipe_batches(&plans);

        assert_eq!(
            batches,
            vec![
                RecipeBatch {
                    recipe_id: 2,
                    portions: 1
                },
                RecipeBatch {
                    recipe_id: 1,
                    portions: 3
                },
                RecipeBatch {
                    recipe_id: 3,
                    portions: 2
                },
            ]
        );
    }

    #[test]
    fn test_zero_portion_recipes_are_dropped() {
        let plans = vec![plan(1, &[(1, 0), (2, 1)])];

        let batches = aggregate_recipe_batches(&plans);

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].recipe_id, 2);
    }

    #[test]
    fn test_no_plans_yield_no_batches() {
        assert!(aggregate_recipe_batches(&[]).is_empty());
    }
}
