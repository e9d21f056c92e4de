use tracing::info;

use crate::domain::{
    common::entities::{app_errors::CoreError, macronutrients::Macronutrients},
    customer::{
        entities::DietaryRestriction, ports::CustomerRepository,
        value_objects::CreateCustomerInput,
    },
    diet_plan::{entities::Meal, ports::DietPlanRepository, value_objects::CreateDietPlanInput},
    production_batch::{
        entities::RecipeBatch, ports::ProductionBatchRepository,
        value_objects::CreateProductionBatchInput,
    },
    recipe::{ports::RecipeRepository, value_objects::CreateRecipeInput},
};

fn restriction(restriction_type: &str, description: &str) -> DietaryRestriction {
    DietaryRestriction {
        restriction_type: restriction_type.to_string(),
        description: description.to_string(),
    }
}

fn customer(
    name: &str,
    phone: &str,
    restrictions: Vec<DietaryRestriction>,
    goal: Macronutrients,
) -> CreateCustomerInput {
    CreateCustomerInput {
        name: name.to_string(),
        email: format!("{name}@example.com"),
        phone: phone.to_string(),
        restrictions,
        goal,
    }
}

fn recipe(name: &str, ingredients: [&str; 4], nutrition: Macronutrients) -> CreateRecipeInput {
    CreateRecipeInput {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        nutrition,
    }
}

fn meal(meal_type: &str, recipe_id: u64) -> Meal {
    Meal {
        meal_type: meal_type.to_string(),
        recipe_id,
        portion: 1,
    }
}

pub fn demo_customers() -> Vec<CreateCustomerInput> {
    vec![
        customer(
            "Alma",
            "123-456-7890",
            vec![
                restriction("Vegetarian", "No meat products"),
                restriction("Allergy", "Cashew allergy"),
            ],
            Macronutrients::new(1800, 80, 200, 60),
        ),
        customer(
            "Felicia",
            "123-333-333",
            vec![],
            Macronutrients::new(2000, 120, 250, 65),
        ),
        customer(
            "Vielrizki",
            "123-444-4444",
            vec![restriction("Gluten-free", "No gluten products")],
            Macronutrients::new(2500, 150, 280, 80),
        ),
    ]
}

pub fn demo_recipes() -> Vec<CreateRecipeInput> {
    vec![
        recipe(
            "Grilled Chicken Salad",
            ["chicken breast", "lettuce", "tomato", "olive oil"],
            Macronutrients::new(350, 40, 15, 18),
        ),
        recipe(
            "Quinoa Bowl",
            ["quinoa", "chickpeas", "vegetables", "tahini"],
            Macronutrients::new(420, 18, 65, 12),
        ),
        recipe(
            "Salmon with Vegetables",
            ["salmon fillet", "broccoli", "carrots", "lemon"],
            Macronutrients::new(450, 38, 20, 25),
        ),
    ]
}

/// Fills empty stores with the demo catalog. Identifiers are allocated by the
/// stores, so the fixtures land on 1, 2, 3 and new records continue after.
pub async fn seed_demo_data<C, R, D, P>(
    customers: &C,
    recipes: &R,
    diet_plans: &D,
    production_batches: &P,
) -> Result<(), CoreError>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
{
    for input in demo_customers() {
        customers.create_customer(input).await?;
    }

    for input in demo_recipes() {
        recipes.create_recipe(input).await?;
    }

    let plan = diet_plans
        .create_diet_plan(CreateDietPlanInput {
            customer_id: 1,
            date: "2025-11-17".to_string(),
            meals: vec![meal("BREAKFAST", 2), meal("LUNCH", 1), meal("DINNER", 3)],
        })
        .await?;

    production_batches
        .create_production_batch(CreateProductionBatchInput {
            production_date: "2025-11-17".to_string(),
            diet_plans: vec![plan.id],
            recipe_batches: (1..=3)
                .map(|recipe_id| RecipeBatch {
                    recipe_id,
                    portions: 10,
                })
                .collect(),
        })
        .await?;

    info!("Demo data seeded");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet_plan::value_objects::GetDietPlansFilter;
    use crate::infrastructure::memory::{
        InMemoryCustomerRepository, InMemoryDietPlanRepository, InMemoryProductionBatchRepository,
        InMemoryRecipeRepository,
    };

    #[tokio::test]
    async fn test_seed_populates_every_store() {
        let customers = InMemoryCustomerRepository::new();
        let recipes = InMemoryRecipeRepository::new();
        let plans = InMemoryDietPlanRepository::new();
        let batches = InMemoryProductionBatchRepository::new();

        seed_demo_data(&customers, &recipes, &plans, &batches)
            .await
            .unwrap();

        let names: Vec<String> = customers
            .fetch_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Alma", "Felicia", "Vielrizki"]);
        assert_eq!(recipes.fetch_recipes().await.unwrap().len(), 3);
        assert_eq!(
            plans
                .fetch_diet_plans(GetDietPlansFilter::default())
                .await
                .unwrap()[0]
                .customer_id,
            1
        );
        assert_eq!(batches.fetch_production_batches().await.unwrap()[0].diet_plans, vec![1]);
    }

    #[tokio::test]
    async fn test_new_records_continue_after_fixtures() {
        let customers = InMemoryCustomerRepository::new();
        let recipes = InMemoryRecipeRepository::new();
        let plans = InMemoryDietPlanRepository::new();
        let batches = InMemoryProductionBatchRepository::new();
        seed_demo_data(&customers, &recipes, &plans, &batches)
            .await
            .unwrap();

        let created = customers
            .create_customer(demo_customers().remove(0))
            .await
            .unwrap();

        assert_eq!(created.id, 4);
    }
}
