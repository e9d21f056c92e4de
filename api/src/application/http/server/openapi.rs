use crate::application::http::{
    authentication::handlers::{
        get_current_user::__path_get_current_user, login::__path_login,
        register::__path_register,
    },
    customer::router::CustomerApiDoc,
    diet_plan::router::DietPlanApiDoc,
    health::__path_live,
    production_batch::router::ProductionBatchApiDoc,
    recipe::router::RecipeApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personalized Diet Planning API"
    ),
    paths(live, register, login, get_current_user),
    components(schemas(ApiErrorResponse)),
    modifiers(&BearerSecurity),
    security(("bearer" = [])),
    nest(
        (path = "/customers", api = CustomerApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/diet-plans", api = DietPlanApiDoc),
        (path = "/production-batches", api = ProductionBatchApiDoc),
    )
)]
pub struct ApiDoc;
