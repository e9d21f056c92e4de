use std::sync::Arc;

use dietplan_core::application::DietPlanningService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DietPlanningService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DietPlanningService) -> Self {
        Self { args, service }
    }
}
