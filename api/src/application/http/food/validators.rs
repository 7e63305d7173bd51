use dietwise_core::domain::food::value_objects::DietaryFilter;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::form_extractor::FormFields;

pub const VEGETARIAN_FIELD: &str = "vegetarian";
pub const IRON_FIELD: &str = "iron";
pub const CALCIUM_FIELD: &str = "calcium";

/// Checkbox fields accepted by the recommendation endpoints. Each may repeat.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendFoodsForm {
    #[schema(example = "vegetarian")]
    pub vegetarian: Option<String>,

    #[schema(example = "iron")]
    pub iron: Option<String>,

    #[schema(example = "calcium")]
    pub calcium: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchFoodsValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 128, message = "sort_by must not be empty"))]
    pub sort_by: Option<String>,
}

pub fn dietary_filter(form: &FormFields) -> DietaryFilter {
    DietaryFilter {
        vegetarian_only: is_flag_set(form, VEGETARIAN_FIELD),
        iron_only: is_flag_set(form, IRON_FIELD),
        calcium_only: is_flag_set(form, CALCIUM_FIELD),
    }
}

/// A checkbox counts when it posts its own name, or a truthy value.
fn is_flag_set(form: &FormFields, name: &str) -> bool {
    form.values(name).any(|value| {
        let value = value.trim();
        value.eq_ignore_ascii_case(name)
            || value.eq_ignore_ascii_case("on")
            || value.eq_ignore_ascii_case("true")
            || value == "1"
    })
}
