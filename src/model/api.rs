use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic acknowledgement for operations without a richer result.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}
