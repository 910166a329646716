use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Free text is forwarded as typed; only the JSON shape is checked.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDescriptionValidator {
    #[serde(default)]
    pub description: String,
}

/// Multipart body of `PUT /meal/image`, for the OpenAPI document only.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
