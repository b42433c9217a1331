use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
///
/// Not-found responses carry only `message`; other errors carry the status `code` and
/// either `errorObj` (a failed operation) or `errorsArray` (failed field validation).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "errorObj", default, skip_serializing_if = "Option::is_none")]
    pub error_obj: Option<ErrorObjDto>,
    #[serde(rename = "errorsArray", default, skip_serializing_if = "Option::is_none")]
    pub errors_array: Option<Vec<FieldErrorDto>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorObjDto {
    pub kind: String,
    pub message: String,
}

/// One failed field rule, shaped like the entries of a request validator's error list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FieldErrorDto {
    pub location: String,
    pub param: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    pub msg: String,
}

/// Success envelope used by create and list endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DataDto<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WelcomeDto {
    pub name: String,
    pub message: String,
    pub version: String,
}
