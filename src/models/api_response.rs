use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

pub fn error_response(message: &str) -> ApiResponse {
    ApiResponse {
        status: "error".to_string(),
        message: message.to_string(),
    }
}
