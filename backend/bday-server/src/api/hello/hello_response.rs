use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
}
