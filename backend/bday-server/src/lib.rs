pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    hello::{
        hello::{hello, save_birthday},
        hello_response::HelloResponse,
        save_birthday_request::SaveBirthdayRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
