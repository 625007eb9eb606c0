pub mod hello;
pub mod hello_response;
pub mod save_birthday_request;
