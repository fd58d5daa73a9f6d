#![doc = include_str!("../README.md")]

mod api;

pub use api::{login_response_body, start_api_mock, start_login_mock, unreachable_config};
