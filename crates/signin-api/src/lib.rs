#![doc = include_str!("../README.md")]

mod configuration;
mod error;
mod login;
mod util;

pub use configuration::Configuration;
pub use error::Error;
pub use login::{
    send_login_request, LoginApiRequest, LoginApiResponse, LoginResponseData, LOGIN_PATH,
};
pub use util::AuthRequired;
