#![doc = include_str!("../README.md")]

pub mod controller;
pub mod logging;
pub mod navigation;
pub mod notification;
pub mod outcome;
pub mod session;
mod settings;
pub mod validation;

pub use settings::SigninSettings;
