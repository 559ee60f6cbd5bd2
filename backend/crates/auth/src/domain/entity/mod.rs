//! Entity Module

pub mod access_token;
pub mod admin_credential;
