//! Modal configuration contract shared by the components and the demo app.

pub mod color;
pub mod config;
pub mod validator;
