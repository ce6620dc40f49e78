// TEN Navigator - Core Library
//
// Configuration, request descriptors and tool schemas shared by the API
// client and the command line front end.

pub mod config;
pub mod models;
pub mod validation;

pub use config::*;
pub use models::*;
pub use validation::*;
