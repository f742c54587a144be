pub mod error;
pub mod footprint;
pub mod logger;
pub mod monitor;
pub mod validation;
