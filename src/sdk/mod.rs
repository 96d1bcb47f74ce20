pub mod collate;
pub mod config;
pub mod convert;
pub mod error;
pub mod hierarchy;
pub mod records;
pub mod text;
pub mod util;
