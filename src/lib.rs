pub mod catalog;
pub mod error;
pub mod header;
pub mod signals;
pub mod template;
pub mod utils;
