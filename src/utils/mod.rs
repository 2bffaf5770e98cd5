pub mod dates;
pub mod files;
