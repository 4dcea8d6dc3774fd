//! File storage helpers shared by the JSON repositories.

pub mod json_file;
