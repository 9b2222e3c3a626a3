// src/core.rs
pub mod copier;
pub mod fs;
pub mod version_sort;
