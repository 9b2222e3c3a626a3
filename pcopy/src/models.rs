// src/models.rs
pub mod copy_plan;
pub mod percentage;
pub mod selector;
pub mod status;

pub use copy_plan::{Candidate, CopyReport, CopyRequest};
pub use percentage::Percentage;
pub use selector::ExtensionSelector;
pub use status::Status;
