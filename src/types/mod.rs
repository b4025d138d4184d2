// src/types/mod.rs
pub mod job_posting;

pub use job_posting::{ExperienceRequirement, JobPosting, SalaryRange};
