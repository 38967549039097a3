//! Route handlers organized by resource

pub mod freelancers;
pub mod health;
pub mod orders;
pub mod qualifications;
