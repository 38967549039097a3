//! Relation repositories
//!
//! Query helpers that load or write the rows related to one foreign key.
//! They never open, commit or roll back a transaction: every method takes a
//! caller-owned `&mut PgConnection`, which lets a primary repository compose
//! several relation loads inside one transaction.

pub mod freelancers;
pub mod orders;
pub mod qualifications;

pub use freelancers::FreelancerRelationRepo;
pub use orders::OrderRelationRepo;
pub use qualifications::QualificationRelationRepo;
