//! Service layer
//!
//! Pure orchestration between the HTTP layer and the repositories: DTO <->
//! entity mapping, input checks, and the one business rule (freelancer email
//! uniqueness). No transaction handling happens here, and repository errors
//! pass through untranslated.

pub mod dto;
pub mod freelancers;
pub mod mapper;
pub mod orders;
pub mod qualifications;

pub use dto::{
    FreelancerDto, FreelancerSimpleDto, OrderDto, OrderSimpleDto, QualificationDto,
    QualificationSimpleDto,
};
pub use freelancers::FreelancerService;
pub use orders::OrderService;
pub use qualifications::QualificationService;
