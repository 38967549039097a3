//! Domain entities
//!
//! In-memory representations of persisted rows. Entities are built per
//! request and never cached; relation collections are filled only when an
//! entity is loaded by id.

pub mod freelancer;
pub mod order;
pub mod qualification;

pub use freelancer::Freelancer;
pub use order::Order;
pub use qualification::Qualification;
