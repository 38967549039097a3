//! Application state shared across handlers

use std::sync::Arc;

use crate::db::{Database, FreelancerRepo, OrderRepo, QualificationRepo};
use crate::service::{FreelancerService, OrderService, QualificationService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    freelancers: FreelancerService,
    orders: OrderService,
    qualifications: QualificationService,
}

impl AppState {
    /// Wire the PostgreSQL repositories over one pool.
    pub fn new(db: Database) -> Self {
        Self::from_services(
            FreelancerService::new(Arc::new(FreelancerRepo::new(db.clone()))),
            OrderService::new(Arc::new(OrderRepo::new(db.clone()))),
            QualificationService::new(Arc::new(QualificationRepo::new(db))),
        )
    }

    pub fn from_services(
        freelancers: FreelancerService,
        orders: OrderService,
        qualifications: QualificationService,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                freelancers,
                orders,
                qualifications,
            }),
        }
    }

    pub fn freelancers(&self) -> &FreelancerService {
        &self.inner.freelancers
    }

    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    pub fn qualifications(&self) -> &QualificationService {
        &self.inner.qualifications
    }
}
