//! In-memory repositories for service and HTTP tests.
//!
//! Mirrors the relational behavior the handlers rely on: store-assigned ids,
//! relation resolution on fetch by id only, full-replace link updates,
//! cascading deletes, email uniqueness and foreign-key checks.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use crate::db::{DbError, FreelancerRepository, Repository};
use crate::http::{build_router, ServerConfig};
use crate::models::{Freelancer, Order, Qualification};
use crate::service::{FreelancerService, OrderService, QualificationService};
use crate::state::AppState;

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    freelancers: BTreeMap<i64, Freelancer>,
    orders: BTreeMap<i64, Order>,
    qualifications: BTreeMap<i64, Qualification>,
    // (freelancer_id, qualification_id)
    links: BTreeSet<(i64, i64)>,
    broken: bool,
}

impl Tables {
    fn check(&self) -> Result<(), DbError> {
        if self.broken {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn require_qualification(&self, id: i64) -> Result<(), DbError> {
        if self.qualifications.contains_key(&id) {
            Ok(())
        } else {
            Err(DbError::Sqlx(sqlx::Error::Protocol(format!(
                "foreign key violation: qualification {id}"
            ))))
        }
    }

    fn shallow_qualification(&self, id: i64) -> Option<Qualification> {
        self.qualifications.get(&id).cloned()
    }
}

/// Shared tables behind all three in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("memory store poisoned")
    }

    /// Make every subsequent call fail like a lost connection.
    pub fn break_connection(&self) {
        self.lock().broken = true;
    }

    /// Insert a qualification directly, returning its id.
    pub fn seed_qualification(&self, name: &str) -> i64 {
        let mut tables = self.lock();
        let id = tables.next_id();
        tables.qualifications.insert(
            id,
            Qualification {
                id: Some(id),
                name: name.to_string(),
                ..Default::default()
            },
        );
        id
    }

    pub fn freelancer_count(&self) -> usize {
        self.lock().freelancers.len()
    }

    pub fn link_count(&self) -> usize {
        self.lock().links.len()
    }

    pub fn freelancers(&self) -> MemoryFreelancerRepo {
        MemoryFreelancerRepo {
            store: self.clone(),
            hide_existing_emails: false,
        }
    }

    /// A freelancer repository whose email pre-check always answers "absent",
    /// as when a concurrent insert lands between check and insert.
    pub fn racing_freelancers(&self) -> MemoryFreelancerRepo {
        MemoryFreelancerRepo {
            store: self.clone(),
            hide_existing_emails: true,
        }
    }

    pub fn orders(&self) -> MemoryOrderRepo {
        MemoryOrderRepo { store: self.clone() }
    }

    pub fn qualifications(&self) -> MemoryQualificationRepo {
        MemoryQualificationRepo { store: self.clone() }
    }

    /// Application state with every service backed by this store.
    pub fn state(&self) -> AppState {
        AppState::from_services(
            FreelancerService::new(Arc::new(self.freelancers())),
            OrderService::new(Arc::new(self.orders())),
            QualificationService::new(Arc::new(self.qualifications())),
        )
    }
}

/// Drive one request through the full router and collect the response body.
pub async fn send(
    store: &MemoryStore,
    method: &str,
    uri: &str,
    json: Option<serde_json::Value>,
) -> (StatusCode, Bytes) {
    let app = build_router(store.state(), &ServerConfig::default());

    let request = Request::builder().method(method).uri(uri);
    let request = match json {
        Some(value) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

#[derive(Debug, Clone)]
pub struct MemoryFreelancerRepo {
    store: MemoryStore,
    hide_existing_emails: bool,
}

#[async_trait]
impl Repository<Freelancer> for MemoryFreelancerRepo {
    async fn save(&self, mut entity: Freelancer) -> Result<Freelancer, DbError> {
        let mut tables = self.store.lock();
        tables.check()?;

        if tables.freelancers.values().any(|f| f.email == entity.email) {
            return Err(DbError::Conflict {
                resource: "freelancer",
                detail: format!("email {} already exists", entity.email),
            });
        }
        let ids = entity.qualification_ids();
        for id in &ids {
            tables.require_qualification(*id)?;
        }

        let id = tables.next_id();
        entity.id = Some(id);
        tables.freelancers.insert(
            id,
            Freelancer {
                qualifications: Vec::new(),
                ..entity.clone()
            },
        );
        tables.links.extend(ids.into_iter().map(|q| (id, q)));
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Freelancer>, DbError> {
        let tables = self.store.lock();
        tables.check()?;

        Ok(tables.freelancers.get(&id).cloned().map(|mut freelancer| {
            freelancer.qualifications = tables
                .links
                .iter()
                .filter(|(f, _)| *f == id)
                .filter_map(|(_, q)| tables.shallow_qualification(*q))
                .collect();
            freelancer
        }))
    }

    async fn find_all(&self) -> Result<Vec<Freelancer>, DbError> {
        let tables = self.store.lock();
        tables.check()?;
        Ok(tables.freelancers.values().cloned().collect())
    }

    async fn update(&self, entity: &Freelancer) -> Result<(), DbError> {
        let id = entity.id.ok_or(DbError::MissingId { resource: "freelancer" })?;
        let mut tables = self.store.lock();
        tables.check()?;

        if !tables.freelancers.contains_key(&id) {
            return Ok(());
        }
        if tables
            .freelancers
            .iter()
            .any(|(other, f)| *other != id && f.email == entity.email)
        {
            return Err(DbError::Conflict {
                resource: "freelancer",
                detail: format!("email {} already exists", entity.email),
            });
        }
        let ids = entity.qualification_ids();
        for q in &ids {
            tables.require_qualification(*q)?;
        }

        tables.freelancers.insert(
            id,
            Freelancer {
                qualifications: Vec::new(),
                ..entity.clone()
            },
        );
        tables.links.retain(|(f, _)| *f != id);
        tables.links.extend(ids.into_iter().map(|q| (id, q)));
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let mut tables = self.store.lock();
        tables.check()?;

        let removed = tables.freelancers.remove(&id).is_some();
        tables.links.retain(|(f, _)| *f != id);
        Ok(removed)
    }
}

#[async_trait]
impl FreelancerRepository for MemoryFreelancerRepo {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DbError> {
        let tables = self.store.lock();
        tables.check()?;

        Ok(!self.hide_existing_emails && tables.freelancers.values().any(|f| f.email == email))
    }
}

#[derive(Debug, Clone)]
pub struct MemoryOrderRepo {
    store: MemoryStore,
}

#[async_trait]
impl Repository<Order> for MemoryOrderRepo {
    async fn save(&self, mut entity: Order) -> Result<Order, DbError> {
        let mut tables = self.store.lock();
        tables.check()?;
        tables.require_qualification(entity.qualification_id)?;

        let id = tables.next_id();
        entity.id = Some(id);
        tables.orders.insert(
            id,
            Order {
                qualification: None,
                ..entity.clone()
            },
        );
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DbError> {
        let tables = self.store.lock();
        tables.check()?;

        Ok(tables.orders.get(&id).cloned().map(|mut order| {
            order.qualification = tables.shallow_qualification(order.qualification_id);
            order
        }))
    }

    async fn find_all(&self) -> Result<Vec<Order>, DbError> {
        let tables = self.store.lock();
        tables.check()?;
        Ok(tables.orders.values().cloned().collect())
    }

    async fn update(&self, entity: &Order) -> Result<(), DbError> {
        let id = entity.id.ok_or(DbError::MissingId { resource: "order" })?;
        let mut tables = self.store.lock();
        tables.check()?;
        tables.require_qualification(entity.qualification_id)?;

        if let Some(stored) = tables.orders.get_mut(&id) {
            *stored = Order {
                qualification: None,
                ..entity.clone()
            };
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let mut tables = self.store.lock();
        tables.check()?;
        Ok(tables.orders.remove(&id).is_some())
    }
}

#[derive(Debug, Clone)]
pub struct MemoryQualificationRepo {
    store: MemoryStore,
}

#[async_trait]
impl Repository<Qualification> for MemoryQualificationRepo {
    async fn save(&self, mut entity: Qualification) -> Result<Qualification, DbError> {
        let mut tables = self.store.lock();
        tables.check()?;

        let id = tables.next_id();
        entity.id = Some(id);
        tables.qualifications.insert(
            id,
            Qualification {
                id: Some(id),
                name: entity.name.clone(),
                ..Default::default()
            },
        );
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Qualification>, DbError> {
        let tables = self.store.lock();
        tables.check()?;

        Ok(tables.shallow_qualification(id).map(|mut qualification| {
            qualification.orders = tables
                .orders
                .values()
                .filter(|o| o.qualification_id == id)
                .cloned()
                .collect();
            qualification.freelancers = tables
                .links
                .iter()
                .filter(|(_, q)| *q == id)
                .filter_map(|(f, _)| tables.freelancers.get(f).cloned())
                .collect();
            qualification
        }))
    }

    async fn find_all(&self) -> Result<Vec<Qualification>, DbError> {
        let tables = self.store.lock();
        tables.check()?;
        Ok(tables.qualifications.values().cloned().collect())
    }

    async fn update(&self, entity: &Qualification) -> Result<(), DbError> {
        let id = entity.id.ok_or(DbError::MissingId { resource: "qualification" })?;
        let mut tables = self.store.lock();
        tables.check()?;

        if let Some(stored) = tables.qualifications.get_mut(&id) {
            stored.name = entity.name.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let mut tables = self.store.lock();
        tables.check()?;

        let removed = tables.qualifications.remove(&id).is_some();
        tables.orders.retain(|_, o| o.qualification_id != id);
        tables.links.retain(|(_, q)| *q != id);
        Ok(removed)
    }
}
