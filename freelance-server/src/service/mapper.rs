//! Hand-written DTO <-> entity mapping, one function per direction and pair.

use super::dto::{
    FreelancerDto, FreelancerSimpleDto, OrderDto, OrderSimpleDto, QualificationDto,
    QualificationSimpleDto,
};
use crate::models::{Freelancer, Order, Qualification};

pub fn freelancer_to_entity(dto: FreelancerDto) -> Freelancer {
    Freelancer {
        id: dto.id,
        name: dto.freelancer_name,
        second_name: dto.freelancer_second_name,
        email: dto.freelancer_email,
        qualifications: dto
            .qualifications
            .into_iter()
            .map(qualification_simple_to_entity)
            .collect(),
    }
}

pub fn freelancer_to_dto(entity: Freelancer) -> FreelancerDto {
    FreelancerDto {
        id: entity.id,
        freelancer_name: entity.name,
        freelancer_second_name: entity.second_name,
        freelancer_email: entity.email,
        qualifications: entity
            .qualifications
            .into_iter()
            .map(qualification_to_simple_dto)
            .collect(),
    }
}

pub fn freelancer_to_simple_dto(entity: Freelancer) -> FreelancerSimpleDto {
    FreelancerSimpleDto {
        id: entity.id,
        freelancer_name: entity.name,
        freelancer_second_name: entity.second_name,
        freelancer_email: entity.email,
    }
}

/// Map an order DTO, or `None` when it carries no qualification id.
pub fn order_to_entity(dto: OrderDto) -> Option<Order> {
    let qualification = dto.qualification.map(qualification_simple_to_entity)?;
    let qualification_id = qualification.id?;

    Some(Order {
        id: dto.id,
        title: dto.order_title,
        description: dto.order_description,
        price: dto.order_price,
        term: dto.order_term,
        qualification_id,
        qualification: Some(qualification),
    })
}

/// The qualification reference falls back to the bare id when unresolved.
pub fn order_to_dto(entity: Order) -> OrderDto {
    let qualification = entity
        .qualification
        .map(qualification_to_simple_dto)
        .unwrap_or(QualificationSimpleDto {
            id: Some(entity.qualification_id),
            qualification_name: String::new(),
        });

    OrderDto {
        id: entity.id,
        order_title: entity.title,
        order_description: entity.description,
        order_price: entity.price,
        order_term: entity.term,
        qualification: Some(qualification),
    }
}

pub fn order_to_simple_dto(entity: Order) -> OrderSimpleDto {
    OrderSimpleDto {
        id: entity.id,
        order_title: entity.title,
        order_description: entity.description,
        order_price: entity.price,
        order_term: entity.term,
    }
}

/// Orders and freelancers are owned by the other side of each relation,
/// so only the scalar fields are carried over.
pub fn qualification_to_entity(dto: QualificationDto) -> Qualification {
    Qualification {
        id: dto.id,
        name: dto.qualification_name,
        ..Default::default()
    }
}

pub fn qualification_to_dto(entity: Qualification) -> QualificationDto {
    QualificationDto {
        id: entity.id,
        qualification_name: entity.name,
        orders: entity.orders.into_iter().map(order_to_simple_dto).collect(),
        freelancers: entity
            .freelancers
            .into_iter()
            .map(freelancer_to_simple_dto)
            .collect(),
    }
}

pub fn qualification_to_simple_dto(entity: Qualification) -> QualificationSimpleDto {
    QualificationSimpleDto {
        id: entity.id,
        qualification_name: entity.name,
    }
}

pub fn qualification_simple_to_entity(dto: QualificationSimpleDto) -> Qualification {
    Qualification {
        id: dto.id,
        name: dto.qualification_name,
        ..Default::default()
    }
}
