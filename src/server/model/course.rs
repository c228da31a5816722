//! Course domain model and parameters.

use entity::sea_orm_active_enums::CourseType as CourseTypeEntity;

use crate::model::course::{CourseDto, CourseTypeDto};

/// Whether a course is part of the main curriculum or a secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseType {
    Main,
    Secondary,
}

impl CourseType {
    pub fn from_entity(entity: CourseTypeEntity) -> Self {
        match entity {
            CourseTypeEntity::Main => Self::Main,
            CourseTypeEntity::Secondary => Self::Secondary,
        }
    }

    pub fn into_entity(self) -> CourseTypeEntity {
        match self {
            Self::Main => CourseTypeEntity::Main,
            Self::Secondary => CourseTypeEntity::Secondary,
        }
    }

    pub fn from_dto(dto: CourseTypeDto) -> Self {
        match dto {
            CourseTypeDto::Main => Self::Main,
            CourseTypeDto::Secondary => Self::Secondary,
        }
    }

    pub fn into_dto(self) -> CourseTypeDto {
        match self {
            Self::Main => CourseTypeDto::Main,
            Self::Secondary => CourseTypeDto::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub description: Option<String>,
    pub course_type: CourseType,
}

impl Course {
    /// Converts an entity model to a course domain model at the repository boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            name: entity.name,
            description: entity.description,
            course_type: CourseType::from_entity(entity.course_type),
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            name: self.name,
            description: self.description,
            course_type: self.course_type.into_dto(),
        }
    }
}

/// Parameters for inserting or replacing a course keyed by name.
#[derive(Debug, Clone)]
pub struct UpsertCourseParams {
    pub name: String,
    pub description: Option<String>,
    pub course_type: CourseType,
}

impl UpsertCourseParams {
    pub fn from_dto(dto: CourseDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            course_type: CourseType::from_dto(dto.course_type),
        }
    }
}
