//! Group domain model and parameters.

use crate::model::group::GroupDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub description: Option<String>,
}

impl Group {
    /// Converts an entity model to a group domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for inserting or replacing a group keyed by name.
#[derive(Debug, Clone)]
pub struct UpsertGroupParams {
    pub name: String,
    pub description: Option<String>,
}

impl UpsertGroupParams {
    pub fn from_dto(dto: GroupDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
