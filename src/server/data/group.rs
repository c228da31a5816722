//! Group data repository for database operations.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
};

use crate::server::model::group::{Group, UpsertGroupParams};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a group or replaces the description of the existing one with the same name.
    pub async fn upsert(&self, params: UpsertGroupParams) -> Result<(), DbErr> {
        entity::prelude::Group::insert(entity::group::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
        })
        .on_conflict(
            OnConflict::column(entity::group::Column::Name)
                .update_column(entity::group::Column::Description)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find_by_id(name.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a group by name.
    ///
    /// Fails with a foreign key violation while any student or teacher references it.
    pub async fn delete(&self, name: &str) -> Result<(), DbErr> {
        entity::prelude::Group::delete_by_id(name.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let groups = entity::prelude::Group::find().all(self.db).await?;

        Ok(groups.into_iter().map(Group::from_entity).collect())
    }
}
