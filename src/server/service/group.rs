use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::group::GroupRepository,
    error::{
        constraint::{classify_reference_delete, ReferenceKind},
        AppError,
    },
    model::group::{Group, UpsertGroupParams},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn upsert(&self, params: UpsertGroupParams) -> Result<(), AppError> {
        Ok(GroupRepository::new(self.db).upsert(params).await?)
    }

    /// Deletes a group that has no members.
    /// Returns false if no group has this name.
    pub async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = GroupRepository::new(&txn);

        if !repo.exists(name).await? {
            return Ok(false);
        }

        repo.delete(name)
            .await
            .map_err(|e| classify_reference_delete(e, ReferenceKind::Group, name))?;
        txn.commit().await?;

        Ok(true)
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }
}
