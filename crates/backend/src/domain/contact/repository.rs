use chrono::Utc;
use contracts::shared::contact::ContactRequest;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Store a submission; fields are trimmed. Returns the new id.
pub async fn insert(conn: &DatabaseConnection, request: &ContactRequest) -> anyhow::Result<String> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: Set(id.clone()),
        name: Set(request.name.trim().to_string()),
        email: Set(request.email.trim().to_string()),
        phone: Set(request.phone.trim().to_string()),
        message: Set(request.message.trim().to_string()),
        created_at: Set(now),
    };
    active.insert(conn).await?;
    Ok(id)
}

/// All stored messages, newest first
#[cfg(test)]
pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Model>> {
    use sea_orm::QueryOrder;

    let messages = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?;
    Ok(messages)
}
