//! Pejabat entity - officials acting as recipient, sender or signatory
//!
//! Table: pejabat

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pejabat")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(Some(150))")]
    pub nama: String,

    /// Free-form ID string, officials may carry spaced NIP formats
    #[sea_orm(column_type = "String(Some(21))", nullable)]
    pub nip: Option<String>,

    #[sea_orm(column_type = "String(Some(255))")]
    pub jabatan: String,

    #[sea_orm(column_type = "String(Some(255))", nullable)]
    pub unit: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// The three memorandum roles point here; they are declared on nota_dinas

impl ActiveModelBehavior for ActiveModel {}
