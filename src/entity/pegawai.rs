//! Pegawai entity - employee register
//!
//! Table: pegawai

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pegawai")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Full name
    #[sea_orm(column_type = "Text")]
    pub nama: String,

    /// National employee ID, exactly 18 digits (unique)
    #[sea_orm(column_type = "String(Some(18))", unique)]
    pub nip: String,

    /// Rank, e.g. "Penata Tk. I"
    #[sea_orm(column_type = "String(Some(20))")]
    pub pangkat: String,

    /// Grade, e.g. "III/D"
    #[sea_orm(column_type = "String(Some(5))")]
    pub golongan: String,

    /// Position title
    #[sea_orm(column_type = "String(Some(255))")]
    pub jabatan: String,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
