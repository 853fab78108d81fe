//! KegiatanRef entity - budget activity reference codes
//!
//! Table: kegiatan_ref (read-only reference data)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Level of an activity (kegiatan) code
pub const LEVEL_KEGIATAN: i32 = 5;
/// Level of a sub-activity (sub kegiatan) code
pub const LEVEL_SUB_KEGIATAN: i32 = 6;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kegiatan_ref")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Hierarchical code, e.g. 5.02.02.2.03 or 5.02.02.2.03.0005
    #[sea_orm(column_type = "String(Some(50))", unique)]
    pub kode: String,

    #[sea_orm(column_type = "String(Some(255))")]
    pub nama: String,

    pub level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
