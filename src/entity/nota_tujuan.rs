//! NotaTujuan entity - ordered destinations of a memorandum
//!
//! Table: nota_tujuan

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nota_tujuan")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub nota_id: Uuid,

    pub destinasi_id: Uuid,

    /// 1-based position within the memorandum
    pub no_urut: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::nota_dinas::Entity",
        from = "Column::NotaId",
        to = "super::nota_dinas::Column::Id",
        on_delete = "Cascade",
        fk_name = "fk-nota_tujuan-nota"
    )]
    NotaDinas,
    #[sea_orm(
        belongs_to = "super::destinasi::Entity",
        from = "Column::DestinasiId",
        to = "super::destinasi::Column::Id",
        fk_name = "fk-nota_tujuan-destinasi"
    )]
    Destinasi,
}

impl Related<super::nota_dinas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotaDinas.def()
    }
}

impl Related<super::destinasi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destinasi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
