//! NotaDinas entity - permanent memorandum records
//!
//! Table: nota_dinas

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Memorandum lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
pub enum NotaStatus {
    /// Saved, not printed yet
    #[sea_orm(string_value = "DRAFT")]
    #[serde(rename = "DRAFT")]
    Draft,
    /// Printed
    #[sea_orm(string_value = "CETAK")]
    #[serde(rename = "CETAK")]
    Cetak,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nota_dinas")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Full document number, e.g. 090/ND/112/BPKAD (unique)
    #[sea_orm(column_type = "String(Some(64))", unique)]
    pub nomor: String,

    pub tanggal: Date,

    /// Recipient (Yth.)
    #[sea_orm(nullable)]
    pub yth_pejabat_id: Option<Uuid>,

    /// Sender (Dari)
    #[sea_orm(nullable)]
    pub dari_pejabat_id: Option<Uuid>,

    #[sea_orm(column_type = "String(Some(255))")]
    pub tembusan: String,

    /// Notice classification, e.g. "Segera"
    #[sea_orm(column_type = "String(Some(50))")]
    pub sifat: String,

    #[sea_orm(column_type = "String(Some(100))")]
    pub lampiran: String,

    /// Subject line
    #[sea_orm(column_type = "String(Some(255))")]
    pub hal: String,

    /// Purpose of the travel
    #[sea_orm(column_type = "Text", nullable)]
    pub maksud: Option<String>,

    /// Activity code (level 5)
    #[sea_orm(column_type = "String(Some(50))", nullable)]
    pub kegiatan_kode: Option<String>,

    /// Sub-activity code (level 6)
    #[sea_orm(column_type = "String(Some(50))", nullable)]
    pub sub_kegiatan_kode: Option<String>,

    /// Signatory, usually the sender
    #[sea_orm(nullable)]
    pub penandatangan_pejabat_id: Option<Uuid>,

    pub status: NotaStatus,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pejabat::Entity",
        from = "Column::YthPejabatId",
        to = "super::pejabat::Column::Id",
        fk_name = "fk-nota_dinas-yth_pejabat"
    )]
    YthPejabat,
    #[sea_orm(
        belongs_to = "super::pejabat::Entity",
        from = "Column::DariPejabatId",
        to = "super::pejabat::Column::Id",
        fk_name = "fk-nota_dinas-dari_pejabat"
    )]
    DariPejabat,
    #[sea_orm(
        belongs_to = "super::pejabat::Entity",
        from = "Column::PenandatanganPejabatId",
        to = "super::pejabat::Column::Id",
        fk_name = "fk-nota_dinas-penandatangan_pejabat"
    )]
    PenandatanganPejabat,
}

impl ActiveModelBehavior for ActiveModel {}
