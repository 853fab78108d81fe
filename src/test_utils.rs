//! Shared test helpers: an in-memory database and seed rows with sensible
//! defaults.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use uuid::Uuid;

use crate::entity::{destinasi, kegiatan_ref, pegawai, pejabat};
use crate::service::pegawai::{self as pegawai_service, PegawaiInput};

/// Creates an in-memory SQLite database with every table in place
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    crate::db::auto_migrate(&db).await.unwrap();
    db
}

/// Employee input with a valid rank, grade and position
pub fn pegawai_input(nama: &str, nip: &str) -> PegawaiInput {
    PegawaiInput {
        nama: nama.to_string(),
        nip: nip.to_string(),
        pangkat: "Penata".to_string(),
        golongan: "III/c".to_string(),
        jabatan: "Analis Keuangan".to_string(),
    }
}

pub async fn seed_pegawai(db: &DatabaseConnection, nama: &str, nip: &str) -> pegawai::Model {
    pegawai_service::create(db, pegawai_input(nama, nip))
        .await
        .unwrap()
}

/// Official named after their position
pub async fn seed_pejabat(db: &DatabaseConnection, jabatan: &str) -> pejabat::Model {
    let now = Utc::now();
    pejabat::ActiveModel {
        id: Set(Uuid::new_v4()),
        nama: Set(jabatan.to_string()),
        nip: Set(None),
        jabatan: Set(jabatan.to_string()),
        unit: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_destinasi(db: &DatabaseConnection, nama: &str) -> destinasi::Model {
    let now = Utc::now();
    destinasi::ActiveModel {
        id: Set(Uuid::new_v4()),
        nama: Set(nama.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_kegiatan(
    db: &DatabaseConnection,
    kode: &str,
    nama: &str,
    level: i32,
) -> kegiatan_ref::Model {
    kegiatan_ref::ActiveModel {
        id: Set(Uuid::new_v4()),
        kode: Set(kode.to_string()),
        nama: Set(nama.to_string()),
        level: Set(level),
    }
    .insert(db)
    .await
    .unwrap()
}
