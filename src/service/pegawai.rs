//! Employee register

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{delete_error, unique_error, update_error};
use crate::entity::pegawai;
use crate::error::{AppError, AppResult, FieldError, OptionExt};

const NIP_TAKEN: &str = "NIP sudah terdaftar";
const NOT_FOUND: &str = "Pegawai tidak ditemukan";
pub const IN_USE: &str = "Pegawai masih tercantum dalam nota dinas dan tidak dapat dihapus";

/// Fields of an employee as submitted
#[derive(Debug, Clone, Deserialize)]
pub struct PegawaiInput {
    pub nama: String,
    pub nip: String,
    pub pangkat: String,
    pub golongan: String,
    pub jabatan: String,
}

impl PegawaiInput {
    /// Check the input and return it with the grade uppercased
    pub fn validated(self) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.nama.trim().is_empty() {
            errors.push(FieldError::new("nama", "Nama wajib diisi"));
        }
        if !is_valid_nip(&self.nip) {
            errors.push(FieldError::new("nip", "NIP harus 18 digit angka"));
        }
        if self.pangkat.trim().is_empty() {
            errors.push(FieldError::new("pangkat", "Pangkat wajib diisi"));
        }
        if !is_valid_golongan(&self.golongan) {
            errors.push(FieldError::new(
                "golongan",
                "Format golongan tidak valid, contoh: III/d",
            ));
        }
        if self.jabatan.trim().is_empty() {
            errors.push(FieldError::new("jabatan", "Jabatan wajib diisi"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            golongan: self.golongan.to_uppercase(),
            ..self
        })
    }
}

/// Exactly 18 ASCII digits
pub fn is_valid_nip(nip: &str) -> bool {
    nip.len() == 18 && nip.bytes().all(|b| b.is_ascii_digit())
}

/// Roman group I..IV, a slash, and a letter A..E in either case
pub fn is_valid_golongan(golongan: &str) -> bool {
    let Some((group, rank)) = golongan.split_once('/') else {
        return false;
    };
    let group_ok = matches!(group, "I" | "II" | "III" | "IV");
    let mut rank_chars = rank.chars();
    let rank_ok = matches!(
        (rank_chars.next(), rank_chars.next()),
        (Some('A'..='E' | 'a'..='e'), None)
    );
    group_ok && rank_ok
}

/// Select option for the participant picker
#[derive(Debug, Clone, Serialize)]
pub struct PegawaiOption {
    pub id: Uuid,
    pub label: String,
    pub nama: String,
    pub nip: String,
    pub jabatan: String,
}

impl From<pegawai::Model> for PegawaiOption {
    fn from(m: pegawai::Model) -> Self {
        Self {
            id: m.id,
            label: format!("{} - {} ({})", m.nama, m.nip, m.jabatan),
            nama: m.nama,
            nip: m.nip,
            jabatan: m.jabatan,
        }
    }
}

/// All employees, ordered by name
pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<pegawai::Model>> {
    Ok(pegawai::Entity::find()
        .order_by_asc(pegawai::Column::Nama)
        .all(db)
        .await?)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> AppResult<pegawai::Model> {
    pegawai::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_not_found(NOT_FOUND)
}

pub async fn options(db: &DatabaseConnection) -> AppResult<Vec<PegawaiOption>> {
    Ok(list(db).await?.into_iter().map(PegawaiOption::from).collect())
}

/// Register a new employee. A taken NIP is reported on the `nip` field.
pub async fn create(db: &DatabaseConnection, input: PegawaiInput) -> AppResult<pegawai::Model> {
    let input = input.validated().map_err(AppError::Validation)?;
    let now = Utc::now();

    let model = pegawai::ActiveModel {
        id: Set(Uuid::new_v4()),
        nama: Set(input.nama),
        nip: Set(input.nip),
        pangkat: Set(input.pangkat),
        golongan: Set(input.golongan),
        jabatan: Set(input.jabatan),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = model
        .insert(db)
        .await
        .map_err(|e| unique_error(e, "nip", NIP_TAKEN))?;

    tracing::info!("Pegawai created: {} ({})", created.nama, created.id);
    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    input: PegawaiInput,
) -> AppResult<pegawai::Model> {
    let input = input.validated().map_err(AppError::Validation)?;
    get(db, id).await?;

    let model = pegawai::ActiveModel {
        id: Set(id),
        nama: Set(input.nama),
        nip: Set(input.nip),
        pangkat: Set(input.pangkat),
        golongan: Set(input.golongan),
        jabatan: Set(input.jabatan),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };

    model.update(db).await.map_err(|e| match e {
        sea_orm::DbErr::RecordNotUpdated => update_error(e, NOT_FOUND),
        other => unique_error(other, "nip", NIP_TAKEN),
    })
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> AppResult<()> {
    let existing = get(db, id).await?;

    pegawai::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| delete_error(e, IN_USE))?;

    tracing::info!("Pegawai deleted: {} ({})", existing.nama, existing.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{pegawai_input, setup_test_db};

    #[test]
    fn test_nip_and_golongan_rules() {
        assert!(is_valid_nip("198001012006041001"));
        assert!(!is_valid_nip("19800101200604100"));
        assert!(!is_valid_nip("19800101200604100x"));

        assert!(is_valid_golongan("III/d"));
        assert!(is_valid_golongan("IV/E"));
        assert!(is_valid_golongan("II/b"));
        assert!(!is_valid_golongan("ii/b"));
        assert!(!is_valid_golongan("V/a"));
        assert!(!is_valid_golongan("III/f"));
        assert!(!is_valid_golongan("III/ab"));
        assert!(!is_valid_golongan("IIId"));
    }

    #[tokio::test]
    async fn test_create_then_list_once() {
        let db = setup_test_db().await;
        let created = create(&db, pegawai_input("Andi", "198001012006041001"))
            .await
            .unwrap();
        assert_eq!(created.golongan, "III/C");

        let all = list(&db).await.unwrap();
        assert_eq!(all.iter().filter(|p| p.nip == created.nip).count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_nip_is_tagged_and_first_survives() {
        let db = setup_test_db().await;
        let first = create(&db, pegawai_input("Andi", "198001012006041001"))
            .await
            .unwrap();

        let err = create(&db, pegawai_input("Budi", "198001012006041001"))
            .await
            .unwrap_err();
        match err {
            AppError::Duplicate { field, message } => {
                assert_eq!(field, "nip");
                assert_eq!(message, NIP_TAKEN);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let kept = get(&db, first.id).await.unwrap();
        assert_eq!(kept.nama, "Andi");
        assert_eq!(list(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_db() {
        let db = setup_test_db().await;
        let mut input = pegawai_input("", "123");
        input.golongan = "X/z".to_string();

        let err = create(&db, input).await.unwrap_err();
        let AppError::Validation(fields) = err else {
            panic!("expected validation error");
        };
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["nama", "nip", "golongan"]);
        assert!(list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_missing_row() {
        let db = setup_test_db().await;
        let a = create(&db, pegawai_input("Andi", "198001012006041001"))
            .await
            .unwrap();
        let b = create(&db, pegawai_input("Budi", "198001012006041002"))
            .await
            .unwrap();

        let mut input = pegawai_input("Andi Saputra", "198001012006041001");
        input.jabatan = "Kepala Sub Bidang".to_string();
        let updated = update(&db, a.id, input).await.unwrap();
        assert_eq!(updated.nama, "Andi Saputra");
        assert_eq!(updated.jabatan, "Kepala Sub Bidang");

        let err = update(&db, b.id, pegawai_input("Budi", "198001012006041001"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate { .. }));

        let err = update(&db, Uuid::new_v4(), pegawai_input("X", "198001012006041009"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_options_label_and_delete() {
        let db = setup_test_db().await;
        let p = create(&db, pegawai_input("Rina", "199002022015032002"))
            .await
            .unwrap();

        let opts = options(&db).await.unwrap();
        assert_eq!(opts[0].label, "Rina - 199002022015032002 (Analis Keuangan)");

        delete(&db, p.id).await.unwrap();
        assert!(matches!(get(&db, p.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(delete(&db, p.id).await, Err(AppError::NotFound(_))));
    }
}
