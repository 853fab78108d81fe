//! Staged memorandum form
//!
//! `NotaForm` is what the add-nota form submits and what a draft stores. It
//! is loose: everything the user has not filled in yet is empty
//! or absent. Two validation passes exist on top of it:
//!
//! - [`NotaForm::validate`], the form schema applied before a draft is staged
//! - [`NewNota::from_form`], the persistence schema applied before the
//!   permanent record is written

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::number;
use crate::error::FieldError;

/// Default carbon-copy line
pub const DEFAULT_TEMBUSAN: &str = "Bendahara Pengeluaran";
/// Default notice classification
pub const DEFAULT_SIFAT: &str = "Segera";
/// Default attachment note
pub const DEFAULT_LAMPIRAN: &str = "1 (satu) Berkas";
/// Default subject
pub const DEFAULT_HAL: &str = "Permohonan Perjalanan Dinas";

/// Completion (percent) from which a draft may be staged
pub const PREVIEW_THRESHOLD: u8 = 75;

/// Number of items counted by the completion gauge: six scalar fields plus
/// the destination and participant lists
const COMPLETION_ITEMS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotaForm {
    /// 3-digit sequence of the document number
    #[serde(default)]
    pub nomor: String,
    /// Date as YYYY-MM-DD
    #[serde(default)]
    pub tanggal: String,
    #[serde(default)]
    pub yth_pejabat_id: Option<Uuid>,
    #[serde(default)]
    pub dari_pejabat_id: Option<Uuid>,
    #[serde(default)]
    pub penandatangan_pejabat_id: Option<Uuid>,
    #[serde(default = "default_tembusan")]
    pub tembusan: String,
    #[serde(default = "default_sifat")]
    pub sifat: String,
    #[serde(default = "default_lampiran")]
    pub lampiran: String,
    #[serde(default = "default_hal")]
    pub hal: String,
    #[serde(default)]
    pub maksud: Option<String>,
    #[serde(default)]
    pub tujuan_ids: Vec<Uuid>,
    #[serde(default)]
    pub peserta_pegawai_ids: Vec<Uuid>,
    #[serde(default)]
    pub kegiatan_kode: Option<String>,
    #[serde(default)]
    pub sub_kegiatan_kode: Option<String>,
    /// Signatory follows the sender
    #[serde(default = "default_true")]
    pub same_signer_as_dari: bool,
}

fn default_tembusan() -> String {
    DEFAULT_TEMBUSAN.to_string()
}

fn default_sifat() -> String {
    DEFAULT_SIFAT.to_string()
}

fn default_lampiran() -> String {
    DEFAULT_LAMPIRAN.to_string()
}

fn default_hal() -> String {
    DEFAULT_HAL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for NotaForm {
    fn default() -> Self {
        Self {
            nomor: String::new(),
            tanggal: String::new(),
            yth_pejabat_id: None,
            dari_pejabat_id: None,
            penandatangan_pejabat_id: None,
            tembusan: default_tembusan(),
            sifat: default_sifat(),
            lampiran: default_lampiran(),
            hal: default_hal(),
            maksud: None,
            tujuan_ids: Vec::new(),
            peserta_pegawai_ids: Vec::new(),
            kegiatan_kode: None,
            sub_kegiatan_kode: None,
            same_signer_as_dari: true,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl NotaForm {
    /// Bring a submission into its staged shape.
    ///
    /// Pads the sequence to 3 digits, drops empty optional strings and, when
    /// the signatory follows the sender, copies the sender id over.
    pub fn normalized(mut self) -> Self {
        if !self.nomor.trim().is_empty() {
            self.nomor = number::pad_sequence(&self.nomor);
        }
        self.maksud = non_empty(self.maksud);
        self.kegiatan_kode = non_empty(self.kegiatan_kode);
        self.sub_kegiatan_kode = non_empty(self.sub_kegiatan_kode);
        if self.same_signer_as_dari {
            self.penandatangan_pejabat_id = self.dari_pejabat_id;
        }
        self
    }

    /// Completion gauge of the form, in whole percent
    pub fn completion_percentage(&self) -> u8 {
        let filled_scalars = [
            &self.nomor,
            &self.tanggal,
            &self.tembusan,
            &self.sifat,
            &self.lampiran,
            &self.hal,
        ]
        .iter()
        .filter(|value| !value.is_empty())
        .count();

        let filled = filled_scalars
            + usize::from(!self.tujuan_ids.is_empty())
            + usize::from(!self.peserta_pegawai_ids.is_empty());

        ((filled as f64 / COMPLETION_ITEMS as f64) * 100.0).round() as u8
    }

    /// Whether the form is complete enough to be staged as a draft
    pub fn ready_for_preview(&self) -> bool {
        self.completion_percentage() >= PREVIEW_THRESHOLD
    }

    /// Form schema applied before staging a draft
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.nomor.is_empty() {
            errors.push(FieldError::new("nomor", "Nomor wajib diisi"));
        } else if !number::is_valid_sequence(&self.nomor) {
            errors.push(FieldError::new("nomor", "Nomor harus 3 digit angka"));
        }

        if self.tanggal.is_empty() {
            errors.push(FieldError::new("tanggal", "Tanggal wajib diisi"));
        }

        check_text(&mut errors, "tembusan", &self.tembusan, 100, "Tembusan");
        check_text(&mut errors, "sifat", &self.sifat, 50, "Sifat");
        check_text(&mut errors, "lampiran", &self.lampiran, 100, "Lampiran");
        check_text(&mut errors, "hal", &self.hal, 200, "Hal");

        if self.tujuan_ids.is_empty() {
            errors.push(FieldError::new("tujuanIds", "Minimal pilih 1 tujuan"));
        }
        if self.peserta_pegawai_ids.is_empty() {
            errors.push(FieldError::new("pesertaPegawaiIds", "Minimal pilih 1 peserta"));
        }

        if let Some(maksud) = &self.maksud {
            if maksud.chars().count() > 1000 {
                errors.push(FieldError::new("maksud", "Maksud terlalu panjang"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_text(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize, label: &str) {
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{} wajib diisi", label)));
    } else if value.chars().count() > max {
        errors.push(FieldError::new(field, format!("{} terlalu panjang", label)));
    }
}

/// Input of the permanent memorandum insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNota {
    /// Full document number
    pub nomor: String,
    pub tanggal: NaiveDate,
    pub yth_pejabat_id: Option<Uuid>,
    pub dari_pejabat_id: Option<Uuid>,
    pub penandatangan_pejabat_id: Option<Uuid>,
    pub tembusan: String,
    pub sifat: String,
    pub lampiran: String,
    pub hal: String,
    pub maksud: Option<String>,
    pub tujuan_ids: Vec<Uuid>,
    pub peserta_pegawai_ids: Vec<Uuid>,
    pub kegiatan_kode: Option<String>,
    pub sub_kegiatan_kode: Option<String>,
}

impl NewNota {
    /// Build and validate the permanent input from a staged form.
    ///
    /// Applies the document number template and lets the signatory default
    /// to the sender. Lists are taken as staged, in order.
    pub fn from_form(form: &NotaForm) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        if form.nomor.trim().is_empty() {
            errors.push(FieldError::new("nomor", "Nomor wajib diisi"));
        }

        let tanggal = match parse_iso_date(&form.tanggal) {
            Some(date) => Some(date),
            None => {
                errors.push(FieldError::new("tanggal", "Format tanggal YYYY-MM-DD"));
                None
            }
        };

        for (field, value) in [
            ("tembusan", &form.tembusan),
            ("sifat", &form.sifat),
            ("lampiran", &form.lampiran),
            ("hal", &form.hal),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, format!("{} wajib diisi", field)));
            }
        }

        let Some(tanggal) = tanggal.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };

        Ok(Self {
            nomor: number::full_number(&form.nomor),
            tanggal,
            yth_pejabat_id: form.yth_pejabat_id,
            dari_pejabat_id: form.dari_pejabat_id,
            penandatangan_pejabat_id: form.penandatangan_pejabat_id.or(form.dari_pejabat_id),
            tembusan: form.tembusan.clone(),
            sifat: form.sifat.clone(),
            lampiran: form.lampiran.clone(),
            hal: form.hal.clone(),
            maksud: non_empty(form.maksud.clone()),
            tujuan_ids: form.tujuan_ids.clone(),
            peserta_pegawai_ids: form.peserta_pegawai_ids.clone(),
            kegiatan_kode: non_empty(form.kegiatan_kode.clone()),
            sub_kegiatan_kode: non_empty(form.sub_kegiatan_kode.clone()),
        })
    }
}

/// Parse a strict YYYY-MM-DD date
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> NotaForm {
        NotaForm {
            nomor: "112".to_string(),
            tanggal: "2025-03-05".to_string(),
            tujuan_ids: vec![Uuid::new_v4()],
            peserta_pegawai_ids: vec![Uuid::new_v4()],
            ..NotaForm::default()
        }
    }

    #[test]
    fn test_completion_with_one_list_missing() {
        let mut form = complete_form();
        form.peserta_pegawai_ids.clear();
        assert_eq!(form.completion_percentage(), 88);
        assert!(form.ready_for_preview());
    }

    #[test]
    fn test_completion_rounding_and_gate() {
        let form = NotaForm {
            tembusan: String::new(),
            sifat: String::new(),
            lampiran: String::new(),
            hal: String::new(),
            ..NotaForm::default()
        };
        assert_eq!(form.completion_percentage(), 0);

        // defaults fill four scalar fields
        let form = NotaForm::default();
        assert_eq!(form.completion_percentage(), 50);
        assert!(!form.ready_for_preview());

        let form = NotaForm {
            nomor: "1".to_string(),
            ..NotaForm::default()
        };
        assert_eq!(form.completion_percentage(), 63);

        let form = NotaForm {
            nomor: "001".to_string(),
            tanggal: "2025-01-01".to_string(),
            ..NotaForm::default()
        };
        assert_eq!(form.completion_percentage(), 75);
        assert!(form.ready_for_preview());

        assert_eq!(complete_form().completion_percentage(), 100);
    }

    #[test]
    fn test_normalized_pads_and_syncs_signer() {
        let dari = Uuid::new_v4();
        let form = NotaForm {
            nomor: "7".to_string(),
            dari_pejabat_id: Some(dari),
            penandatangan_pejabat_id: Some(Uuid::new_v4()),
            maksud: Some("  ".to_string()),
            kegiatan_kode: Some(String::new()),
            ..NotaForm::default()
        }
        .normalized();

        assert_eq!(form.nomor, "007");
        assert_eq!(form.penandatangan_pejabat_id, Some(dari));
        assert_eq!(form.maksud, None);
        assert_eq!(form.kegiatan_kode, None);
    }

    #[test]
    fn test_normalized_keeps_override() {
        let signer = Uuid::new_v4();
        let form = NotaForm {
            dari_pejabat_id: Some(Uuid::new_v4()),
            penandatangan_pejabat_id: Some(signer),
            same_signer_as_dari: false,
            ..NotaForm::default()
        }
        .normalized();
        assert_eq!(form.penandatangan_pejabat_id, Some(signer));
    }

    #[test]
    fn test_validate_reports_each_field() {
        let form = NotaForm {
            nomor: "12".to_string(),
            hal: "x".repeat(201),
            ..NotaForm::default()
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["nomor", "tanggal", "hal", "tujuanIds", "pesertaPegawaiIds"]
        );
        assert!(complete_form().validate().is_ok());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let form: NotaForm =
            serde_json::from_str(r#"{"nomor":"112","tanggal":"2025-03-05"}"#).unwrap();
        assert_eq!(form.tembusan, DEFAULT_TEMBUSAN);
        assert_eq!(form.hal, DEFAULT_HAL);
        assert!(form.same_signer_as_dari);
        assert!(form.tujuan_ids.is_empty());
    }

    #[test]
    fn test_new_nota_applies_template_and_signer_default() {
        let dari = Uuid::new_v4();
        let form = NotaForm {
            dari_pejabat_id: Some(dari),
            maksud: Some(String::new()),
            ..complete_form()
        };
        let input = NewNota::from_form(&form).unwrap();
        assert_eq!(input.nomor, "090/ND/112/BPKAD");
        assert_eq!(input.penandatangan_pejabat_id, Some(dari));
        assert_eq!(input.tanggal, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(input.maksud, None);
    }

    #[test]
    fn test_new_nota_rejects_bad_date() {
        let form = NotaForm {
            tanggal: "05/03/2025".to_string(),
            ..complete_form()
        };
        let errors = NewNota::from_form(&form).unwrap_err();
        assert_eq!(errors[0].field, "tanggal");

        let form = NotaForm {
            tanggal: "2025-02-30".to_string(),
            ..complete_form()
        };
        assert!(NewNota::from_form(&form).is_err());
    }

    #[test]
    fn test_new_nota_allows_empty_lists() {
        let form = NotaForm {
            tujuan_ids: vec![],
            peserta_pegawai_ids: vec![],
            ..complete_form()
        };
        assert!(NewNota::from_form(&form).is_ok());
    }
}
