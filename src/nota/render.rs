//! Printable memorandum layout
//!
//! [`render`] turns a resolved draft into the content of the printed Nota
//! Dinas. It never fails: any reference that did not resolve is replaced by
//! placeholder text so the page is never blank.

use chrono::Datelike;
use serde::Serialize;

use super::form::parse_iso_date;
use super::number;
use super::resolved::{ResolvedNota, ResolvedPejabat};

/// Letterhead lines
pub const KOP_PEMERINTAH: &str = "PEMERINTAH KOTA DUMAI";
pub const KOP_INSTANSI: &str = "BADAN PENGELOLAAN KEUANGAN DAN ASET DAERAH";
pub const KOP_ALAMAT: &str = "Jalan Tuanku Tambusai, Bagan Besar, Bukit Kapur, Dumai, Riau 28882";
pub const KOP_LAMAN: &str = "Laman www.bpkad.dumaikota.go.id";

pub const PLACEHOLDER_YTH_NAMA: &str = "KEPALA BADAN PENGELOLAAN KEUANGAN DAN ASET DAERAH";
pub const PLACEHOLDER_YTH_JABATAN: &str = "Kepala Badan";
pub const PLACEHOLDER_PEJABAT: &str = "[PEJABAT BELUM DIPILIH]";
pub const PLACEHOLDER_JABATAN: &str = "[JABATAN BELUM DIPILIH]";
pub const PLACEHOLDER_TUJUAN: &str = "[TUJUAN BELUM DIPILIH]";
pub const PLACEHOLDER_PEGAWAI: &str = "[PEGAWAI BELUM DIPILIH]";
pub const PLACEHOLDER_NIP: &str = "000000000000000000";

pub const DEFAULT_MAKSUD: &str = "Dalam rangka pengambilan Dokumen Hasil Evaluasi Gubernur tentang \
Ranperda Kota Dumai tentang Pertanggungjawaban Pelaksanaan APBD dan Ranperkada tentang Penjabaran \
Pertanggungjawaban APBD Kota Dumai T.A 2024.";
pub const DEFAULT_KEGIATAN: &str =
    "Koordinasi dan Pelaksanaan Akuntansi dan Pelaporan Keuangan Daerah";
pub const DEFAULT_SUB_KEGIATAN: &str = "Koordinasi dan Penyusunan Rancangan Peraturan Daerah \
tentang Pertanggungjawaban Pelaksanaan APBD Kabupaten/Kota";

const SALAM: &str = "Dengan hormat,";
const PENUTUP: &str =
    "Demikian disampaikan, pertimbangan selanjutnya diserahkan kepada Bapak, terima kasih.";

const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kop {
    pub pemerintah: &'static str,
    pub instansi: &'static str,
    pub alamat: &'static str,
    pub laman: &'static str,
}

/// An official as printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PejabatLine {
    pub nama: String,
    pub jabatan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
}

impl From<&ResolvedPejabat> for PejabatLine {
    fn from(p: &ResolvedPejabat) -> Self {
        Self {
            nama: p.nama.clone(),
            jabatan: p.jabatan.clone(),
            nip: p.nip.clone().filter(|n| !n.is_empty()),
        }
    }
}

/// One row of the participant table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PesertaRow {
    pub no: usize,
    pub nama: String,
    pub nip: String,
    pub pangkat: String,
    pub golongan: String,
    pub jabatan: String,
}

/// One line of the budget block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiayaLine {
    pub kode: String,
    pub nama: String,
}

/// Content of a printed memorandum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotaDocument {
    pub kop: Kop,
    pub yth: PejabatLine,
    pub dari: PejabatLine,
    pub tembusan: String,
    pub tanggal: String,
    pub nomor: String,
    pub sifat: String,
    pub lampiran: String,
    pub hal: String,
    pub salam: String,
    pub pembuka: String,
    pub maksud: String,
    pub tujuan: String,
    pub peserta: Vec<PesertaRow>,
    pub kegiatan: BiayaLine,
    pub sub_kegiatan: BiayaLine,
    pub penutup: String,
    pub penandatangan: PejabatLine,
}

/// Format a YYYY-MM-DD date as "5 Januari 2025".
///
/// Unparseable input is returned as given.
pub fn format_tanggal_lengkap(tanggal: &str) -> String {
    match parse_iso_date(tanggal) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            BULAN[date.month0() as usize],
            date.year()
        ),
        None => tanggal.to_string(),
    }
}

/// Lay out a resolved draft as a printable memorandum
pub fn render(data: &ResolvedNota) -> NotaDocument {
    let form = &data.form;

    let yth = data
        .yth_pejabat
        .as_ref()
        .map(PejabatLine::from)
        .unwrap_or_else(|| PejabatLine {
            nama: PLACEHOLDER_YTH_NAMA.to_string(),
            jabatan: PLACEHOLDER_YTH_JABATAN.to_string(),
            nip: None,
        });

    let dari = data
        .dari_pejabat
        .as_ref()
        .map(PejabatLine::from)
        .unwrap_or_else(|| PejabatLine {
            nama: PLACEHOLDER_PEJABAT.to_string(),
            jabatan: PLACEHOLDER_JABATAN.to_string(),
            nip: None,
        });

    let penandatangan = data
        .penandatangan_pejabat
        .as_ref()
        .map(PejabatLine::from)
        .unwrap_or_else(|| dari.clone());

    let tujuan_names: Vec<&str> = if data.tujuan_list.is_empty() {
        vec![PLACEHOLDER_TUJUAN]
    } else {
        data.tujuan_list.iter().map(|t| t.nama.as_str()).collect()
    };

    let peserta: Vec<PesertaRow> = if data.peserta_list.is_empty() {
        vec![PesertaRow {
            no: 1,
            nama: PLACEHOLDER_PEGAWAI.to_string(),
            nip: PLACEHOLDER_NIP.to_string(),
            pangkat: "-".to_string(),
            golongan: "-".to_string(),
            jabatan: PLACEHOLDER_JABATAN.to_string(),
        }]
    } else {
        data.peserta_list
            .iter()
            .enumerate()
            .map(|(i, p)| PesertaRow {
                no: i + 1,
                nama: p.nama.clone(),
                nip: p.nip.clone(),
                pangkat: p.pangkat.clone(),
                golongan: p.golongan.clone(),
                jabatan: p.jabatan.clone(),
            })
            .collect()
    };

    let pembuka = format!(
        "Bersamaan dengan ini disampaikan kepada Bapak Usulan {} ke {} dengan catatan sebagai berikut:",
        form.hal, tujuan_names[0]
    );

    let kegiatan = BiayaLine {
        kode: kode_or_dash(form.kegiatan_kode.as_deref()),
        nama: data
            .kegiatan_data
            .as_ref()
            .map(|k| k.nama.clone())
            .unwrap_or_else(|| DEFAULT_KEGIATAN.to_string()),
    };

    let sub_kegiatan = BiayaLine {
        kode: kode_or_dash(form.sub_kegiatan_kode.as_deref()),
        nama: data
            .sub_kegiatan_data
            .as_ref()
            .map(|k| k.nama.clone())
            .unwrap_or_else(|| DEFAULT_SUB_KEGIATAN.to_string()),
    };

    NotaDocument {
        kop: Kop {
            pemerintah: KOP_PEMERINTAH,
            instansi: KOP_INSTANSI,
            alamat: KOP_ALAMAT,
            laman: KOP_LAMAN,
        },
        yth,
        dari,
        tembusan: form.tembusan.clone(),
        tanggal: format_tanggal_lengkap(&form.tanggal),
        nomor: number::full_number(&form.nomor),
        sifat: form.sifat.clone(),
        lampiran: form.lampiran.clone(),
        hal: form.hal.clone(),
        salam: SALAM.to_string(),
        pembuka,
        maksud: form
            .maksud
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MAKSUD.to_string()),
        tujuan: tujuan_names.join(", "),
        peserta,
        kegiatan,
        sub_kegiatan,
        penutup: PENUTUP.to_string(),
        penandatangan,
    }
}

fn kode_or_dash(kode: Option<&str>) -> String {
    match kode {
        Some(k) if !k.is_empty() => k.to_string(),
        _ => "-".to_string(),
    }
}
