//! Fixed leave categories, Cuti sub-types and reason option lists.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveCategory {
    DispensasiDinas,
    DispensasiPribadi,
    Ijin,
    Cuti,
}

/// Escape-hatch entry offered at the end of every option list.
pub const OTHER_OPTION: &str = "Lainnya";

const DINAS_REASONS: [&str; 5] = [
    "Rapat Dinas",
    "Bimtek / Pelatihan",
    "Kegiatan KKG",
    "Pendampingan Lomba Siswa",
    "Tugas Dinas Luar",
];

const IJIN_REASONS: [&str; 4] = [
    "Sakit",
    "Keperluan Keluarga",
    "Mengantar Anggota Keluarga Berobat",
    "Keperluan Pribadi Mendesak",
];

impl LeaveCategory {
    pub const ALL: [LeaveCategory; 4] = [
        LeaveCategory::DispensasiDinas,
        LeaveCategory::DispensasiPribadi,
        LeaveCategory::Ijin,
        LeaveCategory::Cuti,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeaveCategory::DispensasiDinas => "Dispensasi Dinas",
            LeaveCategory::DispensasiPribadi => "Dispensasi Pribadi",
            LeaveCategory::Ijin => "Ijin",
            LeaveCategory::Cuti => "Cuti",
        }
    }

    /// CLI code: `dinas`, `pribadi`, `ijin`, `cuti` (or the full label).
    pub fn code(&self) -> &'static str {
        match self {
            LeaveCategory::DispensasiDinas => "dinas",
            LeaveCategory::DispensasiPribadi => "pribadi",
            LeaveCategory::Ijin => "ijin",
            LeaveCategory::Cuti => "cuti",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|cat| cat.code() == c || cat.label().to_lowercase() == c)
    }

    /// Recover the category from a stored `type` value.
    ///
    /// Exact category labels map directly, anything mentioning "cuti" (any
    /// case) is a Cuti sub-type, everything else is treated as Ijin.
    pub fn from_type(type_value: &str) -> Self {
        let t = type_value.trim();
        if let Some(cat) = Self::ALL.into_iter().find(|c| c.label() == t) {
            return cat;
        }
        if t.to_lowercase().contains("cuti") {
            LeaveCategory::Cuti
        } else {
            LeaveCategory::Ijin
        }
    }

    /// Fixed reason list, or `None` when the reason is free text.
    pub fn reason_options(&self) -> Option<&'static [&'static str]> {
        match self {
            LeaveCategory::DispensasiDinas => Some(&DINAS_REASONS[..]),
            LeaveCategory::Ijin => Some(&IJIN_REASONS[..]),
            LeaveCategory::DispensasiPribadi | LeaveCategory::Cuti => None,
        }
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutiType {
    Tahunan,
    Melahirkan,
    Haji,
    Sakit,
    Lainnya,
}

impl CutiType {
    pub const ALL: [CutiType; 5] = [
        CutiType::Tahunan,
        CutiType::Melahirkan,
        CutiType::Haji,
        CutiType::Sakit,
        CutiType::Lainnya,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CutiType::Tahunan => "Cuti Tahunan",
            CutiType::Melahirkan => "Cuti Melahirkan",
            CutiType::Haji => "Cuti Haji",
            CutiType::Sakit => "Cuti Sakit",
            CutiType::Lainnya => "Lainnya / Input Sendiri",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CutiType::Tahunan => "tahunan",
            CutiType::Melahirkan => "melahirkan",
            CutiType::Haji => "haji",
            CutiType::Sakit => "sakit",
            CutiType::Lainnya => "lainnya",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.code() == c || t.label().to_lowercase() == c)
    }

    /// Fixed sub-type whose label equals the stored type, if any.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|t| *t != CutiType::Lainnya)
            .find(|t| t.label() == label.trim())
    }
}
