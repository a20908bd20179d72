// ==========================================
// ADA Management - spreadsheet column resolver
// ==========================================
// Typed mapping from the enumerated spreadsheet columns to their
// zero-based positions in the header row, built once per import.
// The header labels are the legacy institutional export contract
// and must stay verbatim.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

// ==========================================
// SheetColumn
// ==========================================
/// One variant per column of the institutional export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetColumn {
    BasePeriod,
    CourseCode,
    CourseName,
    CourseCoordinator,
    Registration,
    StudentName,
    EntryYear,
    EntryPeriod,
    QuotaType,
    Status,
    StatusDetail,
    IntegralizedHours,
    TotalHours,
    PendingObligatory,
    SemestersNoHours,
    Locks,
}

impl SheetColumn {
    /// The verbatim header label of the legacy export.
    pub const fn label(self) -> &'static str {
        match self {
            SheetColumn::BasePeriod => "PERIODO_BASE_ENQUADRAMENTO",
            SheetColumn::CourseCode => "COD_CURSO",
            SheetColumn::CourseName => "NOME_CURSO",
            SheetColumn::CourseCoordinator => "COORDENADOR_CURSO",
            SheetColumn::Registration => "MATR_ALUNO",
            SheetColumn::StudentName => "NOME_ALUNO",
            SheetColumn::EntryYear => "ANO_INGRESSO",
            SheetColumn::EntryPeriod => "PERIODO_INGRESSO",
            SheetColumn::QuotaType => "TIPO_COTA_INGRESSO",
            SheetColumn::Status => "ENQUADRAMENTO",
            SheetColumn::StatusDetail => "ACOMPANHAMENTO_ENQUADRAMENTO",
            SheetColumn::IntegralizedHours => "CH_INTEGRALIZADA",
            SheetColumn::TotalHours => "CH_TOTAL_DISCIPLINAS_CONTAR",
            SheetColumn::PendingObligatory => "NUM_DISC_OBR_FALTANTES",
            SheetColumn::SemestersNoHours => "NUM_SEMESTRES_SEM_CH",
            SheetColumn::Locks => "NUM_TRANCAMENTOS",
        }
    }

    pub const ALL: [SheetColumn; 16] = [
        SheetColumn::BasePeriod,
        SheetColumn::CourseCode,
        SheetColumn::CourseName,
        SheetColumn::CourseCoordinator,
        SheetColumn::Registration,
        SheetColumn::StudentName,
        SheetColumn::EntryYear,
        SheetColumn::EntryPeriod,
        SheetColumn::QuotaType,
        SheetColumn::Status,
        SheetColumn::StatusDetail,
        SheetColumn::IntegralizedHours,
        SheetColumn::TotalHours,
        SheetColumn::PendingObligatory,
        SheetColumn::SemestersNoHours,
        SheetColumn::Locks,
    ];

    /// Columns whose absence fails the whole import.
    pub const MANDATORY: [SheetColumn; 2] = [SheetColumn::BasePeriod, SheetColumn::Registration];
}

/// Position of `label` in the header row, matched case-insensitively
/// with surrounding whitespace trimmed.
fn find_column(header: &[String], label: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case(label))
}

// ==========================================
// HeaderMap
// ==========================================
pub struct HeaderMap {
    indices: HashMap<SheetColumn, usize>,
}

impl HeaderMap {
    /// Resolve every known column against the header row.
    ///
    /// Optional columns may be absent; a missing mandatory column
    /// fails with `InvalidSchema` before any row is processed.
    pub fn resolve(header: &[String]) -> ImportResult<Self> {
        let mut indices = HashMap::new();
        for column in SheetColumn::ALL {
            if let Some(idx) = find_column(header, column.label()) {
                indices.insert(column, idx);
            }
        }

        let missing: Vec<String> = SheetColumn::MANDATORY
            .iter()
            .filter(|column| !indices.contains_key(column))
            .map(|column| column.label().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::InvalidSchema { missing });
        }

        Ok(Self { indices })
    }

    pub fn index_of(&self, column: SheetColumn) -> Option<usize> {
        self.indices.get(&column).copied()
    }

    /// Index of the registration column. Guaranteed by `resolve`.
    pub fn registration_index(&self) -> usize {
        self.indices[&SheetColumn::Registration]
    }

    /// Bounds-safe cell access: an unresolved column or an index
    /// past the row's length reads as the empty string.
    pub fn cell<'a>(&self, row: &'a [String], column: SheetColumn) -> &'a str {
        self.index_of(column)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_resolve_case_and_whitespace_insensitive() {
        let map = HeaderMap::resolve(&header(&[
            " matr_aluno ",
            "Periodo_Base_Enquadramento",
            "NOME_ALUNO",
        ]))
        .unwrap();

        assert_eq!(map.index_of(SheetColumn::Registration), Some(0));
        assert_eq!(map.index_of(SheetColumn::BasePeriod), Some(1));
        assert_eq!(map.index_of(SheetColumn::StudentName), Some(2));
    }

    #[test]
    fn test_missing_optional_column_is_tolerated() {
        let map = HeaderMap::resolve(&header(&["MATR_ALUNO", "PERIODO_BASE_ENQUADRAMENTO"]))
            .unwrap();
        assert_eq!(map.index_of(SheetColumn::CourseCode), None);

        let row = vec!["2021001".to_string(), "2025/1".to_string()];
        assert_eq!(map.cell(&row, SheetColumn::CourseCode), "");
    }

    #[test]
    fn test_missing_mandatory_column_is_invalid_schema() {
        let result = HeaderMap::resolve(&header(&["NOME_ALUNO", "PERIODO_BASE_ENQUADRAMENTO"]));
        match result {
            Err(ImportError::InvalidSchema { missing }) => {
                assert_eq!(missing, vec!["MATR_ALUNO".to_string()]);
            }
            other => panic!("expected InvalidSchema, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_cell_is_bounds_safe() {
        let map = HeaderMap::resolve(&header(&[
            "PERIODO_BASE_ENQUADRAMENTO",
            "MATR_ALUNO",
            "NOME_ALUNO",
        ]))
        .unwrap();

        // row shorter than the resolved NOME_ALUNO index
        let row = vec!["2025/1".to_string(), "2021001".to_string()];
        assert_eq!(map.cell(&row, SheetColumn::StudentName), "");
        assert_eq!(map.cell(&row, SheetColumn::Registration), "2021001");
    }
}
