// ==========================================
// ADA Management - tabular file reader
// ==========================================
// Converts an uploaded file (bytes + original filename) into a
// rectangular Vec<Vec<String>> with the header as row 0.
// Supports: CSV (semicolon-delimited, lenient quoting) and
// XLSX (first sheet only).
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use csv::ReaderBuilder;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// CSV reader
// ==========================================
// Institutional exports use ';' as the field delimiter and are
// inconsistently quoted; flexible record lengths are tolerated
// and short rows are handled per-field downstream.
pub struct CsvSheetReader;

impl CsvSheetReader {
    pub fn read(bytes: &[u8]) -> ImportResult<Vec<Vec<String>>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(rows)
    }
}

// ==========================================
// XLSX reader
// ==========================================
// Only the first sheet is read, in row order; every cell value
// is converted to its string representation.
pub struct XlsxSheetReader;

impl XlsxSheetReader {
    pub fn read(bytes: &[u8]) -> ImportResult<Vec<Vec<String>>> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor)
            .map_err(|e: calamine::XlsxError| ImportError::ReadFailure(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::NoSheet);
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ReadFailure(e.to_string()))?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        Ok(rows)
    }
}

// ==========================================
// Extension dispatch
// ==========================================
pub struct TabularReader;

impl TabularReader {
    /// Read `bytes` according to the extension of `filename`
    /// (case-insensitive). Any other extension is rejected before
    /// a single byte is parsed.
    pub fn read(bytes: &[u8], filename: &str) -> ImportResult<Vec<Vec<String>>> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvSheetReader::read(bytes),
            "xlsx" => XlsxSheetReader::read(bytes),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_semicolon_delimited() {
        let bytes = b"MATR_ALUNO;NOME_ALUNO\n2021001;Maria Silva\n2021002;Joao Santos\n";
        let rows = CsvSheetReader::read(bytes).unwrap();

        // header comes back as row 0
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["MATR_ALUNO", "NOME_ALUNO"]);
        assert_eq!(rows[1], vec!["2021001", "Maria Silva"]);
    }

    #[test]
    fn test_csv_flexible_row_lengths() {
        let bytes = b"A;B;C\n1;2;3\n1\n";
        let rows = CsvSheetReader::read(bytes).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec!["1"]);
    }

    #[test]
    fn test_csv_malformed_quote_does_not_abort() {
        // unterminated quote: best-effort recovery, not an error
        let bytes = b"A;B\n\"2021001;Maria\n";
        let result = CsvSheetReader::read(bytes);
        assert!(result.is_ok());
    }

    #[test]
    fn test_dispatch_unsupported_extension() {
        let result = TabularReader::read(b"irrelevant", "report.docx");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "docx"));
    }

    #[test]
    fn test_dispatch_extension_case_insensitive() {
        let rows = TabularReader::read(b"A;B\n1;2\n", "Planilha.CSV").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_xlsx_garbage_bytes_fail_as_read_failure() {
        let result = TabularReader::read(b"not a zip archive", "report.xlsx");
        assert!(matches!(result, Err(ImportError::ReadFailure(_))));
    }
}
