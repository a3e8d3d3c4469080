// src/csv.rs
use std::io::{self, Write};

use crate::data::JoinedRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write the joined table, optionally preceded by a header line.
pub fn write_joined<W: Write>(
    mut w: W,
    rows: &[JoinedRecord],
    include_headers: bool,
    format: ExportFormat,
) -> io::Result<()> {
    let sep = format.delim();
    if include_headers {
        write_row(&mut w, &JoinedRecord::HEADERS, sep)?;
    }
    for r in rows {
        write_row(&mut w, &r.to_row(), sep)?;
    }
    w.flush()
}

/// The joined table as a string (clipboard/export).
pub fn to_export_string(rows: &[JoinedRecord], include_headers: bool, format: ExportFormat) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_joined(&mut buf, rows, include_headers, format);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(club: &str, stadium: &str, km: u64) -> JoinedRecord {
        JoinedRecord { club: club.into(), stadium: stadium.into(), distance_km: km, latitude: 52.5, longitude: -1.5 }
    }

    #[test]
    fn quotes_fields_containing_the_separator() {
        let s = to_export_string(&[rec("Brighton, Hove", "Amex", 250)], false, ExportFormat::Csv);
        assert_eq!(s, "\"Brighton, Hove\",Amex,250,52.500000,-1.500000\n");
    }

    #[test]
    fn tsv_with_headers() {
        let s = to_export_string(&[rec("Derby County", "Pride Park", 15)], true, ExportFormat::Tsv);
        let mut lines = s.lines();
        assert_eq!(lines.next(), Some("Club\tStadium\tDistance (km)\tLatitude\tLongitude"));
        assert_eq!(lines.next(), Some("Derby County\tPride Park\t15\t52.500000\t-1.500000"));
        assert_eq!(lines.next(), None);
    }
}
