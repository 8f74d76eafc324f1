// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant, leading BOM skipped).
/// Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    push_row(&mut rows, &mut row);

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].trim().is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/// First row is the header; the rest is data.
pub fn split_header(mut rows: Vec<Vec<String>>) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    if rows.is_empty() { return None; }
    let header = rows.remove(0);
    Some((header, rows))
}

/* ---------------- Writing ---------------- */

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

/// Whole table as one string, header first when given.
pub fn rows_to_string(headers: Option<&[&str]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r.as_slice(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_crlf_and_blank_lines() {
        let text = "\u{feff}DATE,RESULT\r\n\"Tue, Oct 19\",W121-114\r\n\r\n\"Say \"\"hi\"\"\",x\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![
            vec![s!("DATE"), s!("RESULT")],
            vec![s!("Tue, Oct 19"), s!("W121-114")],
            vec![s!("Say \"hi\""), s!("x")],
        ]);
    }

    #[test]
    fn tsv() {
        let rows = parse_rows("a\tb\n1\t2", '\t');
        assert_eq!(rows[1], vec![s!("1"), s!("2")]);
    }

    #[test]
    fn header_split() {
        let (h, rows) = split_header(parse_rows("A,B\n1,2\n", ',')).unwrap();
        assert_eq!(h, vec![s!("A"), s!("B")]);
        assert_eq!(rows.len(), 1);
        assert!(split_header(Vec::new()).is_none());
    }

    #[test]
    fn writing_quotes_when_needed() {
        let out = rows_to_string(Some(&["date", "x"]), &[vec![s!("Tue, Oct 19"), s!("114")]], ',');
        assert_eq!(out, "date,x\n\"Tue, Oct 19\",114\n");
        let out = rows_to_string(None, &[vec![s!("Tue, Oct 19"), s!("114")]], '\t');
        assert_eq!(out, "Tue, Oct 19\t114\n");
    }
}
