//! Hand-rolled reader/writer for the journal's row-oriented file. Fields
//! holding separators, quotes or line breaks are wrapped in double quotes
//! with embedded quotes doubled, the usual tabular-escaping convention, so
//! free-text answers can contain anything the user types.

fn needs_quoting(field: &str) -> bool {
    field.chars().any(|c| matches!(c, ',' | '"' | '\n' | '\r'))
}

/// Encodes one row, terminating newline included.
pub fn encode_row(fields: &[String]) -> String {
    let mut out = String::new();
    for (at, field) in fields.iter().enumerate() {
        if at > 0 {
            out.push(',');
        }
        if needs_quoting(field) {
            out.push('"');
            for c in field.chars() {
                if c == '"' {
                    out.push('"');
                }
                out.push(c);
            }
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
    out
}

/// Parses a whole file into rows of fields. Quoted fields may span lines, so
/// this has to run over the full content rather than line by line. Accepts
/// both LF and CRLF row endings and skips blank lines.
pub fn parse_table(input: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    // Marks that the current row saw any content, so a lone newline doesn't
    // produce a phantom single-field row.
    let mut row_started = false;
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                row_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                row_started = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if row_started {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                    row_started = false;
                }
            }
            _ => {
                field.push(c);
                row_started = true;
            }
        }
    }

    if row_started {
        row.push(field);
        rows.push(row);
    }
    rows
}
