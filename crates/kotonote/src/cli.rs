//! Output formatting and prompts for the non-interactive commands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use kotonote_core::Entry;
use std::io::{BufRead, Write};

/// Format the notebook as a table (human) or JSON
pub fn format_sentence_table(entries: &[Entry], json: bool, no_color: bool) -> String {
    if json {
        let records: Vec<_> = entries.iter().map(|e| &e.record).collect();
        return serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string());
    }

    if entries.is_empty() {
        return "The notebook is empty.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["#", "Sentence", "Meaning"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Sentence").fg(Color::Cyan),
            Cell::new("Meaning").fg(Color::Cyan),
        ]);
    }

    for (i, entry) in entries.iter().enumerate() {
        let number = (i + 1).to_string();
        table.add_row(Row::from(vec![
            number.as_str(),
            &entry.record.source_text,
            &entry.record.target_text,
        ]));
    }

    table.to_string()
}

/// Ask the user to confirm a deletion; anything but y/yes declines
pub fn confirm_removal(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    let _ = write!(output, "{prompt} [y/N] ");
    let _ = output.flush();

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Translate the 1-based row number shown by `list` to a list position
pub fn parse_display_position(number: usize, len: usize) -> Result<usize, String> {
    if number == 0 {
        return Err("row numbers start at 1 (as shown by `kotonote list`)".to_string());
    }
    if number > len {
        return Err(format!(
            "row {number} does not exist, the notebook has {len} sentences"
        ));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotonote_core::{RecordSeq, SentenceRecord};

    fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (jp, kr))| Entry {
                seq: RecordSeq::new(i as u64 + 1),
                record: SentenceRecord::new(*jp, *kr),
            })
            .collect()
    }

    #[test]
    fn test_format_table_empty() {
        let output = format_sentence_table(&[], false, false);
        assert!(output.contains("empty"));
    }

    #[test]
    fn test_format_table_numbers_rows_from_one() {
        let list = entries(&[("一", "일"), ("二", "이")]);
        let output = format_sentence_table(&list, false, true);

        assert!(output.contains('1'));
        assert!(output.contains('2'));
        assert!(output.contains("一"));
        assert!(output.contains("이"));
    }

    #[test]
    fn test_format_json_uses_record_schema() {
        let list = entries(&[("はい", "네")]);
        let output = format_sentence_table(&list, true, false);

        assert!(output.starts_with('['));
        assert!(output.contains("\"jp\""));
        assert!(output.contains("\"kr\""));
        // Session-only identity never leaks into output
        assert!(!output.contains("seq"));
    }

    #[test]
    fn test_parse_display_position() {
        assert_eq!(parse_display_position(1, 3), Ok(0));
        assert_eq!(parse_display_position(3, 3), Ok(2));
        assert!(parse_display_position(0, 3).is_err());
        assert!(parse_display_position(4, 3).is_err());
    }

    #[test]
    fn test_confirm_accepts_yes_variants() {
        for (answer, expected) in [("y\n", true), ("Yes\n", true), ("n\n", false), ("\n", false)] {
            let mut input = answer.as_bytes();
            let mut output = Vec::new();
            assert_eq!(
                confirm_removal("Delete?", &mut input, &mut output),
                expected,
                "answer: {answer:?}"
            );
        }
    }
}
