use aalib::layout::RecordLayout;
use std::io::{self, Write};

/// Writes every record's block: field offsets one per line, then
/// `=<size>`.
pub fn print_layouts(out: &mut dyn Write, records: &[RecordLayout]) -> io::Result<()> {
    for record in records {
        log::trace!(
            "{}: {} fields, {} bytes",
            record.name,
            record.fields.len(),
            record.size
        );
        record.write_report(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use aalib::layout::{HARDWARE_PARAMS, RECORDS, RENDER_PARAMS};

    fn report() -> String {
        let mut out = Vec::new();
        print_layouts(&mut out, RECORDS).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn twenty_two_lines() {
        let report = report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 22);
        assert!(report.ends_with('\n'));

        let sizes: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.starts_with('='))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(sizes, [14, 21]);

        for (i, line) in lines.iter().enumerate() {
            let digits = if sizes.contains(&i) { &line[1..] } else { *line };
            assert!(!digits.is_empty(), "line {} is empty", i);
            assert!(digits.bytes().all(|b| b.is_ascii_digit()), "line {}: {:?}", i, line);
        }
    }

    #[test]
    fn blocks_match_layouts() {
        let report = report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[14], format!("={}", HARDWARE_PARAMS.size));
        assert_eq!(lines[15..], ["0", "4", "8", "12", "16", "20", "=24"]);
        assert_eq!(RENDER_PARAMS.size, 24);
    }

    #[test]
    fn deterministic() {
        assert_eq!(report(), report());
    }
}
