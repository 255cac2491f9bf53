use csvrow::RowCodec;

const ESCAPE_CASES: &[(&str, &str)] = &[
    ("Simple text", "Simple text"),
    ("Meeting; Konferenz", "\"Meeting; Konferenz\""),
    ("Er sagte \"Hallo\"", "\"Er sagte \"\"Hallo\"\"\""),
    ("Zeile 1\nZeile 2", "\"Zeile 1\nZeile 2\""),
    ("Multiple; semicolons; here", "\"Multiple; semicolons; here\""),
    ("", ""),
];

const EXPORT_PREFIX: [&str; 8] = [
    "2026-02-10",
    "Montag",
    "Home Office",
    "08:15",
    "16:37",
    "8.37",
    "0.50",
    "7.87",
];

const ROW_CASES: &[(&str, &str)] = &[
    ("2026-02-10;Montag;Home Office;08:15;16:37;8.37;0.50;7.87;", ""),
    (
        "2026-02-10;Montag;Home Office;08:15;16:37;8.37;0.50;7.87;\"Meeting; Konferenz\"",
        "Meeting; Konferenz",
    ),
    (
        "2026-02-10;Montag;Home Office;08:15;16:37;8.37;0.50;7.87;\"Er sagte \"\"Hallo\"\"\"",
        "Er sagte \"Hallo\"",
    ),
];

const ROUND_TRIP_NOTE: &str = "Meeting; Konferenz, \"wichtig\"";

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, ok: bool) -> &'static str {
        if ok {
            self.passed += 1;
            "✓ PASS"
        } else {
            self.failed += 1;
            "✗ FAIL"
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

fn export_row(note: &str) -> Vec<String> {
    EXPORT_PREFIX
        .iter()
        .copied()
        .chain(std::iter::once(note))
        .map(str::to_string)
        .collect()
}

/// Прогоняет встроенный набор проверок и печатает отчет в `out`.
pub(crate) fn run(codec: &RowCodec, out: &mut impl std::io::Write) -> std::io::Result<Summary> {
    let mut summary = Summary::default();

    writeln!(out, "=== CSV Escaping Verification ===\n")?;
    for &(input, expected) in ESCAPE_CASES {
        let actual = codec.escape(input);
        let result = summary.record(actual == expected);
        writeln!(out, "{result}: escape({input:?})")?;
        writeln!(out, "  Expected: {expected}")?;
        writeln!(out, "  Actual:   {actual}\n")?;
    }

    writeln!(out, "\n=== CSV Row Parsing Verification ===\n")?;
    for &(row, note) in ROW_CASES {
        let expected = export_row(note);
        let actual = codec.decode(row);
        let ok = actual.as_ref().is_ok_and(|fields| *fields == expected);
        let result = summary.record(ok);
        writeln!(out, "{result}: parse(...)")?;
        writeln!(out, "  Expected fields: {}", expected.len())?;
        match &actual {
            Ok(fields) => {
                writeln!(out, "  Actual fields:   {}", fields.len())?;
                if !ok {
                    writeln!(out, "  Expected: {expected:?}")?;
                    writeln!(out, "  Actual:   {fields:?}")?;
                }
            }
            Err(err) => writeln!(out, "  Error:           {err}")?,
        }
        writeln!(out)?;
    }

    writeln!(out, "\n=== Round-trip Test ===\n")?;
    let original = export_row(ROUND_TRIP_NOTE);
    let row = codec.encode(&original);
    writeln!(out, "CSV Row: {row}")?;
    let parsed = codec.decode(&row);
    let result = summary.record(parsed.as_ref().is_ok_and(|fields| *fields == original));
    writeln!(out, "{result}: Round-trip test")?;
    writeln!(out, "  Original:  {original:?}")?;
    writeln!(out, "  Parsed:    {parsed:?}\n")?;

    writeln!(out, "\n=== Summary ===")?;
    writeln!(out, "Passed: {}", summary.passed)?;
    writeln!(out, "Failed: {}", summary.failed)?;
    writeln!(out, "Total:  {}", summary.total())?;
    if summary.failed == 0 {
        writeln!(out, "\n✓ All tests passed! CSV escaping is RFC 4180 compliant.")?;
    } else {
        writeln!(out, "\n✗ Some tests failed. Please review the implementation.")?;
    }

    Ok(summary)
}
