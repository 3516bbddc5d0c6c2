//! Full default run against rustfft

fn parse_ms(field: &str, label: &str) -> f64 {
    let value = field
        .strip_prefix(label)
        .and_then(|v| v.strip_suffix("ms"))
        .unwrap_or_else(|| panic!("bad field {field:?}"));
    // Six decimals, like C's %f
    assert_eq!(value.split('.').nth(1).map(str::len), Some(6), "{value}");
    value.parse().unwrap()
}

#[test]
fn test_default_run_prints_four_lines_in_order() {
    let mut out = Vec::new();
    let reports = fft_bench::run_default(&mut out).unwrap();
    assert_eq!(reports.len(), 4);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);

    let expected = [("100", "complex"), ("10000", "complex"), ("100", "real"), ("10000", "real")];
    for (line, (n, kind)) in lines.iter().zip(expected) {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields.len(), 4, "{line}");
        assert_eq!(fields[0], format!("n={n}"));
        assert_eq!(fields[1], kind);
        assert!(parse_ms(fields[2], "init: ") >= 0.0);
        assert!(parse_ms(fields[3], "exec: ") >= 0.0);
    }
}
