use super::{euros, short_id};
use rust_decimal::Decimal;
use shares::Combination;

const HEADERS: [&str; 3] = ["Shares", "Total Cost", "2 years profit"];

/// Renders combinations as a plain-text table, one row per combination.
pub fn render_combinations(combinations: &[Combination]) -> String {
    let rows: Vec<[String; 3]> = combinations
        .iter()
        .map(|comb| {
            let ids: Vec<String> = comb.member_ids().into_iter().map(short_id).collect();
            [
                ids.join(", "),
                euros(Decimal::from(comb.total_cost())),
                euros(comb.total_profit()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<w0$}  {:>w1$}  {:>w2$}\n",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    ));
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    ));
    for row in &rows {
        out.push_str(&format!(
            "{:<w0$}  {:>w1$}  {:>w2$}\n",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shares::Instrument;

    #[test]
    fn test_table_layout() {
        let comb: Combination = vec![
            Instrument::new("Action-1", 2000, dec!(0.10)),
            Instrument::new("Action-2", 3000, dec!(0.08)),
        ]
        .into_iter()
        .collect();

        let table = render_combinations(&[comb]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Shares"));
        assert!(lines[0].ends_with("2 years profit"));
        assert!(lines[2].starts_with("A1, A2"));
        assert!(lines[2].contains("50.00"));
        assert!(lines[2].ends_with("4.40"));
    }

    #[test]
    fn test_empty_input_renders_headers() {
        let table = render_combinations(&[]);
        assert_eq!(table.lines().count(), 2);
    }
}
