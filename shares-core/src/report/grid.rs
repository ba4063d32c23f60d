use super::{euros, short_id};
use crate::solver::DpTable;
use rust_decimal::Decimal;
use shares::Instrument;

const LABEL_WIDTH: usize = 10;
const CELL_WIDTH: usize = 10;

/// Renders the DP table: one column per budget level, one row per share,
/// each cell holding the best profit reachable so far.
pub fn render_grid(table: &DpTable, instruments: &[Instrument]) -> String {
    let mut out = format!("{:<LABEL_WIDTH$}", "");
    for level in table.levels() {
        out.push_str(&format!("{:>CELL_WIDTH$}", euros(Decimal::from(*level))));
    }
    out.push('\n');

    for (row, share) in instruments.iter().enumerate().take(table.rows()) {
        out.push_str(&format!("{:<LABEL_WIDTH$}", short_id(share.get_id())));
        for col in 0..table.cols() {
            out.push_str(&format!("{:>CELL_WIDTH$}", euros(table.profit(row, col))));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::OptimizedSolver;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grid_shape() {
        let catalog = vec![
            Instrument::new("Action-1", 2000, dec!(0.10)),
            Instrument::new("Action-2", 3000, dec!(0.08)),
        ];
        let table = OptimizedSolver::new().build_table(&catalog, 4000).unwrap();
        let grid = render_grid(&table, &catalog);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("20.00") && lines[0].contains("40.00"));
        assert!(lines[1].starts_with("A1"));
        assert!(lines[2].starts_with("A2"));
        assert!(lines[2].trim_end().ends_with("2.40"));
    }
}
