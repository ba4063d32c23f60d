//! Reads a share catalog from CSV into core instruments.

use super::error::{CatalogError, Result};
use super::layout::CatalogLayout;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use shares::Instrument;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads a catalog file.
///
/// # Arguments
///
/// * `path` - The CSV file, header row first.
/// * `layout` - How the cost and profit columns are encoded.
///
/// # Returns
///
/// * `Ok(Vec<Instrument>)` in file order, without the shares that cost nothing.
/// * `Err` naming the offending line if any record is malformed.
pub fn load_catalog(path: &Path, layout: CatalogLayout) -> Result<Vec<Instrument>> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let shares = parse_catalog(file, layout)?;
    debug!("Loaded {} shares from {:?}", shares.len(), path);
    Ok(shares)
}

/// Parses a catalog from any reader. See [`load_catalog`].
pub fn parse_catalog<R: Read>(reader: R, layout: CatalogLayout) -> Result<Vec<Instrument>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut shares = Vec::new();
    let mut seen: HashMap<String, u64> = HashMap::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let (Some(id), Some(raw_cost), Some(raw_profit)) =
            (record.get(0), record.get(1), record.get(2))
        else {
            return Err(CatalogError::MissingField {
                line,
                found: record.len(),
            });
        };

        let malformed = |field: &'static str, value: &str, reason: String| {
            CatalogError::MalformedRecord {
                line,
                id: id.to_string(),
                field,
                value: value.to_string(),
                reason,
            }
        };

        let cost = layout
            .parse_cost(raw_cost)
            .map_err(|e| malformed(e.field, raw_cost, e.reason))?;
        let rate = layout
            .parse_rate(raw_profit)
            .map_err(|e| malformed(e.field, raw_profit, e.reason))?;

        if let Some(&first_line) = seen.get(id) {
            return Err(CatalogError::DuplicateShare {
                line,
                id: id.to_string(),
                first_line,
            });
        }
        seen.insert(id.to_string(), line);

        if cost <= 0 {
            warn!("Line {}: discarding share '{}' with cost {}", line, id, cost);
            continue;
        }

        shares.push(Instrument::new(id, cost as u64, rate));
    }

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_euros_catalog() {
        let data = "name,price,profit\nAction-1,20,5%\nAction-2, 30 , 10%\n";
        let shares = parse_catalog(data.as_bytes(), CatalogLayout::Euros).unwrap();
        assert_eq!(
            shares,
            vec![
                Instrument::new("Action-1", 2000, dec!(0.05)),
                Instrument::new("Action-2", 3000, dec!(0.10)),
            ]
        );
    }

    #[test]
    fn test_non_positive_costs_are_discarded() {
        let data = "name,price,profit\nShare-A,0.00,12.5\nShare-B,-4.20,3\nShare-C,15.50,20\n";
        let shares = parse_catalog(data.as_bytes(), CatalogLayout::Decimal).unwrap();
        assert_eq!(shares, vec![Instrument::new("Share-C", 1550, dec!(0.20))]);
    }

    #[test]
    fn test_malformed_record_names_the_share() {
        let data = "name,price,profit\nAction-1,20,5%\nAction-2,abc,10%\n";
        let err = parse_catalog(data.as_bytes(), CatalogLayout::Euros).unwrap_err();
        match err {
            CatalogError::MalformedRecord {
                line, id, field, value, ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(id, "Action-2");
                assert_eq!(field, "cost");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_short_record_is_rejected() {
        let data = "name,price,profit\nAction-1,20\n";
        let err = parse_catalog(data.as_bytes(), CatalogLayout::Euros).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField { line: 2, found: 2 }));
    }

    #[test]
    fn test_repeated_share_is_rejected() {
        let data = "name,price,profit\nAction-1,20,5%\nAction-1,20,5%\nAction-2,30,10%\n";
        let err = parse_catalog(data.as_bytes(), CatalogLayout::Euros).unwrap_err();
        match err {
            CatalogError::DuplicateShare { line, id, first_line } => {
                assert_eq!(line, 3);
                assert_eq!(id, "Action-1");
                assert_eq!(first_line, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_header_only_catalog_is_empty() {
        let shares = parse_catalog("name,price,profit\n".as_bytes(), CatalogLayout::Cents).unwrap();
        assert!(shares.is_empty());
    }
}
