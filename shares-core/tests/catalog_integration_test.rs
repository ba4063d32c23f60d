use rust_decimal_macros::dec;
use shares::{Instrument, Solver};
use shares_core::catalog::{load_catalog, CatalogError, CatalogLayout};
use shares_core::report::render_combinations;
use shares_core::OptimizedSolver;
use std::io::Write;
use std::path::Path;

fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_solve_euros_catalog() {
    let file = write_catalog(
        "name,price,profit\n\
         Action-1,20,5%\n\
         Action-2,30,10%\n\
         Action-3,50,15%\n\
         Action-4,70,20%\n",
    );

    let shares = load_catalog(file.path(), CatalogLayout::Euros).unwrap();
    assert_eq!(shares.len(), 4);
    assert_eq!(shares[3], Instrument::new("Action-4", 7000, dec!(0.20)));

    // 100 EUR: Action-2 + Action-4 (3.00 + 14.00) beats Action-3 + Action-1 + Action-2.
    let best = OptimizedSolver::new().solve(&shares, 100 * 100);
    assert_eq!(best.member_ids(), vec!["Action-2", "Action-4"]);
    assert_eq!(best.total_cost(), 10000);
    assert_eq!(best.total_profit(), dec!(1700));

    let table = render_combinations(&[best]);
    assert!(table.contains("A2, A4"));
    assert!(table.contains("100.00"));
    assert!(table.contains("17.00"));
}

#[test]
fn test_load_decimal_catalog_discards_free_shares() {
    let file = write_catalog(
        "name,price,profit\n\
         Share-AAA,12.34,25.5\n\
         Share-BBB,0.00,40\n\
         Share-CCC,-1.20,30\n\
         Share-DDD,9.999,12\n",
    );

    let shares = load_catalog(file.path(), CatalogLayout::Decimal).unwrap();
    assert_eq!(
        shares,
        vec![
            Instrument::new("Share-AAA", 1234, dec!(0.255)),
            Instrument::new("Share-DDD", 1000, dec!(0.12)),
        ]
    );
}

#[test]
fn test_load_cents_catalog() {
    let file = write_catalog("id,cost,profit\nShare-1,1550,12\nShare-2,899,7.5\n");
    let shares = load_catalog(file.path(), CatalogLayout::Cents).unwrap();
    assert_eq!(shares[1], Instrument::new("Share-2", 899, dec!(0.075)));
}

#[test]
fn test_malformed_profit_is_fatal() {
    let file = write_catalog("name,price,profit\nAction-1,20,5%\nAction-2,30,lots\n");
    let err = load_catalog(file.path(), CatalogLayout::Euros).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Action-2"), "{}", message);
    assert!(message.contains("profit"), "{}", message);
}

#[test]
fn test_repeated_share_never_reaches_the_solvers() {
    let file = write_catalog(
        "name,price,profit\n\
         Action-1,20,5%\n\
         Action-1,20,5%\n\
         Action-2,30,10%\n",
    );
    let err = load_catalog(file.path(), CatalogLayout::Euros).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateShare { line: 3, .. }));
    assert!(err.to_string().contains("Action-1"), "{}", err);
}

#[test]
fn test_missing_file() {
    let err = load_catalog(Path::new("/nonexistent/shares.csv"), CatalogLayout::Euros).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}
