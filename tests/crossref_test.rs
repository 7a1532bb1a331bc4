mod common;

use astrocat::{AstrocatError, CatalogResolver, Table};
use common::{crossref_copy, utf8, CROSSREF_DIR};

#[test]
fn test_find_by_proper_name_alchiba() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let records = resolver.find_by_proper_name("Alchiba").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].henry_draper, 105452);
    assert_eq!(
        records[0].proper_names,
        vec!["Alchiba", "Al Minliar al Ghurab", "Al Chiba"]
    );
    assert!(records[0].reference_codes.contains(&"2".to_string()));
}

#[test]
fn test_find_by_proper_name_is_idempotent() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let first = resolver.find_by_proper_name("Sirius").unwrap();
    let _ = resolver.find_by_proper_name("Arcturus").unwrap();
    let second = resolver.find_by_proper_name("Sirius").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_find_by_proper_name_keeps_duplicates() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let records = resolver.find_by_proper_name("Sirius").unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.henry_draper == 48915));
    assert_eq!(records[0].proper_names, vec!["Sirius", "Dog Star"]);
    assert_eq!(records[0].reference_codes, vec!["1", "3"]);
    assert_eq!(records[1].proper_names, vec!["Sirius"]);
    assert_eq!(records[1].reference_codes, vec!["4"]);
}

#[test]
fn test_find_by_proper_name_is_case_sensitive_substring() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    assert_eq!(resolver.find_by_proper_name("Minliar").unwrap().len(), 1);
    assert!(resolver.find_by_proper_name("alchiba").unwrap().is_empty());
    assert!(resolver.find_by_proper_name("Vega").unwrap().is_empty());
    // the designation columns are not searched
    assert!(resolver.find_by_proper_name("Crv").unwrap().is_empty());
}

#[test]
fn test_find_by_proper_name_surfaces_parse_errors() {
    let dir = crossref_copy(&[]);
    let table3 = utf8(&dir).join("table3.dat");
    let mut content = std::fs::read_to_string(&table3).unwrap();
    content.push_str("10x452   2 bet   Crv Kraz                                                    1\n");
    std::fs::write(&table3, content).unwrap();

    let mut resolver = CatalogResolver::open(utf8(&dir)).unwrap();
    assert!(matches!(
        resolver.find_by_proper_name("Kraz"),
        Err(AstrocatError::ParseError {
            field: "henry_draper",
            ..
        })
    ));
    // lines that do not match are never decoded
    assert_eq!(resolver.find_by_proper_name("Alchiba").unwrap().len(), 1);
}

#[test]
fn test_open_fails_on_missing_refs() {
    let dir = crossref_copy(&["refs.dat"]);

    match CatalogResolver::open(utf8(&dir)) {
        Err(AstrocatError::OpenError { file, .. }) => assert!(file.ends_with("refs.dat")),
        other => panic!("expected an OpenError, got {other:?}"),
    }
}

#[test]
fn test_open_names_first_missing_table() {
    let dir = crossref_copy(&["table2.dat", "refs.dat"]);

    let err = CatalogResolver::open(utf8(&dir)).unwrap_err();
    assert_eq!(
        err,
        AstrocatError::OpenError {
            file: utf8(&dir).join("table2.dat").to_string(),
            source: std::io::ErrorKind::NotFound.into(),
        }
    );
}

#[test]
fn test_decode_every_catalog_line() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let records = resolver
        .table_lines(Table::Catalog)
        .unwrap()
        .map(|line| CatalogResolver::decode_catalog_line(&line.unwrap()).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(records.len(), 4);

    let anonymous = &records[3];
    assert_eq!(anonymous.henry_draper, None);
    assert_eq!(anonymous.hipparcos, None);
    assert_eq!(anonymous.flamsteed, None);
    assert!(anonymous.declination.negative);
    assert_eq!(anonymous.declination.major, 0);
}

#[test]
fn test_find_by_henry_draper() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let records = resolver.find_by_henry_draper(105452).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hipparcos, Some(59199));
    assert_eq!(records[0].bright_star, Some(4623));
    assert_eq!(records[0].constellation, "Crv");

    assert!(resolver.find_by_henry_draper(1).unwrap().is_empty());
}

#[test]
fn test_resolve_proper_name() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let alchiba = resolver.resolve_proper_name("Alchiba").unwrap();
    assert_eq!(alchiba.len(), 1);
    assert_eq!(alchiba[0].catalog.len(), 1);
    assert_eq!(alchiba[0].catalog[0].durchmusterung_id, "CD-24 10174 ");

    let sirius = resolver.resolve_proper_name("Sirius").unwrap();
    assert_eq!(sirius.len(), 2);
    assert!(sirius
        .iter()
        .all(|xref| xref.catalog.len() == 1 && xref.catalog[0].hipparcos == Some(32349)));

    // Betelgeuse has a proper name entry but no catalog line in the fixtures
    let betelgeuse = resolver.resolve_proper_name("Betelgeuse").unwrap();
    assert_eq!(betelgeuse.len(), 1);
    assert!(betelgeuse[0].catalog.is_empty());

    assert!(resolver.resolve_proper_name("Vega").unwrap().is_empty());
}

#[test]
fn test_reference_lookup() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let allen = resolver.reference("2").unwrap().unwrap();
    assert!(allen.text.starts_with("Allen R.H."));
    assert_eq!(resolver.reference("9").unwrap(), None);
}

#[test]
fn test_every_table_is_addressable() {
    let mut resolver = CatalogResolver::open(CROSSREF_DIR).unwrap();

    let counts: Vec<usize> = Table::ALL
        .iter()
        .map(|table| resolver.table_lines(*table).unwrap().count())
        .collect();
    assert_eq!(counts, vec![4, 2, 3, 6, 4]);
}

#[test]
fn test_resolvers_are_independent() {
    let mut first = CatalogResolver::open(CROSSREF_DIR).unwrap();
    let dir = crossref_copy(&[]);
    std::fs::write(utf8(&dir).join("table3.dat"), "").unwrap();
    let mut second = CatalogResolver::open(utf8(&dir)).unwrap();

    assert!(second.find_by_proper_name("Alchiba").unwrap().is_empty());
    assert_eq!(first.find_by_proper_name("Alchiba").unwrap().len(), 1);

    second.close();
    assert_eq!(first.find_by_proper_name("Alchiba").unwrap().len(), 1);
}

#[test]
fn test_find_by_proper_name_rejects_split_characters() {
    let dir = crossref_copy(&[]);
    let table3 = utf8(&dir).join("table3.dat");
    let content = std::fs::read_to_string(&table3).unwrap();
    let alchiba = content.lines().next().unwrap();
    // 'é' across the end of the proper-name column
    let broken = format!("{}é{}", &alchiba[..75], &alchiba[76..]);
    std::fs::write(&table3, content.replacen(alchiba, &broken, 1)).unwrap();

    let mut resolver = CatalogResolver::open(utf8(&dir)).unwrap();
    assert_eq!(
        resolver.find_by_proper_name("Sirius"),
        Err(AstrocatError::ParseError {
            line: broken,
            field: "proper_names"
        })
    );
}
