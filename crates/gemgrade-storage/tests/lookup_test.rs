//! Equality and range lookups against seeded grade tables.

use gemgrade_core::errors::LookupError;
use gemgrade_core::traits::{CellValue, EqualsPredicate, GradeLookup, RangePredicate};
use gemgrade_storage::queries::grades::{
    clear_table, count_rows, insert_bowtie_rows, insert_kgs_rows, BowtieRow, KgsRow,
};
use gemgrade_storage::LookupDatabase;

fn seeded() -> LookupDatabase {
    let db = LookupDatabase::open_in_memory().unwrap();
    db.with_writer(|conn| {
        insert_kgs_rows(
            conn,
            "kgs_pear_8",
            &[
                KgsRow {
                    table_width: 60.0,
                    crown_angle: 30.0,
                    pavilion_depth: 45.2,
                    kgs_grade: Some(2.0),
                    fish_eye_grade: Some(1.0),
                },
                KgsRow {
                    table_width: 60.0,
                    crown_angle: 30.0,
                    pavilion_depth: 45.2,
                    kgs_grade: Some(1.0),
                    fish_eye_grade: None,
                },
                KgsRow {
                    table_width: 62.0,
                    crown_angle: 30.0,
                    pavilion_depth: 45.2,
                    kgs_grade: Some(4.0),
                    fish_eye_grade: Some(4.0),
                },
            ],
        )?;
        insert_bowtie_rows(
            conn,
            "bowtie_pear_8",
            &[
                BowtieRow {
                    crown_angle: 30.0,
                    halves_min: 40.0,
                    halves_max: 42.0,
                    bowtie_grade: Some(1.0),
                },
                BowtieRow {
                    crown_angle: 30.0,
                    halves_min: 42.0,
                    halves_max: 44.0,
                    bowtie_grade: Some(3.0),
                },
                BowtieRow {
                    crown_angle: 31.0,
                    halves_min: 40.0,
                    halves_max: 44.0,
                    bowtie_grade: Some(5.0),
                },
            ],
        )?;
        Ok(())
    })
    .unwrap();
    db
}

fn key(width: f64, crown: f64, depth: f64) -> Vec<EqualsPredicate> {
    vec![
        EqualsPredicate::new("table_width", width),
        EqualsPredicate::new("crown_angle", crown),
        EqualsPredicate::new("pavilion_depth", depth),
    ]
}

#[test]
fn equality_returns_every_matching_row() {
    let db = seeded();
    let rows = db.query_equals("kgs_pear_8", &key(60.0, 30.0, 45.2)).unwrap();
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row["table_width"], CellValue::Real(60.0));
        assert!(row.contains_key("kgs_grade"));
        assert!(row.contains_key("fish_eye_grade"));
    }
    assert!(rows.iter().any(|r| r["fish_eye_grade"] == CellValue::Null));
}

#[test]
fn equality_with_no_match_is_empty_not_error() {
    let db = seeded();
    let rows = db.query_equals("kgs_pear_8", &key(59.0, 30.0, 45.2)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn range_bounds_are_inclusive() {
    let db = seeded();
    let crown = [EqualsPredicate::new("crown_angle", 30.0)];

    let at_edge = db
        .query_range(
            "bowtie_pear_8",
            &crown,
            &RangePredicate::new("halves_min", "halves_max", 42.0),
        )
        .unwrap();
    assert_eq!(at_edge.len(), 2);

    let inside = db
        .query_range(
            "bowtie_pear_8",
            &crown,
            &RangePredicate::new("halves_min", "halves_max", 41.5),
        )
        .unwrap();
    assert_eq!(inside.len(), 1);
    assert_eq!(inside[0]["bowtie_grade"], CellValue::Real(1.0));

    let outside = db
        .query_range(
            "bowtie_pear_8",
            &crown,
            &RangePredicate::new("halves_min", "halves_max", 44.5),
        )
        .unwrap();
    assert!(outside.is_empty());
}

#[test]
fn missing_table_is_unknown_table_error() {
    let db = seeded();
    let err = db.query_equals("kgs_heart_8", &[]).unwrap_err();
    assert!(matches!(err, LookupError::UnknownTable(ref t) if t == "kgs_heart_8"));
}

#[test]
fn hostile_identifiers_are_rejected() {
    let db = seeded();
    let err = db
        .query_equals("kgs_pear_8; DROP TABLE kgs_pear_8", &[])
        .unwrap_err();
    assert!(matches!(err, LookupError::InvalidIdentifier(_)));

    let err = db
        .query_equals("kgs_pear_8", &[EqualsPredicate::new("Table_Width", 60.0)])
        .unwrap_err();
    assert!(matches!(err, LookupError::InvalidIdentifier(_)));

    let err = db
        .query_range(
            "bowtie_pear_8",
            &[],
            &RangePredicate::new("halves_min", "1=1 OR halves_max", 41.0),
        )
        .unwrap_err();
    assert!(matches!(err, LookupError::InvalidIdentifier(_)));

    assert_eq!(
        db.with_reader(|conn| count_rows(conn, "kgs_pear_8")).unwrap(),
        3
    );
}

#[test]
fn unknown_column_is_unavailable() {
    let db = seeded();
    let err = db
        .query_equals("kgs_pear_8", &[EqualsPredicate::new("girdle", 1.0)])
        .unwrap_err();
    assert!(matches!(err, LookupError::Unavailable { ref table, .. } if table == "kgs_pear_8"));
}

#[test]
fn empty_predicates_select_whole_table() {
    let db = seeded();
    assert_eq!(db.query_equals("bowtie_pear_8", &[]).unwrap().len(), 3);
}

#[test]
fn text_grades_are_returned_as_text() {
    let db = seeded();
    db.with_writer(|conn| {
        conn.execute(
            "INSERT INTO kgs_oval_4 (table_width, crown_angle, pavilion_depth, kgs_grade)
             VALUES (55, 32, 43, 'n/a')",
            [],
        )
        .map_err(|e| gemgrade_core::errors::StorageError::SqliteError {
            message: e.to_string(),
        })?;
        Ok(())
    })
    .unwrap();

    let rows = db.query_equals("kgs_oval_4", &key(55.0, 32.0, 43.0)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["kgs_grade"], CellValue::Text("n/a".to_string()));
    assert_eq!(rows[0]["kgs_grade"].as_number(), None);
}

#[test]
fn clear_table_removes_rows() {
    let db = seeded();
    let removed = db.with_writer(|conn| clear_table(conn, "kgs_pear_8")).unwrap();
    assert_eq!(removed, 3);
    assert!(db.query_equals("kgs_pear_8", &[]).unwrap().is_empty());
}
