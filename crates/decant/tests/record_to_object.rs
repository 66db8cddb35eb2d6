use decant::schema::Record;
use decant::{MappingMode, RecordMapper, Reflect, Value};

use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, Reflect)]
struct Part {
    id: i64,
    label: Option<String>,
}

#[test]
fn test_maps_record_fields() {
    let record = Record::from_iter([
        ("ID", Value::I64(4)),
        ("Label", Value::from("flange")),
    ]);

    let mapper = RecordMapper::<Part>::new();
    let part = mapper.map(&record).unwrap();

    assert_eq!(
        part,
        Part {
            id: 4,
            label: Some("flange".to_string()),
        }
    );
}

#[test]
fn test_null_field_matches_any_target_type() {
    // A null field has no runtime type; it still satisfies the target.
    let record = Record::from_iter([("id", Value::I64(4)), ("label", Value::Null)]);

    let part = RecordMapper::<Part>::new().map(&record).unwrap();
    assert_eq!(part.label, None);
}

#[test]
fn test_missing_field_fails_tabular_default() {
    let record = Record::from_iter([("id", Value::I64(4))]);

    let err = RecordMapper::<Part>::new().map(&record).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("label"));
}

#[test]
fn test_configured_record_mapper_applies_per_shape() {
    let mapper = RecordMapper::<Part>::configure(|config| {
        config.mode(MappingMode::Relaxed);
    });

    // Two different shapes through the same mapper.
    let narrow = Record::from_iter([("id", Value::I64(1))]);
    let wide = Record::from_iter([
        ("id", Value::I64(2)),
        ("label", Value::from("w")),
        ("surplus", Value::Bool(true)),
    ]);

    assert_eq!(mapper.map(&narrow).unwrap().id, 1);
    let part = mapper.map(&wide).unwrap();
    assert_eq!(part.id, 2);
    assert_eq!(part.label, Some("w".to_string()));
}

#[test]
fn test_map_into_existing_target() {
    let record = Record::from_iter([("id", Value::I64(9))]);
    let mapper = RecordMapper::<Part>::configure(|config| {
        config.mode(MappingMode::Relaxed);
    });

    let existing = Part {
        id: 0,
        label: Some("keep".to_string()),
    };
    let part = mapper.map_into(&record, existing).unwrap();

    assert_eq!(part.id, 9);
    assert_eq!(part.label, Some("keep".to_string()));
}
