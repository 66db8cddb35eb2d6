use decant::schema::{Column, Row, Schema};
use decant::{Mapper, Reflect, RowMapper, Type, Value};

use pretty_assertions::assert_eq;
use std::sync::Arc;

#[derive(Debug, Default, Clone, PartialEq, Reflect)]
struct Source {
    id: i64,
    user_name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Reflect)]
struct Target {
    id: i64,
    name: String,
}

#[test]
fn test_bind_pairs_differently_named_members() {
    let mapper = Mapper::<Source, Target>::configure(|config| {
        config.bind("user_name", "name").unwrap();
    })
    .unwrap();

    let target = mapper
        .map(&Source {
            id: 2,
            user_name: "cask".to_string(),
        })
        .unwrap();

    assert_eq!(
        target,
        Target {
            id: 2,
            name: "cask".to_string(),
        }
    );
}

#[test]
fn test_constant_assigns_fixed_value() {
    let mapper = Mapper::<Source, Target>::configure(|config| {
        config.constant("name", "fixed").unwrap();
    })
    .unwrap();

    let target = mapper
        .map(&Source {
            id: 1,
            user_name: "overridden".to_string(),
        })
        .unwrap();

    assert_eq!(target.name, "fixed");
}

#[test]
fn test_convert_bridges_member_types() {
    let schema = Arc::new(Schema::new(vec![
        Column::new("id", Type::I64),
        Column::new("name", Type::I64),
    ]));

    let mapper = RowMapper::<Target>::configure(&schema, |config| {
        config
            .convert("name", "name", |value| {
                Ok(Value::String(format!("#{}", value.to_i64()?)))
            })
            .unwrap();
    })
    .unwrap();

    let row = Row::new(schema.clone(), vec![Value::I64(3), Value::I64(77)]).unwrap();
    assert_eq!(mapper.map(&row).unwrap().name, "#77");
}

#[test]
fn test_convert_failure_surfaces_to_caller() {
    let mapper = Mapper::<Source, Target>::configure(|config| {
        config
            .convert("id", "id", |value| {
                let id = value.to_i64()?;
                if id < 0 {
                    return Err(anyhow::anyhow!("negative id {id}").into());
                }
                Ok(Value::I64(id))
            })
            .unwrap();
    })
    .unwrap();

    let err = mapper
        .map(&Source {
            id: -1,
            user_name: String::new(),
        })
        .unwrap_err();

    assert!(err.to_string().contains("negative id"));
}

#[test]
fn test_unknown_names_are_usage_errors() {
    Mapper::<Source, Target>::configure(|config| {
        assert!(config.ignore("nope").unwrap_err().is_usage());
        assert!(config.bind("nope", "name").unwrap_err().is_usage());
        assert!(config.bind("id", "nope").unwrap_err().is_usage());
        assert!(config.constant("nope", 1i64).unwrap_err().is_usage());
    })
    .unwrap();
}

#[test]
fn test_configuration_error_is_not_sticky() {
    // A broken shape fails on every construction, then succeeds once the
    // configuration is corrected.
    let broken = Mapper::<Source, Target>::configure(|config| {
        config.constant("name", 1i64).unwrap();
    });
    assert!(broken.unwrap_err().is_configuration());

    let broken_again = Mapper::<Source, Target>::configure(|config| {
        config.constant("name", 1i64).unwrap();
    });
    assert!(broken_again.unwrap_err().is_configuration());

    let fixed = Mapper::<Source, Target>::configure(|config| {
        config.constant("name", "ok").unwrap();
    });
    assert!(fixed.is_ok());
}
