use decant::{Mapper, MappingMode, Reflect};

use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, Reflect)]
struct Source {
    id: i64,
    name: String,
    extra: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Reflect)]
struct Target {
    id: i64,
    name: String,
}

fn source() -> Source {
    Source {
        id: 1,
        name: "x".to_string(),
        extra: true,
    }
}

#[test]
fn test_maps_matching_members() {
    let mapper = Mapper::<Source, Target>::new().unwrap();
    let target = mapper.map(&source()).unwrap();

    assert_eq!(
        target,
        Target {
            id: 1,
            name: "x".to_string(),
        }
    );
}

#[test]
fn test_map_into_overwrites_matched_members_only() {
    #[derive(Debug, Default, Reflect)]
    struct Annotated {
        id: i64,
        nickname: String,
    }

    let mapper = Mapper::<Source, Annotated>::new().unwrap();
    let existing = Annotated {
        id: 0,
        nickname: "keep".to_string(),
    };

    let target = mapper.map_into(&source(), existing).unwrap();
    assert_eq!(target.id, 1);
    assert_eq!(target.nickname, "keep");
}

#[test]
fn test_round_trip_idempotence() {
    let mapper = Mapper::<Source, Target>::new().unwrap();

    let first = mapper.map(&source()).unwrap();

    let second_source = Source {
        id: first.id,
        name: first.name.clone(),
        extra: false,
    };
    let second = mapper.map(&second_source).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_all_target_members_fails_on_missing_source() {
    #[derive(Debug, Default, Reflect)]
    struct Wide {
        id: i64,
        missing: i32,
    }

    let err = Mapper::<Source, Wide>::configure(|config| {
        config.mode(MappingMode::AllTargetMembers);
    })
    .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_default_comparer_is_case_sensitive() {
    #[allow(non_snake_case)]
    #[derive(Debug, Default, Reflect)]
    struct UpperSource {
        Id: i64,
    }

    #[derive(Debug, Default, Reflect)]
    struct LowerTarget {
        id: i64,
    }

    let mapper = Mapper::<UpperSource, LowerTarget>::new().unwrap();
    let target = mapper.map(&UpperSource { Id: 5 }).unwrap();

    // `Id` does not match `id` under the ordinal default.
    assert_eq!(target.id, 0);
}

#[test]
fn test_ignored_source_member_leaves_target_untouched() {
    let mapper = Mapper::<Source, Target>::configure(|config| {
        config.ignore("name").unwrap();
    })
    .unwrap();

    let target = mapper.map(&source()).unwrap();
    assert_eq!(target.id, 1);
    assert_eq!(target.name, "");
}

#[test]
fn test_repeated_configuration_resolves_equal_collections() {
    let a = Mapper::<Source, Target>::new().unwrap();
    let b = Mapper::<Source, Target>::new().unwrap();

    assert_eq!(a.mappings(), b.mappings());
}
