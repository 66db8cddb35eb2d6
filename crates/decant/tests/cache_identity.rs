use decant::{CachedMappingCompiler, Member, MemberMapping, MemberMappingCollection, Type};

use std::thread;

fn collection() -> MemberMappingCollection {
    MemberMappingCollection::new(vec![
        MemberMapping::copy(
            Member::column("id", 0, Type::I64),
            Member::property("id", 0, Type::I64),
        ),
        MemberMapping::copy(
            Member::column("name", 1, Type::String),
            Member::property("name", 1, Type::String),
        ),
    ])
}

#[test]
fn test_concurrent_compiles_publish_one_entry() {
    let cache = CachedMappingCompiler::new();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                // Each thread resolves its own structurally-equal key.
                let compiled = cache.compile(&collection()).unwrap();
                assert_eq!(compiled.len(), 2);
            });
        }
    });

    assert_eq!(cache.len(), 1);
}

#[test]
fn test_distinct_shapes_get_distinct_entries() {
    let cache = CachedMappingCompiler::new();

    cache.compile(&collection()).unwrap();

    let other = MemberMappingCollection::new(vec![MemberMapping::copy(
        Member::column("id", 0, Type::I64),
        Member::property("id", 0, Type::I64),
    )]);
    cache.compile(&other).unwrap();

    assert_eq!(cache.len(), 2);
}

#[test]
fn test_warm_cache_never_regrows() {
    let cache = CachedMappingCompiler::new();

    cache.compile(&collection()).unwrap();
    for _ in 0..100 {
        cache.compile(&collection()).unwrap();
    }

    // After warm-up every call is a lookup; no member resolution, no new
    // program.
    assert_eq!(cache.len(), 1);
}
