mod helpers;

use helpers::scenario_store;
use std::sync::Arc;
use zonelight_application::ports::RecordResolver;
use zonelight_domain::{RecordSource, RecordStore};
use zonelight_infrastructure::dns::StoreResolver;

fn resolver(store: RecordStore, ttl: u32) -> StoreResolver {
    StoreResolver::new(Arc::new(store), ttl)
}

#[test]
fn test_global_record_uses_default_ttl() {
    let resolver = resolver(scenario_store(), 300);

    let resolution = resolver.resolve("api.example.com").unwrap();

    assert_eq!(&*resolution.address, "10.0.0.5");
    assert_eq!(resolution.ttl, 300);
    assert_eq!(resolution.source, RecordSource::Global);
}

#[test]
fn test_zone_record_resolves_when_not_global() {
    let resolver = resolver(scenario_store(), 300);

    let resolution = resolver.resolve("db.example.com").unwrap();

    assert_eq!(&*resolution.address, "10.0.0.9");
    assert_eq!(resolution.ttl, 300);
    assert_eq!(resolution.source, RecordSource::Zone("example.com".into()));
}

#[test]
fn test_unknown_name_not_found() {
    let resolver = resolver(scenario_store(), 300);
    assert!(resolver.resolve("unknown.example.com").is_none());
    assert!(resolver.resolve("").is_none());
}

#[test]
fn test_global_takes_precedence_over_zone() {
    let store = RecordStore::builder()
        .global_record("www.example.com", "10.0.0.1")
        .zone_record("example.com", "www.example.com", "10.0.0.2")
        .build();
    let resolver = resolver(store, 60);

    let resolution = resolver.resolve("www.example.com").unwrap();

    assert_eq!(&*resolution.address, "10.0.0.1");
    assert_eq!(resolution.source, RecordSource::Global);
}

#[test]
fn test_zone_only_consulted_when_suffix_matches() {
    let store = RecordStore::builder()
        .zone_record("corp.internal", "printer.lan", "10.9.9.9")
        .build();
    let resolver = resolver(store, 60);

    assert!(resolver.resolve("printer.lan").is_none());
}

#[test]
fn test_zone_suffix_match_is_not_label_aware() {
    let store = RecordStore::builder()
        .zone_record("ample.com", "example.com", "10.1.1.1")
        .build();
    let resolver = resolver(store, 60);

    let resolution = resolver.resolve("example.com").unwrap();

    assert_eq!(&*resolution.address, "10.1.1.1");
    assert_eq!(resolution.source, RecordSource::Zone("ample.com".into()));
}

#[test]
fn test_zone_name_must_match_exactly_inside_zone() {
    let resolver = resolver(scenario_store(), 300);
    assert!(resolver.resolve("x.db.example.com").is_none());
    assert!(resolver.resolve("DB.example.com").is_none());
}

#[test]
fn test_overlapping_zones_resolve_from_whichever_holds_the_name() {
    let store = RecordStore::builder()
        .zone_record("example.com", "a.example.com", "10.0.0.1")
        .zone_record("b.example.com", "host.b.example.com", "10.0.0.2")
        .build();
    let resolver = resolver(store, 60);

    assert_eq!(
        &*resolver.resolve("host.b.example.com").unwrap().address,
        "10.0.0.2"
    );
    assert_eq!(&*resolver.resolve("a.example.com").unwrap().address, "10.0.0.1");
}

#[test]
fn test_concurrent_resolution() {
    let resolver = Arc::new(resolver(scenario_store(), 300));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                let name = if i % 2 == 0 { "api.example.com" } else { "db.example.com" };
                (0..1000).all(|_| resolver.resolve(name).is_some())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
