use std::collections::{BTreeMap, HashSet};

use find_events::{
    generate::{MAX_TICKET_PRICE, MIN_TICKET_PRICE},
    random_catalog, read_catalog, Coord, Error, Event, EventCatalog, EventId, Grid,
};
use rand::{rngs::StdRng, SeedableRng};

fn sorted_events(catalog: &EventCatalog) -> BTreeMap<Coord, Event> {
    catalog
        .iter()
        .map(|(coord, event)| (*coord, event.clone()))
        .collect()
}

#[test]
fn second_event_on_same_coordinate_is_rejected() {
    let mut catalog = EventCatalog::new();
    catalog
        .insert(Coord::new(1, 1), Event::new(EventId(0), vec![5.0]))
        .unwrap();
    let result = catalog.insert(Coord::new(1, 1), Event::new(EventId(1), vec![6.0]));

    assert!(matches!(
        result,
        Err(Error::DuplicateEvent(coord, EventId(1))) if coord == Coord::new(1, 1)
    ));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(&Coord::new(1, 1)).map(Event::id), Some(EventId(0)));
}

#[test]
fn read_catalog_parses_events_and_skips_comments() {
    let catalog = read_catalog("inputs/scattered.txt").unwrap();
    assert_eq!(catalog.len(), 7);

    let event = catalog.get(&Coord::new(3, 0)).unwrap();
    assert_eq!(event.id(), EventId(4));
    assert_eq!(event.tickets(), &[120.00, 80.25, 99.99]);
    assert_eq!(catalog.get(&Coord::new(0, -4)).unwrap().tickets(), &[] as &[f64]);

    assert!(read_catalog("inputs/empty.txt").unwrap().is_empty());
}

#[test]
fn read_catalog_rejects_bad_input() {
    for path in [
        "inputs/duplicate.txt",
        "inputs/malformed.txt",
        "inputs/negative_price.txt",
        "inputs/not_exist.txt",
    ] {
        assert!(read_catalog(path).is_err(), "{} should fail", path);
    }
}

#[test]
fn read_catalog_reports_failing_line() {
    let err = read_catalog("inputs/malformed.txt").unwrap_err();
    assert!(format!("{:#}", err).contains("line 2"));
}

#[test]
fn random_catalog_is_reproducible_from_seed() {
    let grid = Grid::new(10);
    let first = random_catalog(&grid, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = random_catalog(&grid, &mut StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(sorted_events(&first), sorted_events(&second));
}

#[test]
fn random_catalog_stays_within_limits() {
    for bound in [0u16, 1, 3, 10] {
        let grid = Grid::new(bound);
        for seed in 0..20 {
            let catalog = random_catalog(&grid, &mut StdRng::seed_from_u64(seed)).unwrap();
            let event_n = catalog.len();
            assert!((1..=grid.vertex_n()).contains(&event_n));

            let ids = catalog
                .iter()
                .map(|(_, event)| event.id().0)
                .collect::<HashSet<_>>();
            assert_eq!(ids, (0..).take(event_n).collect::<HashSet<u32>>());

            for (coord, event) in catalog.iter() {
                assert!(grid.contains(coord));
                assert!(event.tickets().len() <= event_n);
                assert!(event
                    .tickets()
                    .iter()
                    .all(|price| (MIN_TICKET_PRICE..MAX_TICKET_PRICE).contains(price)));
            }
        }
    }
}
