use bataille_navale::{Coordinate, Orientation, Ship, ShipKind, ShotOutcome, SHIP_CATALOGUE};

fn c(text: &str) -> Coordinate {
    text.parse().unwrap()
}

#[test]
fn catalogue_names_and_sizes() {
    let sizes: Vec<usize> = SHIP_CATALOGUE.iter().map(|kind| kind.size()).collect();
    assert_eq!(sizes, vec![5, 4, 3, 3, 2]);
    for kind in SHIP_CATALOGUE {
        assert_eq!(ShipKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ShipKind::from_name("submarine"), None);
}

#[test]
fn hit_and_sink_lifecycle() {
    let mut ship = Ship::new(
        ShipKind::TorpedoBoat,
        vec![c("A1"), c("A2")],
        Orientation::Horizontal,
    );
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());

    assert_eq!(ship.hit(), ShotOutcome::Hit);
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_sunk());

    assert_eq!(ship.hit(), ShotOutcome::Sunk);
    assert_eq!(ship.hits(), 2);
    assert!(ship.is_sunk());
    // The record persists after sinking.
    assert_eq!(ship.coordinates(), &[c("A1"), c("A2")]);
}

#[test]
fn occupies_is_a_membership_test() {
    let ship = Ship::new(
        ShipKind::Destroyer1,
        vec![c("B3"), c("C3"), c("D3")],
        Orientation::Vertical,
    );
    assert!(ship.occupies(c("B3")));
    assert!(ship.occupies(c("D3")));
    assert!(!ship.occupies(c("E3")));
    assert!(!ship.occupies(c("B4")));
}
