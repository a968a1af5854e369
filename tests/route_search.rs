use assert_approx_eq::assert_approx_eq;
use marshrut::prelude::*;

/// Four stops, a loop route and a back-and-forth feeder, with the
/// measured distances of the reference data set.
fn biryulyovo_model() -> TransitModel {
    let mut model = TransitModel::new();
    model
        .add_stop(
            "Biryulyovo Zapadnoye",
            55.574371,
            37.6517,
            &[("Biryulyovo Tovarnaya", 2600)],
        )
        .unwrap();
    model
        .add_stop(
            "Universam",
            55.587655,
            37.645687,
            &[
                ("Biryulyovo Tovarnaya", 1380),
                ("Biryulyovo Zapadnoye", 2500),
                ("Prazhskaya", 4650),
            ],
        )
        .unwrap();
    model
        .add_stop(
            "Biryulyovo Tovarnaya",
            55.592028,
            37.653656,
            &[("Universam", 890)],
        )
        .unwrap();
    model.add_stop("Prazhskaya", 55.611717, 37.603938, &[]).unwrap();

    model
        .add_route(
            "297",
            [
                "Biryulyovo Zapadnoye",
                "Biryulyovo Tovarnaya",
                "Universam",
                "Biryulyovo Zapadnoye",
            ]
            .map(String::from)
            .to_vec(),
            true,
        )
        .unwrap();
    model
        .add_route(
            "635",
            ["Biryulyovo Tovarnaya", "Universam", "Prazhskaya"]
                .map(String::from)
                .to_vec(),
            false,
        )
        .unwrap();

    model.build_graph(RoutingConfig::from_kmh(6, 40.0)).unwrap();
    model
}

#[test]
fn direct_ride_skips_intermediate_stops() {
    let model = biryulyovo_model();
    let itinerary = model
        .find_route("Biryulyovo Zapadnoye", "Universam")
        .unwrap()
        .unwrap();

    assert_approx_eq!(itinerary.total_time, 11.235, 1e-9);
    assert_eq!(itinerary.legs.len(), 2);
    assert_eq!(
        itinerary.legs[0],
        ItineraryLeg::Wait {
            stop: "Biryulyovo Zapadnoye".to_string(),
            time: 6.0,
        }
    );
    match &itinerary.legs[1] {
        ItineraryLeg::Ride {
            route,
            span_count,
            time,
        } => {
            assert_eq!(route, "297");
            assert_eq!(*span_count, 2);
            assert_approx_eq!(*time, 5.235, 1e-9);
        }
        other => panic!("expected a ride, got {other:?}"),
    }
}

#[test]
fn loop_ride_back_to_the_first_stop() {
    let model = biryulyovo_model();
    let itinerary = model
        .find_route("Universam", "Biryulyovo Zapadnoye")
        .unwrap()
        .unwrap();

    assert_approx_eq!(itinerary.total_time, 9.75, 1e-9);
    assert_eq!(itinerary.legs.len(), 2);
    match &itinerary.legs[1] {
        ItineraryLeg::Ride {
            route,
            span_count,
            time,
        } => {
            assert_eq!(route, "297");
            assert_eq!(*span_count, 1);
            assert_approx_eq!(*time, 3.75, 1e-9);
        }
        other => panic!("expected a ride, got {other:?}"),
    }
}

#[test]
fn transfer_between_two_routes() {
    let model = biryulyovo_model();
    let itinerary = model
        .find_route("Biryulyovo Zapadnoye", "Prazhskaya")
        .unwrap()
        .unwrap();

    // Two same-cost transfer points exist; either way the trip is one
    // ride on 297, a second wait, and a ride on 635.
    assert_approx_eq!(itinerary.total_time, 24.21, 1e-9);
    assert_eq!(itinerary.legs.len(), 4);
    match (&itinerary.legs[0], &itinerary.legs[1], &itinerary.legs[2], &itinerary.legs[3]) {
        (
            ItineraryLeg::Wait { stop: first_wait, time: first_time },
            ItineraryLeg::Ride { route: first_ride, .. },
            ItineraryLeg::Wait { time: second_time, .. },
            ItineraryLeg::Ride { route: second_ride, .. },
        ) => {
            assert_eq!(first_wait, "Biryulyovo Zapadnoye");
            assert_eq!(*first_time, 6.0);
            assert_eq!(*second_time, 6.0);
            assert_eq!(first_ride, "297");
            assert_eq!(second_ride, "635");
        }
        legs => panic!("expected wait/ride/wait/ride, got {legs:?}"),
    }
}

#[test]
fn same_stop_search_is_an_empty_itinerary() {
    let model = biryulyovo_model();
    let itinerary = model
        .find_route("Universam", "Universam")
        .unwrap()
        .unwrap();
    assert!(itinerary.legs.is_empty());
    assert_eq!(itinerary.total_time, 0.0);
}

#[test]
fn registered_but_disconnected_stop_is_not_found() {
    let mut model = TransitModel::new();
    model.add_stop("a", 55.0, 37.0, &[("b", 1000)]).unwrap();
    model.add_stop("b", 55.1, 37.1, &[]).unwrap();
    model.add_stop("island", 55.2, 37.2, &[]).unwrap();
    model
        .add_route("1", ["a", "b"].map(String::from).to_vec(), false)
        .unwrap();
    model.build_graph(RoutingConfig::from_kmh(6, 40.0)).unwrap();

    assert!(model.find_route("a", "island").unwrap().is_none());
}

#[test]
fn unknown_stop_is_a_lookup_error() {
    let model = biryulyovo_model();
    assert!(matches!(
        model.find_route("Universam", "Vnukovo"),
        Err(Error::UnknownStop(_))
    ));
    assert!(matches!(
        model.find_route("Vnukovo", "Universam"),
        Err(Error::UnknownStop(_))
    ));
}

#[test]
fn asymmetric_distance_override_changes_one_direction_only() {
    let mut model = TransitModel::new();
    model.add_stop("a", 55.0, 37.0, &[("b", 1000)]).unwrap();
    // Explicit entry overrides the symmetric default recorded above.
    model.add_stop("b", 55.1, 37.1, &[("a", 900)]).unwrap();
    model
        .add_route("1", ["a", "b"].map(String::from).to_vec(), false)
        .unwrap();
    model.build_graph(RoutingConfig { wait_time: 5, velocity: 100.0 }).unwrap();

    let there = model.find_route("a", "b").unwrap().unwrap();
    assert_approx_eq!(there.total_time, 15.0, 1e-9);
    let back = model.find_route("b", "a").unwrap().unwrap();
    assert_approx_eq!(back.total_time, 14.0, 1e-9);
}

#[test]
fn no_single_ride_continues_through_the_turnaround() {
    // On a back-and-forth line a vehicle stops at the turn-around; a
    // trip through it must reboard, paying the wait a second time.
    let mut model = TransitModel::new();
    model.add_stop("a", 55.0, 37.0, &[("b", 1000)]).unwrap();
    model.add_stop("b", 55.1, 37.1, &[]).unwrap();
    model
        .add_route("1", ["a", "b"].map(String::from).to_vec(), false)
        .unwrap();
    model.build_graph(RoutingConfig { wait_time: 5, velocity: 100.0 }).unwrap();

    let itinerary = model.find_route("a", "a").unwrap().unwrap();
    // The degenerate empty path, not a ride out and back.
    assert!(itinerary.legs.is_empty());
    assert_eq!(itinerary.total_time, 0.0);
}

#[test]
fn turnaround_stop_revisited_mid_route() {
    // Route 1 runs a-b-a-c and back; spans must follow the shortest
    // forward hop even though "a" appears four times on the traversal.
    let mut model = TransitModel::new();
    model.add_stop("a", 55.0, 37.0, &[("b", 100), ("c", 300)]).unwrap();
    model.add_stop("b", 55.1, 37.1, &[]).unwrap();
    model.add_stop("c", 55.2, 37.2, &[("a", 400)]).unwrap();
    model
        .add_route("1", ["a", "b", "a", "c"].map(String::from).to_vec(), false)
        .unwrap();
    model.build_graph(RoutingConfig { wait_time: 1, velocity: 100.0 }).unwrap();

    let itinerary = model.find_route("b", "c").unwrap().unwrap();
    assert_approx_eq!(itinerary.total_time, 5.0, 1e-9);
    assert_eq!(
        itinerary.legs[1],
        ItineraryLeg::Ride {
            route: "1".to_string(),
            span_count: 2,
            time: 4.0,
        }
    );

    let itinerary = model.find_route("c", "b").unwrap().unwrap();
    assert_approx_eq!(itinerary.total_time, 6.0, 1e-9);
    assert_eq!(
        itinerary.legs[1],
        ItineraryLeg::Ride {
            route: "1".to_string(),
            span_count: 2,
            time: 5.0,
        }
    );
}

#[test]
fn faster_of_two_parallel_routes_wins_and_is_named() {
    let mut model = TransitModel::new();
    model
        .add_stop("a", 55.0, 37.0, &[("b", 1000), ("c", 2000)])
        .unwrap();
    model.add_stop("b", 55.1, 37.1, &[]).unwrap();
    model.add_stop("c", 55.05, 37.05, &[("b", 2000)]).unwrap();
    model
        .add_route("express", ["a", "b"].map(String::from).to_vec(), true)
        .unwrap();
    model
        .add_route("local", ["a", "c", "b"].map(String::from).to_vec(), true)
        .unwrap();
    model.build_graph(RoutingConfig { wait_time: 5, velocity: 100.0 }).unwrap();

    let itinerary = model.find_route("a", "b").unwrap().unwrap();
    assert_approx_eq!(itinerary.total_time, 15.0, 1e-9);
    assert_eq!(
        itinerary.legs[1],
        ItineraryLeg::Ride {
            route: "express".to_string(),
            span_count: 1,
            time: 10.0,
        }
    );
}
