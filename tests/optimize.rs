use std::time::Duration;

use u_tour::distance::{build_matrix, haversine_meters};
use u_tour::models::{Coordinate, OptimizationRequest, RouteSummary};
use u_tour::solver::{solve, SolverConfig};
use u_tour::{optimize, optimize_route, TourError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("valid coordinate")
}

fn assert_valid_route(route: &[usize], n: usize) {
    assert_eq!(route.len(), n + 1);
    assert_eq!(route[0], 0);
    assert_eq!(route[n], 0);
    let mut seen = route[..n].to_vec();
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());
}

/// Sum of quantized haversine meters along `route`.
fn route_meters(points: &[Coordinate], route: &[usize]) -> i64 {
    route
        .windows(2)
        .map(|w| haversine_meters(&points[w[0]], &points[w[1]]).expect("finite"))
        .sum()
}

/// A deterministic scatter of points around Seoul.
fn scatter(n: usize) -> Vec<Coordinate> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            coord(
                37.5 + 0.05 * (t * 1.7).sin() + 0.003 * t,
                127.0 + 0.05 * (t * 2.3).cos() - 0.002 * t,
            )
        })
        .collect()
}

#[test]
fn test_two_points() {
    init_logger();
    let points = vec![coord(37.5665, 126.9780), coord(35.1796, 129.0756)];
    let summary = optimize_route(&points, &SolverConfig::default()).expect("solvable");
    assert_eq!(summary.route, vec![0, 1, 0]);
    let leg = haversine_meters(&points[0], &points[1]).expect("finite");
    assert!((summary.distance - 2.0 * leg as f64 / 1000.0).abs() < 1e-9);
}

#[test]
fn test_unit_square_is_perimeter() {
    init_logger();
    // Listed so the input order crosses the diagonal.
    let points = vec![
        coord(0.0, 0.0),
        coord(0.01, 0.01),
        coord(0.0, 0.01),
        coord(0.01, 0.0),
    ];
    let summary = optimize_route(&points, &SolverConfig::default()).expect("solvable");
    assert_valid_route(&summary.route, 4);

    let matrix = build_matrix(&points).expect("finite");
    let side = matrix.get(0, 2);
    let diagonal = matrix.get(0, 1);
    assert!(diagonal > side);
    assert!((summary.distance - route_meters(&points, &summary.route) as f64 / 1000.0).abs() < 1e-9);
    assert!((summary.distance - 4.444).abs() < 1e-9);
}

#[test]
fn test_identical_points() {
    init_logger();
    let points = vec![coord(10.0, 20.0); 3];
    let summary = optimize_route(&points, &SolverConfig::default()).expect("solvable");
    assert_valid_route(&summary.route, 3);
    assert_eq!(summary.distance, 0.0);
}

#[test]
fn test_deterministic() {
    init_logger();
    let points = scatter(9);
    let config = SolverConfig::default()
        .with_time_limit(Duration::from_secs(60))
        .with_max_stall_rounds(200);
    let a = optimize_route(&points, &config).expect("solvable");
    let b = optimize_route(&points, &config).expect("solvable");
    assert_eq!(a, b);
}

#[test]
fn test_distance_matches_route() {
    init_logger();
    let points = scatter(15);
    let config = SolverConfig::default().with_time_limit(Duration::from_millis(500));
    let summary = optimize_route(&points, &config).expect("solvable");
    assert_valid_route(&summary.route, 15);
    let meters = route_meters(&points, &summary.route);
    assert!((summary.distance - meters as f64 / 1000.0).abs() < 1e-9);
}

#[test]
fn test_tiny_budget_still_feasible() {
    init_logger();
    let points = scatter(40);
    let config = SolverConfig::default().with_time_limit(Duration::from_millis(50));
    let summary = optimize_route(&points, &config).expect("solvable");
    assert_valid_route(&summary.route, 40);
    assert!(summary.distance > 0.0);
}

#[test]
fn test_budget_holds_on_large_instance() {
    init_logger();
    let points = scatter(400);
    let matrix = build_matrix(&points).expect("finite");
    let config = SolverConfig::default().with_time_limit(Duration::from_millis(50));
    let solution = solve(&matrix, &config).expect("solvable");

    assert_valid_route(solution.route(), 400);
    assert!(solution.cost() <= solution.stats().initial_cost);
    assert!(
        solution.stats().elapsed < Duration::from_millis(250),
        "took {:?}",
        solution.stats().elapsed
    );
}

#[test]
fn test_too_few_points() {
    let err = optimize_route(&[coord(0.0, 0.0)], &SolverConfig::default())
        .expect_err("one point is not a tour");
    assert!(matches!(err, TourError::InvalidInput(_)));
    assert!(err.is_client_error());
    assert!(optimize_route(&[], &SolverConfig::default()).is_err());
}

#[test]
fn test_out_of_range_from_json() {
    let request: OptimizationRequest = serde_json::from_str(
        r#"{"locations": [{"lat": 0.0, "lng": 0.0}, {"lat": 95.0, "lng": 10.0}]}"#,
    )
    .expect("well-formed json");
    let err = optimize(&request, &SolverConfig::default()).expect_err("latitude out of range");
    assert!(matches!(err, TourError::InvalidInput(_)));
}

#[test]
fn test_json_round_trip_shape() {
    init_logger();
    let request: OptimizationRequest = serde_json::from_str(
        r#"{"locations": [
            {"lat": 40.7128, "lng": -74.0060},
            {"lat": 40.7306, "lng": -73.9352},
            {"lat": 40.6782, "lng": -73.9442}
        ]}"#,
    )
    .expect("well-formed json");
    let summary = optimize(&request, &SolverConfig::default()).expect("solvable");

    let json = serde_json::to_value(&summary).expect("serializable");
    assert_eq!(json["route"].as_array().map(Vec::len), Some(4));
    assert!(json["distance"].as_f64().is_some());

    let back: RouteSummary = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, summary);
}

#[test]
fn test_config_from_json() {
    let config: SolverConfig =
        serde_json::from_str(r#"{"time_limit": 0.25, "max_stall_rounds": 10}"#)
            .expect("valid config");
    assert_eq!(config.time_limit, Duration::from_millis(250));
    assert_eq!(config.max_stall_rounds, 10);
    assert_eq!(config.depot, 0);
    assert_eq!(config.lambda_coefficient, 0.1);

    assert!(serde_json::from_str::<SolverConfig>(r#"{"time_limit": -1.0}"#).is_err());
}

#[test]
fn test_parallel_solves_are_independent() {
    init_logger();
    let points = scatter(12);
    let config = SolverConfig::default()
        .with_time_limit(Duration::from_secs(60))
        .with_max_stall_rounds(100);
    let expected = optimize_route(&points, &config).expect("solvable");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| optimize_route(&points, &config).expect("solvable")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("no panic"), expected);
        }
    });
}
