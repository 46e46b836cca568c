//! End-to-end routing scenarios

use iceberg_nav::io::{OutputFormat, read_problem, write_route};
use iceberg_nav::{Obstacle, Point, Problem, RouteError, SolveOptions, get_shortest_route};
use std::io::Cursor;

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn poly(points: &[(i64, i64)]) -> Obstacle {
    points.iter().copied().map(Point::from).collect()
}

fn route(start: Point, end: Point, obstacles: &[Obstacle]) -> Vec<Point> {
    get_shortest_route(start, end, obstacles)
        .unwrap()
        .points()
        .to_vec()
}

fn staggered() -> Vec<Obstacle> {
    vec![
        poly(&[(4, 1), (8, 1), (8, 2), (4, 2)]),
        poly(&[(6, 3), (6, 4), (2, 4), (2, 3)]),
    ]
}

#[test]
fn test_no_icebergs() {
    assert_eq!(route(p(4, 4), p(12, 80), &[]), vec![p(4, 4), p(12, 80)]);
}

#[test]
fn test_irrelevant_icebergs() {
    let icebergs = vec![
        poly(&[(0, 0), (1, 1), (0, 2)]),
        poly(&[(11, 20), (15, 50), (15, 20)]),
    ];
    assert_eq!(
        route(p(4, 4), p(12, 80), &icebergs),
        vec![p(4, 4), p(12, 80)]
    );
}

#[test]
fn test_route_on_iceberg_side() {
    let icebergs = vec![poly(&[(4, 7), (4, 8), (100, 8), (100, 7)])];
    assert_eq!(
        route(p(4, 4), p(12, 80), &icebergs),
        vec![p(4, 4), p(4, 8), p(12, 80)]
    );
}

#[test]
fn test_route_on_iceberg_point() {
    let icebergs = vec![poly(&[(1, 2), (1, 3), (5, 2)])];
    assert_eq!(
        route(p(0, 0), p(5, 5), &icebergs),
        vec![p(0, 0), p(1, 3), p(5, 5)]
    );
}

#[test]
fn test_complex_route() {
    assert_eq!(
        route(p(5, 0), p(5, 5), &staggered()),
        vec![p(5, 0), p(4, 1), p(4, 2), p(6, 3), p(6, 4), p(5, 5)]
    );
}

#[test]
fn test_blocked_route_is_longer_than_direct() {
    let (start, end) = (p(0, 0), p(5, 5));
    let icebergs = vec![poly(&[(1, 2), (1, 3), (5, 2)])];
    let found = get_shortest_route(start, end, &icebergs).unwrap();
    assert!(found.length() > start.distance(&end));
}

#[test]
fn test_deterministic() {
    let first = get_shortest_route(p(5, 0), p(5, 5), &staggered()).unwrap();
    let second = get_shortest_route(p(5, 0), p(5, 5), &staggered()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_swapping_endpoints_reverses_route() {
    let cases = [
        (p(5, 0), p(5, 5), staggered()),
        (p(0, 0), p(5, 5), vec![poly(&[(1, 2), (1, 3), (5, 2)])]),
        (
            p(4, 4),
            p(12, 80),
            vec![poly(&[(4, 7), (4, 8), (100, 8), (100, 7)])],
        ),
    ];
    for (start, end, icebergs) in cases {
        let forward = get_shortest_route(start, end, &icebergs).unwrap();
        let backward = get_shortest_route(end, start, &icebergs).unwrap();
        assert_eq!(backward, forward.reversed());
        assert!((backward.length() - forward.length()).abs() < 1e-9);
    }
}

#[test]
fn test_waypoints_are_obstacle_vertices() {
    let icebergs = staggered();
    let (start, end) = (p(5, 0), p(5, 5));
    let found = get_shortest_route(start, end, &icebergs).unwrap();

    assert_eq!(found.points().first(), Some(&start));
    assert_eq!(found.points().last(), Some(&end));
    for point in &found.points()[1..found.points().len() - 1] {
        assert!(icebergs.iter().any(|o| o.has_vertex(point)));
    }
}

#[test]
fn test_parallel_build_gives_same_route() {
    let problem = Problem::new(p(5, 0), p(5, 5), staggered());
    let serial = problem.solve(&SolveOptions::default()).unwrap();
    let parallel = problem
        .solve(&SolveOptions {
            parallel: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn test_shared_edge_between_icebergs() {
    // two squares glued along x = 2, crossed from left to right
    let icebergs = vec![
        poly(&[(0, 0), (2, 0), (2, 2), (0, 2)]),
        poly(&[(2, 0), (4, 0), (4, 2), (2, 2)]),
    ];
    let found = get_shortest_route(p(-1, 1), p(5, 1), &icebergs).unwrap();

    // around the top or the bottom, skipping the shared corner
    assert_eq!(found.points().len(), 4);
    assert!((found.length() - (4.0 + 2.0 * 2f64.sqrt())).abs() < 1e-9);
}

#[test]
fn test_no_route_when_start_enclosed() {
    let icebergs = vec![poly(&[(0, 0), (10, 0), (10, 10), (0, 10)])];
    assert_eq!(
        get_shortest_route(p(5, 5), p(20, 20), &icebergs),
        Err(RouteError::NoRouteFound {
            start: p(5, 5),
            end: p(20, 20)
        })
    );
}

#[test]
fn test_input_parsing() {
    let input = "2\n1,2 1,3 5,2\n10,20 10,30 50,20\n0,0\n100,100\n";
    let problem = read_problem(Cursor::new(input)).unwrap();
    assert_eq!(
        problem,
        Problem::new(
            p(0, 0),
            p(100, 100),
            vec![
                poly(&[(1, 2), (1, 3), (5, 2)]),
                poly(&[(10, 20), (10, 30), (50, 20)]),
            ],
        )
    );
}

#[test]
fn test_output_writing() {
    let mut out = Vec::new();
    let found = iceberg_nav::Route::new(vec![p(1, 2), p(1, 3), p(5, 2)]);
    write_route(&mut out, &found, OutputFormat::Text).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1,2 1,3 5,2");
}
