use super::*;
use crate::error::TriangulationError;
use crate::geom::{Edge, Point2D, Triangle};

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

fn square() -> Vec<Point2D> {
    vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
}

#[test]
fn single_triangle() {
    let pts = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)];
    let mut run = FrontRun::new(&pts, TriCfg::default()).unwrap();
    assert_eq!(run.phase(), Phase::Seeded);
    assert_eq!(run.front().len(), 1);
    let seed = run.front().first().unwrap();
    assert_eq!((seed.start, seed.end), (p(0.0, 4.0), p(0.0, 0.0)));

    let first = run.step().unwrap();
    assert_eq!(
        first,
        Step::Emitted(Triangle::new(p(0.0, 4.0), p(0.0, 0.0), p(4.0, 0.0)))
    );
    assert_eq!(run.phase(), Phase::Growing);
    // The seed edge was consumed by the triangle and left the frontier.
    assert!(!run.front().contains(&seed));
    assert!(run.front().iter().all(|e| e.contains(p(4.0, 0.0))));
    assert!(matches!(run.step().unwrap(), Step::Discarded(_)));
    assert!(matches!(run.step().unwrap(), Step::Discarded(_)));
    assert_eq!(run.phase(), Phase::Done);
    assert!(run.front().is_empty());
    assert_eq!(run.step().unwrap(), Step::Done);
    assert_eq!(
        run.stats(),
        RunStats {
            steps: 3,
            emitted: 1,
            discarded: 2
        }
    );
    let mesh = run.run_to_end().unwrap();
    assert_eq!(mesh.len(), 1);
    assert!(mesh.triangles()[0].same_vertices(&Triangle::new(pts[0], pts[1], pts[2])));
}

#[test]
fn unit_square_shares_one_diagonal() {
    let mesh = triangulate(&square()).unwrap();
    assert_eq!(
        mesh.triangles(),
        &[
            Triangle::new(p(0.0, 4.0), p(0.0, 0.0), p(4.0, 0.0)),
            Triangle::new(p(0.0, 4.0), p(4.0, 0.0), p(4.0, 4.0)),
        ]
    );
    let counts = mesh.edge_multiplicity();
    assert_eq!(counts.len(), 5);
    assert_eq!(counts[&Edge::new(p(4.0, 0.0), p(0.0, 4.0))], 2);
    let sq = square();
    for k in 0..4 {
        assert_eq!(counts[&Edge::new(sq[k], sq[(k + 1) % 4])], 1);
    }
}

#[test]
fn square_with_center_fans_into_four() {
    let mut pts = square();
    pts.push(p(2.0, 2.0));
    let mut run = FrontRun::new(&pts, TriCfg::default()).unwrap();
    while run.step().unwrap() != Step::Done {}
    assert_eq!(run.stats().emitted, 4);
    assert_eq!(run.stats().discarded, 3);
    let mesh = run.mesh();
    assert!(mesh.iter().all(|t| t.vertices().contains(&p(2.0, 2.0))));
    assert!(mesh.iter().all(|t| t.area2() > 0.0));
    let shared = mesh.edge_multiplicity().values().filter(|&&n| n == 2).count();
    assert_eq!(shared, 4);
}

#[test]
fn insufficient_points() {
    for n in 0..3 {
        let pts: Vec<Point2D> = (0..n).map(|i| p(i as f64, 0.0)).collect();
        assert_eq!(
            triangulate(&pts),
            Err(TriangulationError::InsufficientPoints { found: n })
        );
    }
}

#[test]
fn coincident_points_fail_hull() {
    let pts = [p(2.0, 3.0); 5];
    assert_eq!(
        triangulate(&pts),
        Err(TriangulationError::HullInitialization { hull_len: 1 })
    );
}

#[test]
fn non_finite_points_rejected() {
    let pts = [p(0.0, 0.0), p(1.0, f64::NAN), p(0.0, 1.0)];
    assert_eq!(
        triangulate(&pts),
        Err(TriangulationError::NonFiniteCoordinate { index: 1 })
    );
}

#[test]
fn collinear_points_close_without_triangles() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
    let mesh = triangulate(&pts).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn degenerate_only_candidate_discards_edge() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(0.5, 1e-7)];
    let run = FrontRun::new(&pts, TriCfg::default()).unwrap();
    let seed = run.front().first().unwrap();
    assert_eq!(score(seed, p(1.0, 0.0), &TriCfg::default()), Some(f64::INFINITY));
    assert_eq!(best_candidate(seed, &pts, &TriCfg::default()), None);
    assert!(run.run_to_end().unwrap().is_empty());
}

#[test]
fn score_prefers_circumcenter_behind_edge() {
    let cfg = TriCfg::default();
    let edge = Edge::new(p(0.0, 0.0), p(4.0, 0.0));
    // Obtuse apex: circumcenter falls below the edge.
    let flat = score(edge, p(2.0, 1.0), &cfg).unwrap();
    // Acute apex: circumcenter stays above the edge.
    let tall = score(edge, p(2.0, 3.0), &cfg).unwrap();
    assert!(flat < 0.0);
    assert!(tall > 0.0);
    assert_eq!(score(edge, p(2.0, -1.0), &cfg), None);
    assert_eq!(score(edge, p(6.0, 0.0), &cfg), None);
    let pts = [p(2.0, 3.0), p(2.0, 1.0), p(2.0, -1.0)];
    assert_eq!(best_candidate(edge, &pts, &cfg), Some(p(2.0, 1.0)));
}

#[test]
fn ties_go_to_first_in_input_order() {
    let cfg = TriCfg::default();
    let edge = Edge::new(p(0.0, 0.0), p(4.0, 0.0));
    // Mirror images across x = 2 share a circumcenter.
    let pts = [p(1.0, 3.0), p(3.0, 3.0)];
    assert_eq!(
        score(edge, pts[0], &cfg).unwrap(),
        score(edge, pts[1], &cfg).unwrap()
    );
    assert_eq!(best_candidate(edge, &pts, &cfg), Some(p(1.0, 3.0)));
    let swapped = [pts[1], pts[0]];
    assert_eq!(best_candidate(edge, &swapped, &cfg), Some(p(3.0, 3.0)));
}

#[test]
fn duplicate_points_are_tolerated() {
    let pts = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0), p(0.0, 0.0)];
    let mesh = triangulate(&pts).unwrap();
    assert_eq!(mesh.len(), 1);
}

#[test]
fn step_limit_stops_collinear_cycle() {
    // Exactly collinear integer points can make the front revisit covered area.
    let pts = [
        p(2.0, 0.0),
        p(2.0, 3.0),
        p(3.0, 0.0),
        p(4.0, 3.0),
        p(2.0, 1.0),
        p(3.0, 1.0),
        p(0.0, 0.0),
    ];
    let cfg = TriCfg {
        max_steps: Some(10_000),
        ..TriCfg::default()
    };
    let mut session = Triangulator::new(cfg);
    assert_eq!(session.cfg().max_steps, Some(10_000));
    assert_eq!(
        session.run(&pts).unwrap_err(),
        TriangulationError::StepLimitExceeded { steps: 10_000 }
    );
    assert!(session.mesh().is_empty());
}

#[test]
fn step_limit_does_not_affect_closing_runs() {
    let cfg = TriCfg {
        max_steps: Some(5),
        ..TriCfg::default()
    };
    let mesh = FrontRun::new(&square(), cfg).unwrap().run_to_end().unwrap();
    assert_eq!(mesh.len(), 2);
    let tight = TriCfg {
        max_steps: Some(4),
        ..TriCfg::default()
    };
    assert_eq!(
        FrontRun::new(&square(), tight).unwrap().run_to_end(),
        Err(TriangulationError::StepLimitExceeded { steps: 4 })
    );
}

#[test]
fn failed_run_preserves_committed_mesh() {
    let mut session = Triangulator::default();
    let committed = session.run(&square()).unwrap().clone();
    assert_eq!(committed.len(), 2);

    let err = session.run(&[p(0.0, 0.0), p(1.0, 1.0)]).unwrap_err();
    assert_eq!(err, TriangulationError::InsufficientPoints { found: 2 });
    assert_eq!(session.mesh(), &committed);

    let err = session.run(&[p(1.0, 1.0); 3]).unwrap_err();
    assert!(matches!(err, TriangulationError::HullInitialization { .. }));
    assert_eq!(session.mesh(), &committed);

    session.reset();
    assert!(session.mesh().is_empty());
}

#[test]
fn rerun_replaces_mesh_deterministically() {
    let mut pts = square();
    pts.extend([p(1.0, 3.0), p(2.5, 0.5), p(3.2, 2.2)]);
    let mut session = Triangulator::default();
    let first = session.run(&pts).unwrap().clone();
    let second = session.run(&pts).unwrap().clone();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}
