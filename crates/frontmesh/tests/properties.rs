//! Property tests over random point sets in general position.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash, Hasher};

use frontmesh::prelude::*;
use proptest::prelude::*;

fn cloud() -> impl Strategy<Value = Vec<Point2D>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..24)
        .prop_map(|v| v.into_iter().map(Point2D::from).collect::<Vec<_>>())
        .prop_filter("points must be distinct", |v: &Vec<Point2D>| {
            v.iter().collect::<HashSet<_>>().len() == v.len()
        })
}

fn capped() -> TriCfg {
    TriCfg {
        max_steps: Some(100_000),
        ..TriCfg::default()
    }
}

fn shoelace(poly: &[Point2D]) -> f64 {
    let n = poly.len();
    (0..n)
        .map(|k| {
            let (a, b) = (poly[k], poly[(k + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        / 2.0
}

fn hash_of<T: Hash>(state: &std::collections::hash_map::RandomState, v: &T) -> u64 {
    let mut h = state.build_hasher();
    v.hash(&mut h);
    h.finish()
}

proptest! {
    #[test]
    fn edge_identity_ignores_direction(ax in -1e3f64..1e3, ay in -1e3f64..1e3,
                                       bx in -1e3f64..1e3, by in -1e3f64..1e3) {
        let (a, b) = (Point2D::new(ax, ay), Point2D::new(bx, by));
        let state = std::collections::hash_map::RandomState::new();
        prop_assert_eq!(Edge::new(a, b), Edge::new(b, a));
        prop_assert_eq!(hash_of(&state, &Edge::new(a, b)), hash_of(&state, &Edge::new(b, a)));
    }

    #[test]
    fn frontier_closes_and_edges_are_shared_at_most_twice(pts in cloud()) {
        let seeded = FrontRun::new(&pts, capped());
        prop_assert!(seeded.is_ok(), "seeding failed: {:?}", seeded.err());
        let mut run = seeded.unwrap();
        loop {
            let step = run.step();
            prop_assert!(step.is_ok(), "run failed: {:?}", step);
            if step.unwrap() == Step::Done {
                break;
            }
        }
        prop_assert_eq!(run.phase(), Phase::Done);
        prop_assert!(run.front().is_empty());
        let counts = run.mesh().edge_multiplicity();
        prop_assert!(counts.values().all(|&n| n == 1 || n == 2));
        let stats = run.stats();
        prop_assert_eq!(stats.steps, stats.emitted + stats.discarded);
    }

    #[test]
    fn triangles_are_ccw_and_built_from_inputs(pts in cloud()) {
        let result = FrontRun::new(&pts, capped()).and_then(FrontRun::run_to_end);
        prop_assert!(result.is_ok(), "run failed: {:?}", result.err());
        let mesh = result.unwrap();
        let inputs: HashSet<Point2D> = pts.iter().copied().collect();
        for t in &mesh {
            prop_assert!(t.area2() > 0.0);
            prop_assert!(t.vertices().iter().all(|v| inputs.contains(v)));
        }
        let used: HashSet<Point2D> = mesh.iter().flat_map(|t| t.vertices()).collect();
        prop_assert_eq!(used.len(), inputs.len());
    }

    #[test]
    fn triangles_tile_the_hull(pts in cloud()) {
        let result = FrontRun::new(&pts, capped()).and_then(FrontRun::run_to_end);
        prop_assert!(result.is_ok(), "run failed: {:?}", result.err());
        let mesh = result.unwrap();
        let hull = convex_hull(&pts);
        let hull_area = shoelace(&hull).abs();
        let mesh_area: f64 = mesh.iter().map(|t| t.area2() / 2.0).sum();
        prop_assert!((hull_area - mesh_area).abs() <= 1e-6 * hull_area.max(1.0));
        // A full triangulation of n points with h on the hull has 2n - 2 - h triangles.
        prop_assert_eq!(mesh.len(), 2 * pts.len() - 2 - hull.len());
    }

    #[test]
    fn identical_input_gives_identical_output(pts in cloud()) {
        let mut session = Triangulator::new(capped());
        let first = session.run(&pts).cloned();
        prop_assert!(first.is_ok(), "run failed: {:?}", first);
        let second = session.run(&pts).cloned();
        prop_assert_eq!(first, second);
    }
}
