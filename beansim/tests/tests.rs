use beansim::simulation::repulsion::accumulate_repulsion;
use beansim::geometry::circle::point_in_disk;
use beansim::boundary::arcs::find_adjacent_pairs;
use beansim::{
    circle_intersection_points, generate_bean_blob, magnitude, select_largest, sub, svg_path_data,
    ArcState, BoundaryExtractor, ClusterRule, Engine, NVec3, Parameters, Particle, Scenario,
    SceneConfig, ScenarioConfig, SimState, Simulator, System,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{PI, TAU};
use std::path::PathBuf;

/// Beans resting on the floor at the given planar positions
pub fn resting(points: &[(f64, f64)]) -> Vec<Particle> {
    points
        .iter()
        .map(|&(x, y)| Particle::at_rest(NVec3::new(x, y, 5.0)))
        .collect()
}

/// Three beans in a row, 15 apart: each outline circle (r = 10) crosses only
/// its immediate neighbors
pub fn chain() -> Vec<NVec3> {
    vec![
        NVec3::new(0.0, 0.0, 5.0),
        NVec3::new(15.0, 0.0, 5.0),
        NVec3::new(30.0, 0.0, 5.0),
    ]
}

pub fn load_scenario(name: &str) -> ScenarioConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name);
    let text = std::fs::read_to_string(&path).expect("scenario file");
    serde_yaml::from_str(&text).expect("scenario yaml")
}

// ==================================================================================
// Geometry tests
// ==================================================================================

#[test]
fn intersection_points_lie_on_both_circles() {
    let a = NVec3::new(25.0, 25.0, 0.0);
    let b = NVec3::new(40.0, 35.0, 0.0);

    let (p, q) = circle_intersection_points(&a, &b, 10.0).unwrap();

    for point in [p, q] {
        assert!((magnitude(&sub(&point, &a)) - 10.0).abs() < 1e-9);
        assert!((magnitude(&sub(&point, &b)) - 10.0).abs() < 1e-9);
    }
}

#[test]
fn intersection_is_symmetric() {
    let a = NVec3::new(25.0, 25.0, 0.0);
    let b = NVec3::new(40.0, 35.0, 0.0);

    let (p1, q1) = circle_intersection_points(&a, &b, 10.0).unwrap();
    let (p2, q2) = circle_intersection_points(&b, &a, 10.0).unwrap();

    let same = |x: NVec3, y: NVec3| (x - y).norm() < 1e-9;
    assert!((same(p1, p2) && same(q1, q2)) || (same(p1, q2) && same(q1, p2)));
}

#[test]
fn adjacency_excludes_exact_contact() {
    let touching = [NVec3::new(0.0, 0.0, 0.0), NVec3::new(20.0, 0.0, 0.0)];
    assert!(find_adjacent_pairs(&touching, 10.0).is_empty());

    let eps = 1e-7;
    let crossing = [NVec3::new(0.0, 0.0, 0.0), NVec3::new(0.0, 20.0 - eps, 0.0)];
    assert_eq!(find_adjacent_pairs(&crossing, 10.0).len(), 1);
}

// ==================================================================================
// Simulator tests
// ==================================================================================

#[test]
fn lone_beans_settle_exactly_on_the_floor() {
    let params = Parameters::default();
    let particles = vec![
        Particle::at_rest(NVec3::new(0.0, 0.0, 80.0)),
        Particle::new(NVec3::new(500.0, 0.0, 33.3), NVec3::new(495.0, 3.0, 30.0)),
        Particle::new(NVec3::new(0.0, 500.0, 5.0), NVec3::new(0.0, 500.0, 5.0)),
    ];
    let mut sim = Simulator::new(System::new(particles), params.clone());

    let outcome = sim.run_until_settled(10_000);

    assert!(outcome.settled);
    for p in sim.particles() {
        assert_eq!(p.pos.z, params.radius);
    }
}

#[test]
fn repulsion_conserves_momentum() {
    let mut ps = resting(&[(0.0, 0.0), (6.0, 1.0), (3.0, 7.0), (40.0, 0.0)]);
    for i in 0..ps.len() {
        accumulate_repulsion(&mut ps, i, 5.0);
    }

    let net: NVec3 = ps.iter().map(|p| p.displacement).sum();
    assert!(net.norm() < 1e-12, "net displacement {:?}", net);
    assert_eq!(ps[3].displacement, NVec3::zeros());
}

#[test]
fn overlapping_pair_separates_and_settles() {
    let params = Parameters::default();
    let mut sim = Simulator::new(System::new(resting(&[(0.0, 0.0), (4.0, 0.0)])), params.clone());

    assert_eq!(sim.step(), SimState::Active);
    let outcome = sim.run_until_settled(10_000);
    assert!(outcome.settled);

    let ps = sim.particles();
    assert!(magnitude(&sub(&ps[0].pos, &ps[1].pos)) >= params.contact_distance() - 1e-9);
    // pushed apart along x only
    assert!(ps[0].pos.x < 0.0 && ps[1].pos.x > 4.0);
    assert_eq!(ps[0].pos.y, 0.0);
}

#[test]
fn stepping_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let blob = generate_bean_blob(&mut rng, 30, NVec3::new(200.0, 200.0, 50.0), 75.0);

    let mut a = Simulator::new(System::new(blob.clone()), Parameters::default());
    let mut b = Simulator::new(System::new(blob), Parameters::default());
    for _ in 0..300 {
        a.step();
        b.step();
    }

    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.state(), b.state());
}

#[test]
fn small_pile_settles_without_overlap() {
    let params = Parameters {
        settle_tolerance: 1e-9,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let blob = generate_bean_blob(&mut rng, 15, NVec3::new(200.0, 200.0, 50.0), 75.0);
    let mut sim = Simulator::new(System::new(blob), params.clone());

    let outcome = sim.run_until_settled(50_000);
    assert!(outcome.settled, "pile still moving after {} ticks", outcome.ticks);

    let ps = sim.particles();
    for (i, a) in ps.iter().enumerate() {
        assert_eq!(a.pos.z, params.radius);
        for b in &ps[i + 1..] {
            assert!(magnitude(&sub(&a.pos, &b.pos)) > params.contact_distance() - 1e-6);
        }
    }
}

// ==================================================================================
// Cluster tests
// ==================================================================================

#[test]
fn largest_blob_wins() {
    let mut points = resting(&[(0.0, 0.0), (15.0, 0.0), (30.0, 0.0)]);
    points.extend(resting(&[(300.0, 300.0), (310.0, 300.0)]));
    points.extend(resting(&[(600.0, 0.0)]));

    for rule in [ClusterRule::LastMatch, ClusterRule::FirstMatch, ClusterRule::UnionFind] {
        let cluster = select_largest(&points, 20.0, rule);
        assert_eq!(cluster.len(), 3, "rule {rule:?}");
    }
}

// ==================================================================================
// Boundary tests
// ==================================================================================

#[test]
fn isolated_bean_is_one_full_circle() {
    let contour = BoundaryExtractor::new(10.0).extract(&[NVec3::new(7.0, 7.0, 5.0)]);

    let enabled: Vec<_> = contour.enabled().collect();
    assert_eq!(enabled.len(), 1);
    assert!((enabled[0].span - TAU).abs() < 1e-12);
    assert!(enabled[0].is_large_arc());
    assert_eq!(contour.disabled().count(), 0);
}

#[test]
fn chain_middle_loses_both_inner_faces() {
    let members = chain();
    let contour = BoundaryExtractor::new(10.0).extract(&members);
    assert!(contour.converged);

    let middle: Vec<_> = contour.segments_of(1).collect();
    let disabled: Vec<_> = middle.iter().filter(|s| s.state == ArcState::Disabled).collect();
    let enabled: Vec<_> = middle.iter().filter(|s| s.state == ArcState::Confirmed).collect();

    assert_eq!(disabled.len(), 2);
    assert_eq!(enabled.len(), 2);

    // inner faces point at the neighbors (angles 0 and π), outer faces up and down
    for s in &disabled {
        assert!(s.mid_angle().cos().abs() > 0.99);
    }
    for s in &enabled {
        assert!(s.mid_angle().sin().abs() > 0.99);
    }

    // the ends keep one arc each
    assert_eq!(contour.segments_of(0).filter(|s| s.enabled()).count(), 1);
    assert_eq!(contour.segments_of(2).filter(|s| s.enabled()).count(), 1);
}

#[test]
fn no_enabled_arc_hides_inside_another_disk() {
    let members = vec![
        NVec3::new(0.0, 0.0, 5.0),
        NVec3::new(14.0, 2.0, 5.0),
        NVec3::new(7.0, 12.0, 5.0),
        NVec3::new(6.0, 4.0, 5.0),
        NVec3::new(24.0, 10.0, 5.0),
    ];
    let r = 10.0;
    let contour = BoundaryExtractor::new(r).extract(&members);
    assert!(contour.converged);

    for arc in contour.enabled() {
        for (k, other) in members.iter().enumerate() {
            if k == arc.owner {
                continue;
            }
            assert!(
                !point_in_disk(&arc.mid_point(r), other, r, 1e-6),
                "arc of {} is inside disk {}",
                arc.owner,
                k
            );
        }
    }

    // the bean in the middle of the others is fully covered
    assert_eq!(contour.segments_of(3).filter(|s| s.enabled()).count(), 0);
}

#[test]
fn extraction_is_idempotent() {
    let members = vec![
        NVec3::new(0.0, 0.0, 5.0),
        NVec3::new(14.0, 2.0, 5.0),
        NVec3::new(7.0, 12.0, 5.0),
    ];
    let extractor = BoundaryExtractor::new(10.0);

    assert_eq!(extractor.extract(&members), extractor.extract(&members));
}

#[test]
fn tiny_cap_returns_best_known_arcs() {
    let members = vec![
        NVec3::new(0.0, 0.0, 5.0),
        NVec3::new(14.0, 2.0, 5.0),
        NVec3::new(7.0, 12.0, 5.0),
    ];
    let contour = BoundaryExtractor::new(10.0)
        .with_iteration_cap(Some(1))
        .extract(&members);

    assert!(!contour.converged);
    assert_eq!(contour.iterations, 1);
    assert!(contour.enabled().any(|s| s.state == ArcState::Pending));
}

#[test]
fn outline_flags_large_arcs() {
    let contour = BoundaryExtractor::new(10.0).extract(&chain());
    let outline = contour.outline();

    assert_eq!(outline.len(), 4);
    // end beans keep their far side (> π), the middle keeps two short caps
    assert_eq!(outline.iter().filter(|a| a.is_large_arc).count(), 2);
    for arc in &outline {
        assert_eq!(arc.is_large_arc, arc.span > PI);
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn shipped_scenarios_all_load() {
    for name in ["island.yaml", "two_beans.yaml", "chain.yaml"] {
        let cfg = load_scenario(name);
        assert!(Scenario::build_scenario(cfg).is_ok(), "{name} did not build");
    }

    let island = load_scenario("island.yaml");
    assert!(matches!(island.scene, SceneConfig::Random(ref r) if r.seed == 42));
}

#[test]
fn two_bean_scenario_outline() {
    let scenario = Scenario::build_scenario(load_scenario("two_beans.yaml")).unwrap();
    let report = scenario.run();

    assert!(report.outcome.settled);
    assert_eq!(report.cluster.len(), 2);
    assert_eq!(report.contour.outline().len(), 2);
    assert_eq!(svg_path_data(&report.contour).matches('A').count(), 2);
}

#[test]
fn chain_scenario_outline() {
    let scenario = Scenario::build_scenario(load_scenario("chain.yaml")).unwrap();
    assert_eq!(scenario.engine.cluster_rule, ClusterRule::LastMatch);
    assert_eq!(scenario.parameters.cluster_threshold, 20.0);

    let report = scenario.run();
    assert_eq!(report.cluster.len(), 3);
    assert_eq!(report.contour.enabled().count(), 4);
    assert_eq!(report.contour.disabled().count(), 4);
}

#[test]
fn engine_defaults_come_from_config() {
    let cfg: ScenarioConfig =
        serde_yaml::from_str("scene:\n  particles:\n    - pos: [0.0, 0.0, 5.0]\n").unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(
        scenario.engine,
        Engine {
            max_ticks: 20_000,
            cluster_rule: ClusterRule::UnionFind,
            trim_iteration_cap: None,
        }
    );
}

#[test]
fn invalid_parameters_are_rejected() {
    let cfg: ScenarioConfig = serde_yaml::from_str(
        "parameters:\n  drag: 2.0\nscene:\n  particles:\n    - pos: [0.0, 0.0, 5.0]\n",
    )
    .unwrap();

    assert!(Scenario::build_scenario(cfg).is_err());
}
