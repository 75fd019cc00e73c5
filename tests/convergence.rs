use gd_linfit::data::{generate_dataset, generate_seeded};
use gd_linfit::domain::{Dataset, DatasetConfig, GdConfig, WeightVector};
use gd_linfit::error::ErrorKind;
use gd_linfit::fit::{GradientDescent, GradientDescentSolver, LeastSquares, NormalEquation, Solver};
use gd_linfit::math::mse;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn reference_dataset() -> Dataset {
    generate_seeded(&DatasetConfig::default()).unwrap()
}

#[test]
fn all_three_solvers_land_near_the_generating_line() {
    let ds = reference_dataset();
    let truth = DatasetConfig::default().truth;

    let gd = GradientDescentSolver::new(GdConfig {
        n_iter: 5_000,
        ..GdConfig::default()
    });
    let solvers: [&dyn Solver; 3] = [&NormalEquation, &LeastSquares, &gd];

    for solver in solvers {
        let est = solver.fit(&ds).unwrap();
        // Noise std is 1 and N = 1000, so estimates sit well within 0.5 of the truth.
        assert!((est.weights.intercept - truth.intercept).abs() < 0.5, "{}: {}", est.solver, est.weights);
        assert!((est.weights.slope - truth.slope).abs() < 0.5, "{}: {}", est.solver, est.weights);
    }
}

#[test]
fn reference_run_shape_matches_the_default_settings() {
    let ds = reference_dataset();
    let cfg = GdConfig::default();
    let out = GradientDescent::initialize(cfg.initial, &ds, cfg.learning_rate, cfg.n_iter)
        .unwrap()
        .run();

    assert_eq!(out.history.len(), 100);
    assert_eq!(out.history.intercepts().len(), out.history.slopes().len());
    assert_eq!(*out.history.first().unwrap(), WeightVector::new(-94.0, 18.2));

    // 100 steps at eta=0.15 gets within a few units of the optimum, not all the way.
    let exact = NormalEquation.fit(&ds).unwrap().weights;
    let start_gap = cfg.initial.distance(&exact);
    let end_gap = out.weights.distance(&exact);
    assert!(end_gap < start_gap / 10.0, "gap {start_gap} -> {end_gap}");
}

#[test]
fn dataset_is_untouched_by_the_optimizer() {
    let ds = reference_dataset();
    let before = ds.clone();

    let _ = GradientDescent::initialize(WeightVector::new(0.0, 0.0), &ds, 0.1, 250)
        .unwrap()
        .run();
    let _ = NormalEquation.fit(&ds).unwrap();

    assert_eq!(ds.features(), before.features());
    assert_eq!(ds.targets(), before.targets());
}

#[test]
fn caller_rng_drives_generation() {
    let config = DatasetConfig::default();
    let mut a = StdRng::seed_from_u64(config.seed);
    let mut b = StdRng::seed_from_u64(config.seed);
    let da = generate_dataset(&config, &mut a).unwrap();
    let db = generate_dataset(&config, &mut b).unwrap();
    assert_eq!(da.targets(), db.targets());
    assert_eq!(da.targets(), reference_dataset().targets());
}

#[test]
fn zero_iterations_or_zero_eta_fail_fast() {
    let ds = reference_dataset();
    let w0 = WeightVector::new(1.0, 1.0);

    let err = GradientDescent::initialize(w0, &ds, 0.1, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    assert_eq!(err.exit_code(), 2);

    let err = GradientDescent::initialize(w0, &ds, 0.0, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn loss_along_a_good_run_trends_down() {
    let ds = reference_dataset();
    let out = GradientDescent::initialize(WeightVector::new(-94.0, 18.2), &ds, 0.05, 400)
        .unwrap()
        .run();

    let losses: Vec<f64> = out.history.iter().map(|w| mse(&ds, &w.to_vector())).collect();
    assert!(losses.windows(2).all(|p| p[1] <= p[0] * (1.0 + 1e-12)));
    assert!(losses[399] < losses[0] * 1e-2);
}
