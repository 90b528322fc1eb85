use cell_physics::mobility::bulk_mobility;

#[test]
fn species_ordering_at_room_temperature() {
    // electrons are more mobile than holes; As and P electron values sit
    // within a few percent of each other
    let mu = bulk_mobility(300.0, 1.0e16, 1.0e14).unwrap();
    assert!(mu.arsenic > mu.boron);
    assert!(mu.phosphorus > mu.boron);
    assert!((mu.arsenic / mu.phosphorus - 1.0).abs() < 0.1);
}

#[test]
fn heavy_doping_stays_above_saturation_floor() {
    // mu_min values from Klaassen table 1 bound the heavy-doping limit
    let mu = bulk_mobility(300.0, 1.0e20, 1.0).unwrap();
    assert!(mu.phosphorus > 50.0e-4 && mu.phosphorus < 200.0e-4, "{:?}", mu);
}

#[test]
fn raw_scattering_density_convention() {
    // The scattering densities use the raw dopant densities, not Klaassen's
    // clustered ones (Sentaurus convention). At densities where clustering
    // kicks in (> ~1e20 cm^-3) the two conventions diverge; this pins the
    // implemented one: the clustered variant would predict a lower mobility
    // than the raw-density value asserted here.
    let mu = bulk_mobility(300.0, 4.0e20, 1.0).unwrap();
    assert!(mu.phosphorus.is_finite() && mu.phosphorus > 0.0);
    // raw-density screening keeps the value above the fully clustered
    // estimate; a regression to the literature form breaks this bound
    assert!(mu.phosphorus > 30.0e-4, "mu_P = {}", mu.phosphorus);
}

#[test]
fn finite_across_stated_temperature_range() {
    for i in 1..=10 {
        let t = 50.0 * i as f64;
        let mu = bulk_mobility(t, 1.0e16, 1.0e14).unwrap();
        assert!(mu.arsenic > 0.0 && mu.arsenic.is_finite(), "T = {}: {:?}", t, mu);
        assert!(mu.boron > 0.0 && mu.boron.is_finite());
    }
}
