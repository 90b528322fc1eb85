use cell_physics::carrier::{doped_concentrations, intrinsic_concentration, ConcentrationModel};

const MODELS: [ConcentrationModel; 9] = [
    ConcentrationModel::MisiakosTsamakis,
    ConcentrationModel::MorinMaita,
    ConcentrationModel::PutleyMitchell,
    ConcentrationModel::Barber,
    ConcentrationModel::Slotboom,
    ConcentrationModel::Wasserab,
    ConcentrationModel::Green1990,
    ConcentrationModel::SproulGreen1991,
    ConcentrationModel::SproulGreen1993,
];

#[test]
fn intrinsic_concentration_grows_with_temperature() {
    for model in MODELS {
        let n_300 = intrinsic_concentration(model, 300.0).unwrap();
        let n_400 = intrinsic_concentration(model, 400.0).unwrap();
        assert!(n_400 > n_300, "{:?}: {} !> {}", model, n_400, n_300);
    }
}

#[test]
fn misiakos_tsamakis_reference_value() {
    // ~9.7e9 cm^-3 at 300 K (Misiakos-Tsamakis measurement)
    let n_i = intrinsic_concentration(ConcentrationModel::MisiakosTsamakis, 300.0).unwrap();
    assert!((n_i / 9.7e15 - 1.0).abs() < 0.05, "n_i = {}", n_i);
}

#[test]
fn rejects_non_positive_temperature() {
    assert!(intrinsic_concentration(ConcentrationModel::Barber, 0.0).is_err());
    assert!(doped_concentrations(-5.0, 1.0e16, 1.0).is_err());
}

#[test]
fn rejects_negative_doping() {
    assert!(doped_concentrations(300.0, -1.0e16, 1.0).is_err());
    assert!(doped_concentrations(300.0, 1.0e16, -1.0).is_err());
}

#[test]
fn charge_balance_n_type() {
    let c = doped_concentrations(300.0, 1.0e17, 1.0e15).unwrap();
    // net doping in m^-3
    let net = (1.0e17 - 1.0e15) * 1.0e6;
    assert!(((c.n - c.p) / net - 1.0).abs() < 1e-9);
    assert!(c.n > c.p);
    let mass_action = c.n * c.p / (c.n_i * c.n_i);
    assert!((mass_action - 1.0).abs() < 1e-9);
}

#[test]
fn charge_balance_p_type() {
    let c = doped_concentrations(300.0, 1.0e12, 1.0e18).unwrap();
    assert!(c.p > c.n);
    let net = (1.0e18 - 1.0e12) * 1.0e6;
    assert!(((c.p - c.n) / net - 1.0).abs() < 1e-9);
}

#[test]
fn equal_doping_never_raises_domain_error() {
    // degenerate compensation: the Fermi-inverse logarithm limit applies
    for exp in [12, 14, 16, 18] {
        let n = 10f64.powi(exp);
        let c = doped_concentrations(300.0, n, n).unwrap();
        assert!(c.n_i.is_finite() && c.n.is_finite() && c.p.is_finite());
        assert!(c.n > 0.0);
        assert_eq!(c.n, c.p);
    }
}

#[test]
fn bandgap_narrowing_raises_effective_n_i() {
    // heavy doping narrows the gap, so the corrected n_i must exceed the
    // lightly doped value
    let light = doped_concentrations(300.0, 1.0e14, 1.0).unwrap();
    let heavy = doped_concentrations(300.0, 1.0e19, 1.0).unwrap();
    assert!(heavy.n_i > light.n_i, "{} !> {}", heavy.n_i, light.n_i);
}
