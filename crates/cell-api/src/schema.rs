//! Request/response DTOs for the solve endpoints.

use cell_core::{CellCharacteristics, CellParameters, EffectFlags, ScalingLaw};
use serde::{Deserialize, Serialize};

/// Cell parameters as accepted on the wire. Every field is optional;
/// omitted fields fall back to the crystalline-silicon defaults of
/// [`CellParameters`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParametersDto {
    pub j_ph: Option<f64>,
    pub j_s1: Option<f64>,
    pub j_s2: Option<f64>,
    pub r_s: Option<f64>,
    pub r_p: Option<f64>,
    pub t_ini: Option<f64>,
    pub t_sim: Option<f64>,
    pub thickness: Option<f64>,
    pub lifetime: Option<f64>,
    pub surface_velocity: Option<f64>,
    pub n_d: Option<f64>,
    pub n_a: Option<f64>,
}

impl From<ParametersDto> for CellParameters {
    fn from(dto: ParametersDto) -> Self {
        let base = CellParameters::default();
        CellParameters {
            j_ph: dto.j_ph.unwrap_or(base.j_ph),
            j_s1_ini: dto.j_s1.unwrap_or(base.j_s1_ini),
            j_s2_ini: dto.j_s2.unwrap_or(base.j_s2_ini),
            r_s: dto.r_s.unwrap_or(base.r_s),
            r_p: dto.r_p.unwrap_or(base.r_p),
            t_ini: dto.t_ini.unwrap_or(base.t_ini),
            t_sim: dto.t_sim.unwrap_or(base.t_sim),
            thickness: dto.thickness.unwrap_or(base.thickness),
            lifetime: dto.lifetime.unwrap_or(base.lifetime),
            surface_velocity: dto.surface_velocity.unwrap_or(base.surface_velocity),
            n_d: dto.n_d.unwrap_or(base.n_d),
            n_a: dto.n_a.unwrap_or(base.n_a),
        }
    }
}

/// Effect selection as accepted on the wire; all flags default to off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectsDto {
    #[serde(default)]
    pub saturation_scaling: bool,
    #[serde(default)]
    pub bandgap: bool,
    #[serde(default)]
    pub effective_mass: bool,
    #[serde(default)]
    pub diffusion: bool,
    #[serde(default)]
    pub mobility: bool,
    #[serde(default)]
    pub fit_saturation: bool,
    #[serde(default)]
    pub fit_lifetime: bool,
}

impl From<EffectsDto> for EffectFlags {
    fn from(dto: EffectsDto) -> Self {
        EffectFlags {
            saturation_scaling: dto.saturation_scaling,
            bandgap: dto.bandgap,
            effective_mass: dto.effective_mass,
            diffusion: dto.diffusion,
            mobility: dto.mobility,
            fit_saturation: dto.fit_saturation,
            fit_lifetime: dto.fit_lifetime,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CharacteristicsRequest {
    #[serde(default)]
    pub parameters: ParametersDto,
    #[serde(default)]
    pub effects: EffectsDto,
}

#[derive(Debug, Deserialize)]
pub struct IvRequest {
    #[serde(default)]
    pub parameters: ParametersDto,
    #[serde(default)]
    pub effects: EffectsDto,
    pub voltages: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct CharacteristicsResponse {
    pub u_oc: f64,
    pub j_sc: f64,
    pub u_mpp: f64,
    pub j_mpp: f64,
    pub s_mpp: f64,
    pub fill_factor: f64,
    pub efficiency: f64,
    pub scaling_law: String,
}

impl CharacteristicsResponse {
    pub fn new(ch: CellCharacteristics, law: ScalingLaw) -> Self {
        Self {
            u_oc: ch.u_oc,
            j_sc: ch.j_sc,
            u_mpp: ch.u_mpp,
            j_mpp: ch.j_mpp,
            s_mpp: ch.s_mpp,
            fill_factor: ch.fill_factor,
            efficiency: ch.efficiency,
            scaling_law: format!("{:?}", law),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IvPoint {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
}

#[derive(Debug, Serialize)]
pub struct IvResponse {
    pub scaling_law: String,
    pub points: Vec<IvPoint>,
}
