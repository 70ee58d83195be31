//! Parts catalog: engines, fuel tanks, and attachment hardware with their
//! physical properties.
//!
//! The catalog is an immutable, ordered collection threaded by reference
//! through the design search. It can be restricted to a single radial size
//! before enumeration, and loaded from YAML or TOML files in place of the
//! builtin stock list.

use std::fmt;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod stock;

/// Radial attachment size class. Parts sharing a stage must share a size.
/// Ordered from narrowest to widest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RadialSize {
    Tiny,
    Small,
    Large,
    ExtraLarge,
}

impl RadialSize {
    pub const ALL: [RadialSize; 4] = [
        RadialSize::Tiny,
        RadialSize::Small,
        RadialSize::Large,
        RadialSize::ExtraLarge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RadialSize::Tiny => "tiny",
            RadialSize::Small => "small",
            RadialSize::Large => "large",
            RadialSize::ExtraLarge => "extra-large",
        }
    }
}

impl fmt::Display for RadialSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rocket engine record. Thrust is treated as pressure-independent; specific
/// impulse is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    pub name: String,
    pub dry_mass_kg: f64,
    pub thrust_n: f64,
    /// Specific impulse in vacuum (s).
    pub isp_vac_s: f64,
    /// Specific impulse at full atmospheric pressure (s).
    pub isp_atm_s: f64,
    pub size: RadialSize,
    /// Maximum thrust-vectoring deflection in degrees; 0 means no gimbal.
    #[serde(default)]
    pub gimbal_deg: f64,
    pub cost: f64,
}

impl Engine {
    /// Effective specific impulse at ambient pressure `p` (0 = vacuum,
    /// 1 = full atmosphere), linearly interpolated between the two ratings.
    pub fn isp_at(&self, pressure_atm: f64) -> f64 {
        let p = pressure_atm.clamp(0.0, 1.0);
        self.isp_vac_s + (self.isp_atm_s - self.isp_vac_s) * p
    }

    pub fn has_gimbal(&self) -> bool {
        self.gimbal_deg > 0.0
    }
}

/// Fuel tank record with a fixed propellant load per part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub name: String,
    pub dry_mass_kg: f64,
    pub propellant_kg: f64,
    pub size: RadialSize,
    pub cost: f64,
}

/// Stack decoupler joining a stage to the stack above it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoupler {
    pub name: String,
    pub mass_kg: f64,
    pub size: RadialSize,
    pub cost: f64,
}

/// Continuously sizable tankage derived from a catalog tank record. Tanks in
/// one family stack at a fixed structure-to-propellant ratio, so a stage can
/// carry exactly the propellant its delta-v budget requires.
#[derive(Debug, Clone, Serialize)]
pub struct TankFamily {
    pub tank_name: String,
    pub size: RadialSize,
    /// Structural mass per kg of propellant carried.
    pub dry_fraction: f64,
    /// Cost per kg of propellant carried, structure included.
    pub cost_per_kg: f64,
}

/// Immutable parts catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub engines: Vec<Engine>,
    pub tanks: Vec<Tank>,
    #[serde(default)]
    pub decouplers: Vec<Decoupler>,
}

impl Catalog {
    /// The builtin stock parts list.
    pub fn stock() -> Self {
        stock::catalog()
    }

    /// Restrict the catalog to parts of one radial size. `None` keeps everything.
    pub fn filter_size(&self, size: Option<RadialSize>) -> Catalog {
        match size {
            None => self.clone(),
            Some(size) => Catalog {
                engines: self
                    .engines
                    .iter()
                    .filter(|e| e.size == size)
                    .cloned()
                    .collect(),
                tanks: self
                    .tanks
                    .iter()
                    .filter(|t| t.size == size)
                    .cloned()
                    .collect(),
                decouplers: self
                    .decouplers
                    .iter()
                    .filter(|d| d.size == size)
                    .cloned()
                    .collect(),
            },
        }
    }

    /// Most mass-efficient tank family of a size, ties broken by cost.
    /// `None` when the catalog carries no usable tank of that size.
    pub fn tank_family(&self, size: RadialSize) -> Option<TankFamily> {
        self.tanks
            .iter()
            .filter(|t| t.size == size && t.propellant_kg > 0.0)
            .map(|t| TankFamily {
                tank_name: t.name.clone(),
                size,
                dry_fraction: t.dry_mass_kg / t.propellant_kg,
                cost_per_kg: t.cost / t.propellant_kg,
            })
            .min_by(|a, b| {
                a.dry_fraction
                    .total_cmp(&b.dry_fraction)
                    .then(a.cost_per_kg.total_cmp(&b.cost_per_kg))
            })
    }

    /// Lightest stack decoupler of the given size, if any.
    pub fn decoupler(&self, size: RadialSize) -> Option<&Decoupler> {
        self.decouplers
            .iter()
            .filter(|d| d.size == size)
            .min_by(|a, b| a.mass_kg.total_cmp(&b.mass_kg))
    }
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a catalog from a YAML or TOML file, selected by extension.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
