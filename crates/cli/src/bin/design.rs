use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use rocket_design_calculator::export::{summary, table};
use rocket_design_calculator::parts::{Catalog, RadialSize, load_catalog};
use rocket_design_calculator::search::{Design, Mission, Requirement, find_designs};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Determine the best rocket designs for a mission",
    after_help = "deltav:pressure tuples:\n\
        Each tuple states a delta-v (m/s) the ship must reach at an ambient\n\
        pressure (0.0 = vacuum, 1.0 = full atmosphere). Give several tuples\n\
        when the flight crosses environments, e.g. launching through an\n\
        atmosphere and continuing in vacuum."
)]
struct Cli {
    /// Payload in kg
    payload: f64,

    /// Required minimum acceleration in m/s²
    acceleration: f64,

    /// deltav:pressure tuples, e.g. 3000:0 or 1500:1
    #[arg(value_name = "deltav:pressure", num_args = 1.., required = true)]
    requirements: Vec<String>,

    /// Sort by cost instead of mass
    #[arg(short = 'c', long)]
    cheapest: bool,

    /// Preferred radial size of the stages
    #[arg(short = 'S', long, value_enum)]
    preferred_size: Option<SizeArg>,

    /// Compare exact thrust-vectoring angles instead of gimbal presence only
    #[arg(short = 'b', long)]
    best_gimbal: bool,

    /// Do not hide dominated designs
    #[arg(long)]
    keep: bool,

    /// Load the parts catalog from a YAML or TOML file instead of the builtin one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the result table as CSV (`-` for stdout) plus a JSON sidecar
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum SizeArg {
    Tiny,
    Small,
    Large,
    ExtraLarge,
}

impl From<SizeArg> for RadialSize {
    fn from(value: SizeArg) -> Self {
        match value {
            SizeArg::Tiny => RadialSize::Tiny,
            SizeArg::Small => RadialSize::Small,
            SizeArg::Large => RadialSize::Large,
            SizeArg::ExtraLarge => RadialSize::ExtraLarge,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::stock(),
    };

    let requirements = cli
        .requirements
        .iter()
        .map(|s| parse_requirement(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mission = Mission {
        payload_kg: cli.payload,
        min_acceleration_m_s2: cli.acceleration,
        requirements,
        size: cli.preferred_size.map(Into::into),
        best_gimbal: cli.best_gimbal,
    };

    let mut designs = find_designs(&catalog, &mission)?;
    if !cli.keep {
        designs.retain(|d| d.is_best);
    }
    if cli.cheapest {
        designs.sort_by(|a, b| a.total_cost().total_cmp(&b.total_cost()));
    } else {
        designs.sort_by(|a, b| a.total_mass_kg().total_cmp(&b.total_mass_kg()));
    }

    if designs.is_empty() {
        println!("No design satisfies all requirements.");
        return Ok(());
    }

    for design in &designs {
        println!("{design}");
        println!();
    }

    if let Some(path) = &cli.export {
        export_designs(path, &designs)?;
    }

    Ok(())
}

fn parse_requirement(arg: &str) -> anyhow::Result<Requirement> {
    let (dv, pressure) = arg
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("expected deltav:pressure, got '{arg}'"))?;
    let delta_v_m_s: f64 = dv
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid delta-v '{dv}' in '{arg}'"))?;
    let pressure_atm: f64 = pressure
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid pressure '{pressure}' in '{arg}'"))?;
    Ok(Requirement {
        delta_v_m_s,
        pressure_atm,
    })
}

fn export_designs(path: &Path, designs: &[Design]) -> anyhow::Result<()> {
    let mut writer = table::writer_for_path(path)?;
    table::write_header(writer.as_mut())?;
    for design in designs {
        let composition = design
            .stages
            .iter()
            .map(|s| format!("{}x {}", s.engine_count, s.engine.name))
            .collect::<Vec<_>>()
            .join(" | ");
        let requirements = design
            .verdicts
            .iter()
            .map(|v| {
                format!(
                    "{:.0}@{:.2}",
                    v.requirement.delta_v_m_s, v.requirement.pressure_atm
                )
            })
            .collect::<Vec<_>>()
            .join(";");
        let achieved = design
            .verdicts
            .iter()
            .map(|v| format!("{:.1}", v.achieved_dv_m_s))
            .collect::<Vec<_>>()
            .join(";");
        table::Record {
            design: &composition,
            stage_count: design.stage_count(),
            total_mass_kg: design.total_mass_kg(),
            total_cost: design.total_cost(),
            is_best: design.is_best,
            requirements: &requirements,
            achieved_dv_m_s: &achieved,
            min_acceleration_m_s2: design.min_acceleration_m_s2(),
            min_twr: design.min_twr(),
        }
        .write_to(writer.as_mut())?;
    }
    drop(writer);

    if path != Path::new("-") {
        let summaries: Vec<summary::DesignSummary> =
            designs.iter().map(design_summary).collect();
        summary::write_sidecar(path, &summaries)?;
    }
    Ok(())
}

fn design_summary(design: &Design) -> summary::DesignSummary {
    summary::DesignSummary {
        stages: design
            .stages
            .iter()
            .map(|s| summary::StageSummary {
                engine: s.engine.name.clone(),
                engine_count: s.engine_count,
                radial_size: s.radial_size().to_string(),
                propellant_kg: s.propellant_kg,
                dry_mass_kg: s.dry_mass_kg(),
                gimbal_deg: s.gimbal_deg(),
                cost: s.cost,
            })
            .collect(),
        total_mass_kg: design.total_mass_kg(),
        total_cost: design.total_cost(),
        is_best: design.is_best,
        requirements: design
            .verdicts
            .iter()
            .map(|v| summary::RequirementSummary {
                delta_v_m_s: v.requirement.delta_v_m_s,
                pressure_atm: v.requirement.pressure_atm,
                achieved_dv_m_s: v.achieved_dv_m_s,
                min_acceleration_m_s2: v.min_acceleration_m_s2,
                min_twr: v.min_twr,
            })
            .collect(),
    }
}
