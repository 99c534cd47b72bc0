use clap::{Parser, Subcommand};
use mm_core::{EquippedId, MmError};
use mm_crit::{ComponentDestructionSimulator, CritSettings, CritTarget, CritTargeting};
use mm_metrics::{
    AlphaStrike, CoolingRatio, GhostHeat, GhostHeatSettings, HeatCapacity, HeatDissipation,
    HeatGeneration, HeatScaleOverflow, JumpDistance, MaxDps, MaxSustainedDps, Metric,
    PayloadCapacity, RangeMetric, RangeOutcome, TimeToOverheat, TopSpeed,
};
use mm_model::{Catalog, Loadout, LoadoutBuilder, Location, ModelError, Modifiers, Upgrades, sample};
use mm_signals::{DoubleFireBurstSignal, ImpulseTrain, Signal};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] MmError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

impl From<ModelError> for CliError {
    fn from(e: ModelError) -> Self {
        Self::Core(e.into())
    }
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "mm-cli")]
#[command(about = "MechMetrics CLI - loadout metrics over the built-in sample catalog", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ghost heat of firing the named weapons together
    GhostHeat {
        /// Weapon names from the sample catalog (repeat for duplicates)
        #[arg(required = true)]
        weapons: Vec<String>,
        /// Extrapolate the heat scale beyond its last entry
        #[arg(long)]
        extrapolate: bool,
    },
    /// Destruction probabilities of items in one component
    Crit {
        /// Component internal hit points
        #[arg(long)]
        hp: f64,
        /// Items in slot order as HEALTH:SLOTS
        #[arg(long = "item", value_parser = parse_target, required = true)]
        items: Vec<(f64, u32)>,
        /// Number of component hits (defaults to what the hit points allow)
        #[arg(long)]
        shots: Option<u32>,
        /// Pick crit targets by slot weight instead of slot order
        #[arg(long)]
        slot_weighted: bool,
    },
    /// Expected damage of one weapon over time
    Burst {
        /// Weapon name from the sample catalog
        weapon: String,
        /// Seconds of continuous fire
        #[arg(long)]
        time: f64,
        /// Distance to the target in metres
        #[arg(long, default_value_t = 0.0)]
        range: f64,
    },
    /// Summary metrics of a loadout built from the sample catalog
    Metrics {
        /// Item names; each goes to the first location with free slots
        #[arg(required = true)]
        items: Vec<String>,
        /// Use double heat sinks
        #[arg(long)]
        double_heat_sinks: bool,
        /// Evaluate range metrics at this distance instead of the best one
        #[arg(long)]
        range: Option<f64>,
    },
}

fn parse_target(s: &str) -> Result<(f64, u32), String> {
    let (health, slots) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HEALTH:SLOTS, got `{s}`"))?;
    let health = health
        .parse::<f64>()
        .map_err(|e| format!("bad health `{health}`: {e}"))?;
    let slots = slots
        .parse::<u32>()
        .map_err(|e| format!("bad slot count `{slots}`: {e}"))?;
    Ok((health, slots))
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let catalog = sample::catalog()?;
    debug!(items = catalog.len(), "sample catalog loaded");

    match cli.command {
        Commands::GhostHeat {
            weapons,
            extrapolate,
        } => cmd_ghost_heat(&catalog, &weapons, extrapolate, cli.json),
        Commands::Crit {
            hp,
            items,
            shots,
            slot_weighted,
        } => cmd_crit(hp, &items, shots, slot_weighted, cli.json),
        Commands::Burst {
            weapon,
            time,
            range,
        } => cmd_burst(&catalog, &weapon, time, range, cli.json),
        Commands::Metrics {
            items,
            double_heat_sinks,
            range,
        } => cmd_metrics(&catalog, &items, double_heat_sinks, range, cli.json),
    }
}

/// Equip each item at the first location that takes it.
fn build_loadout<'c>(
    catalog: &'c Catalog,
    names: &[String],
    upgrades: Upgrades,
) -> CliResult<Loadout<'c>> {
    let mut builder = LoadoutBuilder::new(catalog, sample::medium_chassis())?.with_upgrades(upgrades);
    for name in names {
        let id = catalog.require(name)?;
        let mut rejected = None;
        let mut placed = None;
        for loc in Location::ALL {
            match builder.equip(loc, id) {
                Ok(_) => {
                    placed = Some(loc);
                    break;
                }
                Err(e) => rejected = Some(e),
            }
        }
        match (placed, rejected) {
            (Some(loc), _) => debug!(item = %name, location = ?loc, "equipped"),
            (None, Some(e)) => return Err(e.into()),
            (None, None) => return Err(CliError::Usage(format!("no location can take `{name}`"))),
        }
    }
    Ok(builder.build())
}

fn emit<T: Serialize>(json: bool, report: &T, text: impl FnOnce(&T)) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        text(report);
    }
    Ok(())
}

#[derive(Serialize)]
struct GhostHeatReport {
    weapons: usize,
    penalty: f64,
}

fn cmd_ghost_heat(catalog: &Catalog, weapons: &[String], extrapolate: bool, json: bool) -> CliResult<()> {
    let loadout = build_loadout(catalog, weapons, Upgrades::default())?;
    let settings = GhostHeatSettings {
        overflow: if extrapolate {
            HeatScaleOverflow::Extrapolate
        } else {
            HeatScaleOverflow::Saturate
        },
    };
    let report = GhostHeatReport {
        weapons: loadout.weapons().count(),
        penalty: GhostHeat::with_settings(&loadout, settings).calculate(),
    };
    emit(json, &report, |r| {
        println!("Ghost heat for {} weapons: {:.3}", r.weapons, r.penalty);
    })
}

#[derive(Serialize)]
struct CritRow {
    slot_index: u32,
    health: f64,
    slots: u32,
    probability: f64,
}

#[derive(Serialize)]
struct CritReport {
    shots: u32,
    items: Vec<CritRow>,
}

fn cmd_crit(
    hp: f64,
    items: &[(f64, u32)],
    shots: Option<u32>,
    slot_weighted: bool,
    json: bool,
) -> CliResult<()> {
    let targets = items
        .iter()
        .enumerate()
        .map(|(i, &(health, slots))| CritTarget {
            id: EquippedId::from_index(i as u32),
            health,
            slots,
        })
        .collect();
    let settings = CritSettings {
        targeting: if slot_weighted {
            CritTargeting::SlotWeighted
        } else {
            CritTargeting::SlotOrder
        },
        ..CritSettings::default()
    };
    let mut sim = ComponentDestructionSimulator::new(hp, targets)
        .and_then(|s| s.with_settings(settings))
        .map_err(MmError::from)?;
    if let Some(n) = shots {
        sim = sim.with_shots(n);
    }
    sim.simulate();

    let report = CritReport {
        shots: sim.shots(),
        items: sim
            .items()
            .iter()
            .zip(sim.probabilities())
            .map(|(t, (id, probability))| CritRow {
                slot_index: id.index(),
                health: t.health,
                slots: t.slots,
                probability,
            })
            .collect(),
    };
    emit(json, &report, |r| {
        println!("Simulated {} component hits", r.shots);
        for row in &r.items {
            println!(
                "  #{} ({} hp, {} slots): {:.4}",
                row.slot_index, row.health, row.slots, row.probability
            );
        }
    })
}

#[derive(Serialize)]
struct BurstReport {
    weapon: String,
    time: f64,
    range: f64,
    damage: f64,
    probability_mass: f64,
}

fn cmd_burst(catalog: &Catalog, name: &str, time: f64, range: f64, json: bool) -> CliResult<()> {
    let id = catalog.require(name)?;
    let weapon = catalog
        .weapon(id)
        .ok_or_else(|| CliError::Usage(format!("`{name}` is not a weapon")))?;
    let modifiers = Modifiers::none();

    let (damage, probability_mass) = if weapon.can_jam() {
        let signal = DoubleFireBurstSignal::new(weapon, &modifiers, range).map_err(MmError::from)?;
        let estimate = signal.evaluate(time);
        info!(
            expanded = estimate.expanded,
            pruned = estimate.pruned,
            "burst lattice evaluated"
        );
        (estimate.damage, estimate.probability_mass)
    } else {
        let volley = weapon.damage_per_shot
            * f64::from(weapon.shots_during_cooldown + 1)
            * weapon.range_effectiveness(range, &modifiers);
        let train = ImpulseTrain::new(weapon.raw_firing_period(&modifiers), volley)
            .map_err(MmError::from)?;
        (train.integrate_from_zero_to(time), 1.0)
    };

    let report = BurstReport {
        weapon: weapon.name.clone(),
        time,
        range,
        damage,
        probability_mass,
    };
    emit(json, &report, |r| {
        println!(
            "{} over {} s at {} m: {:.3} damage (probability mass {:.9})",
            r.weapon, r.time, r.range, r.damage, r.probability_mass
        );
    })
}

#[derive(Serialize)]
struct MetricsReport {
    alpha_strike: RangeOutcome,
    max_dps: RangeOutcome,
    max_sustained_dps: RangeOutcome,
    heat_capacity: f64,
    heat_dissipation: f64,
    heat_generation: f64,
    cooling_ratio: f64,
    /// `None` when the loadout never overheats.
    time_to_overheat: Option<f64>,
    ghost_heat: f64,
    top_speed_kph: f64,
    jump_height_m: f64,
    payload_tons: f64,
}

fn cmd_metrics(
    catalog: &Catalog,
    items: &[String],
    double_heat_sinks: bool,
    range: Option<f64>,
    json: bool,
) -> CliResult<()> {
    let upgrades = Upgrades {
        double_heat_sinks,
        ..Upgrades::default()
    };
    let loadout = build_loadout(catalog, items, upgrades)?;

    let (alpha, dps, sustained) = match range {
        Some(r) => (
            AlphaStrike::at_range(&loadout, r),
            MaxDps::at_range(&loadout, r),
            MaxSustainedDps::at_range(&loadout, r),
        ),
        None => (
            AlphaStrike::new(&loadout),
            MaxDps::new(&loadout),
            MaxSustainedDps::new(&loadout),
        ),
    };
    let overheat = TimeToOverheat::new(&loadout).calculate();

    let report = MetricsReport {
        alpha_strike: alpha.best(),
        max_dps: dps.best(),
        max_sustained_dps: sustained.best(),
        heat_capacity: HeatCapacity::new(&loadout).calculate(),
        heat_dissipation: HeatDissipation::new(&loadout).calculate(),
        heat_generation: HeatGeneration::new(&loadout).calculate(),
        cooling_ratio: CoolingRatio::new(&loadout).calculate(),
        time_to_overheat: overheat.is_finite().then_some(overheat),
        ghost_heat: GhostHeat::new(&loadout).calculate(),
        top_speed_kph: TopSpeed::new(&loadout).calculate(),
        jump_height_m: JumpDistance::new(&loadout).calculate(),
        payload_tons: PayloadCapacity::new(&loadout).calculate(),
    };
    emit(json, &report, |r| {
        let at = |o: &RangeOutcome| format!("{:.2} @ {} m", o.value, o.range);
        println!("Alpha strike:      {}", at(&r.alpha_strike));
        println!("Max DPS:           {}", at(&r.max_dps));
        println!("Max sustained DPS: {}", at(&r.max_sustained_dps));
        println!("Heat capacity:     {:.2}", r.heat_capacity);
        println!("Heat dissipation:  {:.3}/s", r.heat_dissipation);
        println!("Heat generation:   {:.3}/s", r.heat_generation);
        println!("Cooling ratio:     {:.3}", r.cooling_ratio);
        match r.time_to_overheat {
            Some(t) => println!("Time to overheat:  {t:.1} s"),
            None => println!("Time to overheat:  never"),
        }
        println!("Ghost heat:        {:.2}", r.ghost_heat);
        println!("Top speed:         {:.1} km/h", r.top_speed_kph);
        println!("Jump height:       {:.1} m", r.jump_height_m);
        println!("Free tonnage:      {:.2} t", r.payload_tons);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_heat_sinks() -> Upgrades {
        Upgrades {
            double_heat_sinks: true,
            ..Upgrades::default()
        }
    }

    #[test]
    fn places_items_at_first_fitting_location() {
        let catalog = sample::catalog().unwrap();
        let names = ["STD 250", "Medium Laser", "Double Heat Sink"].map(String::from);
        let loadout = build_loadout(&catalog, &names, double_heat_sinks()).unwrap();
        assert_eq!(loadout.equipped().len(), 3);
        assert!(loadout.engine().is_some());
    }

    #[test]
    fn rejected_item_reports_model_reason() {
        let catalog = sample::catalog().unwrap();
        let names = ["Heat Sink".to_string()];
        let err = build_loadout(&catalog, &names, double_heat_sinks()).unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("heat sink type does not match upgrades"),
            "{message}"
        );
    }

    #[test]
    fn unknown_item_is_reported() {
        let catalog = sample::catalog().unwrap();
        let names = ["Warp Drive".to_string()];
        assert!(matches!(
            build_loadout(&catalog, &names, Upgrades::default()),
            Err(CliError::Core(MmError::Unknown { .. }))
        ));
    }
}
