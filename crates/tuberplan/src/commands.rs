//! Command handlers: resolve a scenario, validate at the boundary, call
//! into the core, and render/persist whatever comes back.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, eyre};
use tuberplan_core::{ParameterId, ParameterSet, analyze, analyze_all, simulate};

use crate::cli::{Args, Command, ScenarioAction};
use crate::data::Scenario;
use crate::export;
use crate::report;
use crate::store::ScenarioStore;

pub fn dispatch(args: Args, data_dir: &Path) -> color_eyre::Result<()> {
    let mut store = ScenarioStore::open(data_dir)?;

    match args.command {
        Command::Run {
            scenario,
            csv,
            json,
        } => run_scenario(&store, scenario.as_deref(), csv, json),
        Command::Analyze {
            parameter,
            scenario,
            all,
            csv,
        } => analyze_scenario(&store, parameter.as_deref(), scenario.as_deref(), all, csv),
        Command::Compare { a, b } => compare_scenarios(&store, &a, &b),
        Command::Parameters => {
            for id in ParameterId::ALL {
                println!("{:<28} {}", id.key(), id.label());
            }
            Ok(())
        }
        Command::Scenario { action } => manage_scenarios(&mut store, action),
    }
}

/// Strict boundary validation: the engine is never called with a set that
/// fails these checks.
fn validated(name: &str, params: &ParameterSet) -> color_eyre::Result<()> {
    if let Err(errors) = params.validate() {
        for error in &errors {
            eprintln!("invalid parameter: {error}");
        }
        tracing::warn!(scenario = name, errors = errors.len(), "validation failed");
        return Err(eyre!(
            "scenario {name:?} failed validation with {} error(s)",
            errors.len()
        ));
    }
    Ok(())
}

fn run_scenario(
    store: &ScenarioStore,
    scenario: Option<&str>,
    csv: Option<PathBuf>,
    json: bool,
) -> color_eyre::Result<()> {
    let (name, params) = store.resolve(scenario)?;
    validated(&name, &params)?;

    let result = simulate(&params);
    tracing::info!(
        scenario = name,
        total_tons = result.total_tons,
        total_cost = result.total_cost,
        "simulation complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::simulation_report(&name, &result));
    }

    if let Some(path) = csv {
        fs::write(&path, export::simulation_csv(&result))
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn analyze_scenario(
    store: &ScenarioStore,
    parameter: Option<&str>,
    scenario: Option<&str>,
    all: bool,
    csv: Option<PathBuf>,
) -> color_eyre::Result<()> {
    let (name, params) = store.resolve(scenario)?;
    validated(&name, &params)?;

    let tables = match (parameter, all) {
        (_, true) => analyze_all(&params),
        (Some(key), false) => {
            let table = analyze(key, &params);
            if table.is_empty() {
                return Err(eyre!(
                    "unknown parameter {key:?}; run `tuberplan parameters` for the key list"
                ));
            }
            vec![table]
        }
        (None, false) => {
            return Err(eyre!("pass a parameter key, or --all to sweep everything"));
        }
    };

    for table in &tables {
        print!("{}", report::sensitivity_report(table));
        println!();
    }

    if let Some(path) = csv {
        fs::write(&path, export::sensitivity_csv(&tables))
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn compare_scenarios(store: &ScenarioStore, a: &str, b: &str) -> color_eyre::Result<()> {
    let (name_a, params_a) = store.resolve(Some(a))?;
    let (name_b, params_b) = store.resolve(Some(b))?;
    validated(&name_a, &params_a)?;
    validated(&name_b, &params_b)?;

    let result_a = simulate(&params_a);
    let result_b = simulate(&params_b);
    print!(
        "{}",
        report::comparison_report(&name_a, &result_a, &name_b, &result_b)
    );
    Ok(())
}

fn manage_scenarios(store: &mut ScenarioStore, action: ScenarioAction) -> color_eyre::Result<()> {
    match action {
        ScenarioAction::List => {
            let active = store.active();
            for name in store.names() {
                let marker = if Some(name) == active { "*" } else { " " };
                let Some(scenario) = store.get(name) else {
                    continue;
                };
                let saved = scenario
                    .saved_at
                    .map(|t| t.to_string())
                    .unwrap_or_default();
                let description = scenario.description.as_deref().unwrap_or("");
                println!("{marker} {name:<24} {saved:<28} {description}");
            }
            Ok(())
        }
        ScenarioAction::Show { name } => {
            let (name, _) = store.resolve(name.as_deref())?;
            match store.get(&name) {
                Some(scenario) => {
                    print!(
                        "{}",
                        scenario
                            .to_yaml()
                            .map_err(|e| eyre!("serializing {name:?}: {e}"))?
                    );
                }
                // Nothing saved yet: show the built-in defaults.
                None => {
                    let defaults = Scenario {
                        description: None,
                        saved_at: None,
                        parameters: ParameterSet::default(),
                    };
                    print!(
                        "{}",
                        defaults
                            .to_yaml()
                            .map_err(|e| eyre!("serializing defaults: {e}"))?
                    );
                }
            }
            Ok(())
        }
        ScenarioAction::Save { name, description } => {
            let (_, params) = store.resolve(None)?;
            store.insert(&name, Scenario::new(params, description));
            store.set_active(&name);
            store.save()?;
            tracing::info!(scenario = name, "scenario saved");
            println!("saved scenario {name:?}");
            Ok(())
        }
        ScenarioAction::Delete { name } => {
            if store.remove(&name).is_none() {
                return Err(eyre!("scenario {name:?} not found"));
            }
            store.save()?;
            println!("deleted scenario {name:?}");
            Ok(())
        }
        ScenarioAction::Use { name } => {
            if !store.set_active(&name) {
                return Err(eyre!("scenario {name:?} not found"));
            }
            store.save()?;
            println!("active scenario is now {name:?}");
            Ok(())
        }
        ScenarioAction::Import { name, path } => {
            let yaml = fs::read_to_string(&path)
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            let scenario =
                Scenario::from_yaml(&yaml).map_err(|e| eyre!("parsing {}: {e}", path.display()))?;
            store.insert(&name, scenario);
            store.save()?;
            println!("imported scenario {name:?} from {}", path.display());
            Ok(())
        }
        ScenarioAction::Export { name, path } => {
            let scenario = store
                .get(&name)
                .ok_or_else(|| eyre!("scenario {name:?} not found"))?;
            let yaml = scenario
                .to_yaml()
                .map_err(|e| eyre!("serializing {name:?}: {e}"))?;
            fs::write(&path, yaml).wrap_err_with(|| format!("writing {}", path.display()))?;
            println!("exported scenario {name:?} to {}", path.display());
            Ok(())
        }
    }
}
