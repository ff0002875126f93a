//! Flat row-oriented exports.
//!
//! The simulation CSV preserves node order and carries every per-node field
//! followed by every aggregate scalar, so a spreadsheet sees the same chain
//! the report prints.

use std::fmt::Write as _;

use tuberplan_core::{SensitivityTable, SimulationResult};

pub fn simulation_csv(result: &SimulationResult) -> String {
    let mut out = String::new();
    out.push_str(
        "generation,area_ha,slips_planted,tubers_harvested,tons_harvested,\
         days_fed,vitamin_a_mcg,vitamin_a_child_days,cost\n",
    );
    for g in &result.generations {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            g.name,
            g.area_ha,
            g.slips_planted,
            g.tubers_harvested,
            g.tons_harvested,
            g.days_fed,
            g.vitamin_a_mcg,
            g.vitamin_a_child_days,
            g.cost
        );
    }

    out.push('\n');
    out.push_str("aggregate,value\n");
    let aggregates = [
        ("total_tons", result.total_tons),
        ("total_days_fed", result.total_days_fed),
        ("total_cost", result.total_cost),
        (
            "total_vitamin_a_child_days",
            result.total_vitamin_a_child_days,
        ),
        (
            "children_fed_annually",
            result.children_fed_annually as f64,
        ),
        ("cost_per_person", result.cost_per_person),
        ("cost_per_person_per_day", result.cost_per_person_per_day),
        ("chain_days", result.annual.chain_days),
        ("cycles_per_year", result.annual.cycles_per_year),
        ("annual_scale_factor", result.annual.scale_factor),
        ("annual_tons", result.annual.tons),
        ("annual_days_fed", result.annual.days_fed),
        ("annual_cost", result.annual.cost),
    ];
    for (key, value) in aggregates {
        let _ = writeln!(out, "{key},{value}");
    }
    out
}

/// One CSV for any number of sensitivity tables; the parameter key is a
/// column so single-parameter and whole-set sweeps share a shape.
pub fn sensitivity_csv(tables: &[SensitivityTable]) -> String {
    let mut out = String::new();
    out.push_str("parameter,factor,parameter_value,days_fed,days_fed_delta,cost,cost_delta\n");
    for table in tables {
        for row in &table.rows {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{}",
                table.parameter,
                row.factor,
                row.parameter_value,
                row.days_fed,
                row.days_fed_delta,
                row.cost,
                row.cost_delta
            );
        }
    }
    out
}
