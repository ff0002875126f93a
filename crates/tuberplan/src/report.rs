//! Fixed-width text reports for the terminal.

use std::fmt::Write as _;

use tuberplan_core::{SensitivityTable, SimulationResult};

pub fn simulation_report(scenario: &str, result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scenario: {scenario}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<14} {:>9} {:>14} {:>15} {:>10} {:>10} {:>14} {:>12}",
        "Generation", "Area (ha)", "Slips", "Tubers", "Tons", "Days fed", "VitA chld-days", "Cost"
    );
    for g in &result.generations {
        let _ = writeln!(
            out,
            "{:<14} {:>9.1} {:>14.0} {:>15.0} {:>10.1} {:>10.1} {:>14.0} {:>12.2}",
            g.name,
            g.area_ha,
            g.slips_planted,
            g.tubers_harvested,
            g.tons_harvested,
            g.days_fed,
            g.vitamin_a_child_days,
            g.cost
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Chain totals");
    let _ = writeln!(out, "  Harvest:            {:>14.1} t", result.total_tons);
    let _ = writeln!(out, "  Days fed:           {:>14.1}", result.total_days_fed);
    let _ = writeln!(out, "  Cost:               {:>14.2}", result.total_cost);
    let _ = writeln!(
        out,
        "  VitA child-days:    {:>14.0}",
        result.total_vitamin_a_child_days
    );
    let _ = writeln!(
        out,
        "  Children covered/yr:{:>14}",
        result.children_fed_annually
    );
    let _ = writeln!(
        out,
        "  Cost per person:    {:>14.2}",
        result.cost_per_person
    );
    let _ = writeln!(
        out,
        "  Cost/person/day:    {:>14.4}",
        result.cost_per_person_per_day
    );

    let annual = &result.annual;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Annual projection ({:.0}-day chain, scale {:.4}, cadence cap {:.2}/yr)",
        annual.chain_days, annual.scale_factor, annual.cycles_per_year
    );
    let _ = writeln!(out, "  Harvest:            {:>14.1} t", annual.tons);
    let _ = writeln!(out, "  Days fed:           {:>14.1}", annual.days_fed);
    let _ = writeln!(out, "  Cost:               {:>14.2}", annual.cost);
    out
}

pub fn sensitivity_report(table: &SensitivityTable) -> String {
    let mut out = String::new();
    if table.is_empty() {
        let _ = writeln!(out, "No numeric parameter named {:?}.", table.parameter);
        return out;
    }

    let _ = writeln!(
        out,
        "Sensitivity: {} (baseline {})",
        table.parameter, table.baseline_value
    );
    let _ = writeln!(
        out,
        "{:>7} {:>14} {:>12} {:>13} {:>14} {:>13}",
        "Factor", "Value", "Days fed", "Δ days", "Cost", "Δ cost"
    );
    for row in &table.rows {
        let _ = writeln!(
            out,
            "{:>7.2} {:>14.3} {:>12.1} {:>+13.1} {:>14.2} {:>+13.2}",
            row.factor,
            row.parameter_value,
            row.days_fed,
            row.days_fed_delta,
            row.cost,
            row.cost_delta
        );
    }
    out
}

pub fn comparison_report(
    name_a: &str,
    a: &SimulationResult,
    name_b: &str,
    b: &SimulationResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>16} {:>16} {:>16}",
        "Metric", name_a, name_b, "Delta"
    );
    let rows = [
        ("Total tons", a.total_tons, b.total_tons),
        ("Total days fed", a.total_days_fed, b.total_days_fed),
        ("Total cost", a.total_cost, b.total_cost),
        (
            "VitA child-days",
            a.total_vitamin_a_child_days,
            b.total_vitamin_a_child_days,
        ),
        ("Cost per person", a.cost_per_person, b.cost_per_person),
        ("Annual tons", a.annual.tons, b.annual.tons),
        ("Annual days fed", a.annual.days_fed, b.annual.days_fed),
        ("Annual cost", a.annual.cost, b.annual.cost),
    ];
    for (label, va, vb) in rows {
        let _ = writeln!(
            out,
            "{label:<24} {va:>16.2} {vb:>16.2} {:>+16.2}",
            vb - va
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use tuberplan_core::{ParameterSet, SensitivityTable, analyze, simulate};

    use super::*;

    #[test]
    fn test_simulation_report_lists_all_nodes() {
        let report = simulation_report("default", &simulate(&ParameterSet::default()));

        for name in ["Generation 1", "Generation 2b", "Generation 3c"] {
            assert!(report.contains(name), "missing {name}");
        }
        assert!(report.contains("Chain totals"));
        assert!(report.contains("Annual projection"));
    }

    #[test]
    fn test_sensitivity_report_empty_table() {
        let report = sensitivity_report(&SensitivityTable::empty("bogus"));
        assert!(report.contains("No numeric parameter"));
    }

    #[test]
    fn test_sensitivity_report_has_five_rows() {
        let table = analyze("harvest_efficiency", &ParameterSet::default());
        let report = sensitivity_report(&table);

        // Header line, column line, then the 5 sweep rows.
        assert_eq!(report.lines().count(), 7);
    }

    #[test]
    fn test_comparison_report_delta_column() {
        let a = simulate(&ParameterSet::default());
        let b = simulate(&ParameterSet {
            tons_per_hectare: 12.0,
            ..ParameterSet::default()
        });

        let report = comparison_report("base", &a, "high-yield", &b);
        assert!(report.contains("base"));
        assert!(report.contains("high-yield"));
        assert!(report.contains("Total tons"));
    }
}
