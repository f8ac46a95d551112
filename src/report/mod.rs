//! Dashboard aggregation and static advice
//!
//! Joins the usage ledger against the appliance catalog and prices every
//! event. Events whose appliance can no longer be resolved are skipped and
//! reported as warnings instead of failing the whole report.

use crate::core::{Appliance, Error, Result, UsageEvent};
use crate::pricing::{compute_single, round2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Energy-saving tips returned with every single calculation
pub const TIPS: [&str; 4] = [
    "\u{1F4A1} Use LED bulbs instead of CFL to save up to 80% energy.",
    "\u{1F300} Set AC temperature to 24\u{B0}C to save 15% energy.",
    "\u{1F50C} Turn off appliances in standby mode to save 10% electricity.",
    "\u{1F31E} Use natural light during daytime instead of electric lights.",
];

/// The full tip list, in order
pub fn tips() -> Vec<String> {
    TIPS.iter().map(|tip| tip.to_string()).collect()
}

/// One chart point: appliance name and energy rounded to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One priced usage event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRow {
    pub usage_id: i64,
    pub appliance_name: String,
    pub hours_used: f64,
    pub energy_kwh: f64,
    pub cost: f64,
}

/// A usage event whose appliance could not be resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingReferenceWarning {
    pub usage_id: i64,
    pub appliance_id: i64,
}

/// Aggregated view over the full usage history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub series: Vec<SeriesPoint>,
    pub rows: Vec<UsageRow>,
    pub warnings: Vec<MissingReferenceWarning>,
}

impl Dashboard {
    /// Number of events skipped for unresolved appliances
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Total unrounded energy across all rows
    pub fn total_energy_kwh(&self) -> f64 {
        self.rows.iter().map(|row| row.energy_kwh).sum()
    }

    /// Total cost across all rows
    pub fn total_cost(&self) -> f64 {
        self.rows.iter().map(|row| row.cost).sum()
    }

    /// Flatten into the shape the dashboard page consumes
    pub fn view(&self) -> DashboardView {
        DashboardView {
            labels: self.series.iter().map(|p| p.label.clone()).collect(),
            values: self.series.iter().map(|p| p.value).collect(),
            usage_data: self
                .rows
                .iter()
                .map(|row| UsageDatum {
                    appliance: row.appliance_name.clone(),
                    hours: row.hours_used,
                    energy: row.energy_kwh,
                    cost: row.cost,
                })
                .collect(),
        }
    }
}

/// Dashboard data as handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub usage_data: Vec<UsageDatum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageDatum {
    pub appliance: String,
    pub hours: f64,
    pub energy: f64,
    pub cost: f64,
}

/// Resolve the appliance a usage event refers to
pub fn resolve<'a>(
    appliances: &HashMap<i64, &'a Appliance>,
    event: &UsageEvent,
) -> Result<&'a Appliance> {
    appliances
        .get(&event.appliance_id)
        .copied()
        .ok_or(Error::MissingAppliance {
            usage_id: event.id,
            appliance_id: event.appliance_id,
        })
}

/// Price every usage event in ledger order
pub fn build_dashboard(appliances: &[Appliance], events: &[UsageEvent]) -> Dashboard {
    let by_id: HashMap<i64, &Appliance> = appliances.iter().map(|a| (a.id, a)).collect();
    let mut dashboard = Dashboard::default();

    for event in events {
        let appliance = match resolve(&by_id, event) {
            Ok(appliance) => appliance,
            Err(e) => {
                log::warn!("Skipping dashboard row: {}", e);
                dashboard.warnings.push(MissingReferenceWarning {
                    usage_id: event.id,
                    appliance_id: event.appliance_id,
                });
                continue;
            }
        };

        let priced = compute_single(appliance, event.hours_used);

        dashboard.series.push(SeriesPoint {
            label: appliance.name.clone(),
            value: round2(priced.energy_kwh),
        });
        dashboard.rows.push(UsageRow {
            usage_id: event.id,
            appliance_name: appliance.name.clone(),
            hours_used: event.hours_used,
            energy_kwh: priced.energy_kwh,
            cost: priced.cost,
        });
    }

    dashboard
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Appliance> {
        vec![
            Appliance { id: 1, name: "Fan".into(), power: 75.0 },
            Appliance { id: 2, name: "Air Conditioner".into(), power: 1500.0 },
            Appliance { id: 3, name: "LED Bulb".into(), power: 10.0 },
        ]
    }

    fn event(id: i64, appliance_id: i64, hours_used: f64) -> UsageEvent {
        UsageEvent { id, appliance_id, hours_used }
    }

    #[test]
    fn test_rows_follow_ledger_order() {
        let appliances = catalog();
        let events = vec![event(1, 2, 3.0), event(2, 1, 3.5), event(3, 2, 1.0)];

        let dashboard = build_dashboard(&appliances, &events);

        let labels: Vec<&str> = dashboard.series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Air Conditioner", "Fan", "Air Conditioner"]);
        assert_eq!(dashboard.rows.len(), 3);
        assert_eq!(dashboard.warning_count(), 0);

        for (row, ev) in dashboard.rows.iter().zip(&events) {
            let appliance = appliances.iter().find(|a| a.id == ev.appliance_id).unwrap();
            let expected = compute_single(appliance, ev.hours_used);
            assert_eq!(row.usage_id, ev.id);
            assert_eq!(row.hours_used, ev.hours_used);
            assert_eq!(row.energy_kwh, expected.energy_kwh);
            assert_eq!(row.cost, expected.cost);
        }
    }

    #[test]
    fn test_series_values_are_rounded() {
        let dashboard = build_dashboard(&catalog(), &[event(1, 1, 3.5)]);

        assert_eq!(dashboard.series[0].value, 0.26);
        assert!((dashboard.rows[0].energy_kwh - 0.2625).abs() < 1e-9);
    }

    #[test]
    fn test_dangling_references_are_skipped() {
        let events = vec![event(1, 1, 1.0), event(2, 9, 2.0), event(3, 3, 4.0), event(4, 7, 1.0)];

        let dashboard = build_dashboard(&catalog(), &events);

        assert_eq!(dashboard.rows.len(), 2);
        assert_eq!(dashboard.series.len(), 2);
        assert_eq!(dashboard.warning_count(), 2);
        assert_eq!(
            dashboard.warnings,
            vec![
                MissingReferenceWarning { usage_id: 2, appliance_id: 9 },
                MissingReferenceWarning { usage_id: 4, appliance_id: 7 },
            ]
        );
    }

    #[test]
    fn test_resolve_reports_missing_appliance() {
        let appliances = catalog();
        let by_id: HashMap<i64, &Appliance> = appliances.iter().map(|a| (a.id, a)).collect();

        assert_eq!(resolve(&by_id, &event(1, 3, 1.0)).unwrap().name, "LED Bulb");
        assert!(matches!(
            resolve(&by_id, &event(5, 42, 1.0)),
            Err(Error::MissingAppliance { usage_id: 5, appliance_id: 42 })
        ));
    }

    #[test]
    fn test_empty_ledger() {
        let dashboard = build_dashboard(&catalog(), &[]);

        assert!(dashboard.rows.is_empty());
        assert_eq!(dashboard.total_energy_kwh(), 0.0);
        assert_eq!(dashboard.total_cost(), 0.0);
    }

    #[test]
    fn test_totals_and_view() {
        let dashboard = build_dashboard(&catalog(), &[event(1, 2, 2.0), event(2, 3, 5.0)]);

        // 3.0 kWh + 0.05 kWh at 8 per kWh
        assert!((dashboard.total_energy_kwh() - 3.05).abs() < 1e-9);
        assert!((dashboard.total_cost() - 24.4).abs() < 1e-9);

        let view = dashboard.view();
        assert_eq!(view.labels, vec!["Air Conditioner", "LED Bulb"]);
        assert_eq!(view.values, vec![3.0, 0.05]);
        assert_eq!(view.usage_data[1].appliance, "LED Bulb");
        assert_eq!(view.usage_data[1].hours, 5.0);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["labels"][0], "Air Conditioner");
        assert_eq!(json["usage_data"][0]["cost"], 24.0);
    }

    #[test]
    fn test_tips_are_complete_and_ordered() {
        let tips = tips();

        assert_eq!(tips.len(), 4);
        assert!(tips[0].contains("LED bulbs"));
        assert!(tips[1].contains("24\u{B0}C"));
        assert!(tips[2].contains("standby"));
        assert!(tips[3].contains("natural light"));
    }
}
