//! End-to-end snapshot assembly, store round-trips, and wire shapes.

mod common;

use std::collections::HashMap;

use common::{sample_accounts, sample_categories, sample_settings, sample_transactions};
use fiscus::config::EngineConfig;
use fiscus::models::{Category, CategoryKind, PlannerSettings};
use fiscus::services::snapshot::build_snapshot;
use fiscus::store::{DataStore, MemoryStore};

#[test]
fn test_snapshot_end_to_end() {
    let snapshot = build_snapshot(
        &sample_categories(),
        &sample_accounts(),
        &sample_transactions(),
        &sample_settings(),
        &EngineConfig::default(),
    )
    .unwrap();

    assert_eq!(snapshot.net_worth, 400_000.0);
    assert_eq!(snapshot.buckets.income.total, 720_000.0);
    assert_eq!(snapshot.after_tax_income.total, 576_000.0);
    assert_eq!(snapshot.net_cash_flow.total, 60_000.0);
    assert_eq!(snapshot.annual_savings, 360_000.0);
    assert_eq!(snapshot.health.score, 75);

    // The projection starts from today's net worth and is thinned for display.
    assert_eq!(snapshot.projection.first().unwrap().net_worth, 400_000.0);
    assert_eq!(snapshot.projection.first().unwrap().age, 30);
    assert!(snapshot.projection.len() < 61);
    assert_eq!(snapshot.projection.last().unwrap().age, 90);
    assert!(snapshot.projected_net_worth().unwrap() > 400_000.0);
}

#[test]
fn test_snapshot_headline() {
    let settings = sample_settings();
    let snapshot = build_snapshot(
        &sample_categories(),
        &sample_accounts(),
        &sample_transactions(),
        &settings,
        &EngineConfig::default(),
    )
    .unwrap();

    let headline = snapshot.headline(&settings);
    assert!(headline.contains("$400,000.00"));
    assert!(headline.contains("Good"));
}

#[test]
fn test_snapshot_rejects_cyclic_tree() {
    let categories = vec![
        Category::new("a", "A", CategoryKind::Expense).with_parent("b"),
        Category::new("b", "B", CategoryKind::Expense).with_parent("a"),
    ];
    let result = build_snapshot(
        &categories,
        &[],
        &[],
        &PlannerSettings::default(),
        &EngineConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_store_round_trip() {
    let mut store = MemoryStore::new();

    store.save_categories(&sample_categories()).unwrap();
    store.save_accounts(&sample_accounts()).unwrap();
    store.save_transactions(&sample_transactions()).unwrap();
    store.save_settings(&sample_settings()).unwrap();

    let categories = store.load_categories().unwrap();
    assert_eq!(categories.len(), sample_categories().len());
    assert_eq!(categories[0].id, "income");

    let settings = store.load_settings().unwrap();
    assert_eq!(settings.current_age, 35);
    assert_eq!(settings.annual_return_rate, 0.0654);

    // An empty store yields empty collections and default settings.
    let empty = MemoryStore::new();
    assert!(empty.load_categories().unwrap().is_empty());
    assert_eq!(empty.load_settings().unwrap().current_age, 30);
}

#[test]
fn test_settings_map_round_trip() {
    let settings = sample_settings();
    let restored = PlannerSettings::from_map(settings.to_map());
    assert_eq!(restored.current_age, 35);
    assert_eq!(restored.annual_return_rate, settings.annual_return_rate);

    // Garbled entries fall back to defaults instead of failing.
    let mut map = HashMap::new();
    map.insert("annual_return_rate".to_string(), "not-a-number".to_string());
    map.insert("current_age".to_string(), "41".to_string());
    let lenient = PlannerSettings::from_map(map);
    assert_eq!(lenient.annual_return_rate, 0.0654);
    assert_eq!(lenient.current_age, 41);
}

/// Category records use the store's wire shape, including lenient amounts.
#[test]
fn test_category_wire_shape() {
    let json = r#"{
        "id": "rent",
        "name": "Rent",
        "type": "expense",
        "parentCategoryId": "housing",
        "monthlyBudgets": [1500, "1,500.50", null, "oops", 0, 0, 0, 0, 0, 0, 0, 0]
    }"#;

    let category: Category = serde_json::from_str(json).unwrap();
    assert_eq!(category.parent_id.as_deref(), Some("housing"));

    let budgets = category.monthly_budgets.unwrap();
    assert_eq!(budgets.0[0], 1_500.0);
    assert_eq!(budgets.0[1], 1_500.5);
    assert_eq!(budgets.0[2], 0.0);
    assert_eq!(budgets.0[3], 0.0);

    let out = serde_json::to_value(&category).unwrap();
    assert!(out.get("parentCategoryId").is_some());
    assert!(out.get("monthlyBudgets").is_some());
    assert_eq!(out["type"], "expense");
}

/// A short vector pads with zeros on the way in.
#[test]
fn test_short_budget_vector_pads() {
    let json = r#"{"id": "x", "name": "X", "type": "expense", "monthlyBudgets": [5, 5]}"#;
    let category: Category = serde_json::from_str(json).unwrap();
    let budgets = category.monthly_budgets.unwrap();
    assert_eq!(budgets.total(), 10.0);
    assert_eq!(budgets.0[11], 0.0);
}
