//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use gridstate_lib::model::types::Money;
use gridstate_lib::model::{ColumnDescriptor, ColumnRegistry, Record, ValueType};
use gridstate_lib::settings::{MemoryBackend, SettingsProvider};
use gridstate_lib::store::InMemoryStore;
use gridstate_lib::{GridConfig, GridEngine};

pub fn registry() -> ColumnRegistry {
    ColumnRegistry::new(vec![
        ColumnDescriptor::new("name", "Deal Name", ValueType::Text)
            .sortable()
            .filterable()
            .editable(),
        ColumnDescriptor::new("owner", "Owner", ValueType::Select)
            .sortable()
            .filterable()
            .editable()
            .options(["John Smith", "Sarah Johnson"]),
        ColumnDescriptor::new("value", "Value", ValueType::Currency)
            .sortable()
            .editable(),
        ColumnDescriptor::new("probability", "Probability", ValueType::Percentage)
            .sortable()
            .editable(),
        ColumnDescriptor::new("closeDate", "Close Date", ValueType::Date).sortable(),
    ])
}

pub fn deal(id: &str, name: &str, owner: &str, value: i64, probability: f64) -> Record {
    Record::new(id)
        .set("name", name)
        .set("owner", gridstate_lib::model::Value::Select(owner.to_string()))
        .set("value", Money::from_int(value))
        .set("probability", gridstate_lib::model::Value::Percentage(probability))
        .set("closeDate", date(2024, 3, 1))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn deals() -> Vec<Record> {
    vec![
        deal("1", "Enterprise Software License", "John Smith", 125_000, 75.0),
        deal("2", "Cloud Migration", "Sarah Johnson", 1_500, 50.0),
        deal("3", "Training Services", "John Smith", 499, 90.0),
        deal("4", "annual support", "Sarah Johnson", 80_000, 25.0),
    ]
}

pub fn engine() -> GridEngine<InMemoryStore> {
    engine_with(SettingsProvider::new(MemoryBackend::new()))
}

pub fn engine_with(settings: SettingsProvider) -> GridEngine<InMemoryStore> {
    GridEngine::new(
        registry(),
        InMemoryStore::with_records(deals()),
        settings,
        GridConfig::default(),
    )
}

pub fn ids(engine: &GridEngine<InMemoryStore>) -> Vec<String> {
    engine.displayed_ids()
}
