//! Sample deals pipeline shown by the terminal front-end.

use chrono::NaiveDate;
use gridstate_lib::model::types::Money;
use gridstate_lib::model::{ColumnDescriptor, ColumnRegistry, Record, Value, ValueType};

pub const OWNERS: [&str; 4] = ["John Smith", "Sarah Johnson", "Mike Wilson", "Lisa Brown"];
pub const STAGES: [&str; 6] = ["Lead", "Qualified", "Proposal", "Negotiation", "Won", "Lost"];
pub const STATUSES: [&str; 3] = ["Active", "On Hold", "Closed"];

/// Noun used by the row count in the totals footer.
pub const ROW_NOUN: &str = "deals";

/// The deals grid columns in default display order.
pub fn registry() -> ColumnRegistry {
    ColumnRegistry::new(vec![
        ColumnDescriptor::new("name", "Deal Name", ValueType::Text)
            .sortable()
            .filterable()
            .editable(),
        ColumnDescriptor::new("company", "Company", ValueType::Text)
            .sortable()
            .filterable()
            .editable(),
        ColumnDescriptor::new("owner", "Owner", ValueType::Select)
            .sortable()
            .filterable()
            .editable()
            .options(OWNERS),
        ColumnDescriptor::new("value", "Deal Value", ValueType::Currency)
            .sortable()
            .editable(),
        ColumnDescriptor::new("stage", "Stage", ValueType::Select)
            .sortable()
            .filterable()
            .editable()
            .options(STAGES),
        ColumnDescriptor::new("status", "Status", ValueType::Select)
            .sortable()
            .filterable()
            .editable()
            .options(STATUSES),
        ColumnDescriptor::new("probability", "Probability", ValueType::Percentage)
            .sortable()
            .editable(),
        ColumnDescriptor::new("closeDate", "Close Date", ValueType::Date)
            .sortable()
            .editable(),
    ])
}

struct Deal {
    id: &'static str,
    name: &'static str,
    company: &'static str,
    owner: &'static str,
    value: i64,
    stage: &'static str,
    status: &'static str,
    probability: f64,
    close: (i32, u32, u32),
    source: &'static str,
    priority: &'static str,
}

const DEALS: [Deal; 8] = [
    Deal {
        id: "1",
        name: "Enterprise Software License",
        company: "TechCorp Solutions",
        owner: "John Smith",
        value: 125_000,
        stage: "Negotiation",
        status: "Active",
        probability: 85.0,
        close: (2024, 2, 15),
        source: "Website",
        priority: "High",
    },
    Deal {
        id: "2",
        name: "Cloud Migration Project",
        company: "Global Industries Inc",
        owner: "Sarah Johnson",
        value: 85_000,
        stage: "Proposal",
        status: "Active",
        probability: 65.0,
        close: (2024, 3, 1),
        source: "Referral",
        priority: "Medium",
    },
    Deal {
        id: "3",
        name: "Security Audit Services",
        company: "SecureBank Ltd",
        owner: "Mike Wilson",
        value: 45_000,
        stage: "Qualified",
        status: "Active",
        probability: 40.0,
        close: (2024, 2, 28),
        source: "Cold Outreach",
        priority: "Low",
    },
    Deal {
        id: "4",
        name: "CRM Implementation",
        company: "StartupXYZ",
        owner: "Lisa Brown",
        value: 32_000,
        stage: "Won",
        status: "Closed",
        probability: 100.0,
        close: (2024, 1, 20),
        source: "Partnership",
        priority: "Medium",
    },
    Deal {
        id: "5",
        name: "Mobile App Development",
        company: "RetailChain Corp",
        owner: "John Smith",
        value: 95_000,
        stage: "Lead",
        status: "Active",
        probability: 20.0,
        close: (2024, 4, 15),
        source: "Website",
        priority: "High",
    },
    Deal {
        id: "6",
        name: "Data Analytics Platform",
        company: "FinanceFirst Bank",
        owner: "Sarah Johnson",
        value: 150_000,
        stage: "Negotiation",
        status: "Active",
        probability: 75.0,
        close: (2024, 3, 10),
        source: "Trade Show",
        priority: "High",
    },
    Deal {
        id: "7",
        name: "Website Redesign",
        company: "Creative Agency",
        owner: "Mike Wilson",
        value: 25_000,
        stage: "Lost",
        status: "Closed",
        probability: 0.0,
        close: (2024, 1, 10),
        source: "Referral",
        priority: "Low",
    },
    Deal {
        id: "8",
        name: "Training Services",
        company: "EducationCorp",
        owner: "Lisa Brown",
        value: 18_000,
        stage: "Proposal",
        status: "On Hold",
        probability: 30.0,
        close: (2024, 3, 20),
        source: "Website",
        priority: "Medium",
    },
];

/// The sample deals in natural order.
pub fn sample_deals() -> Vec<Record> {
    DEALS.iter().map(to_record).collect()
}

fn to_record(deal: &Deal) -> Record {
    let (y, m, d) = deal.close;
    Record::new(deal.id)
        .set("name", deal.name)
        .set("company", deal.company)
        .set("owner", Value::Select(deal.owner.to_string()))
        .set("value", Money::from_int(deal.value))
        .set("stage", Value::Select(deal.stage.to_string()))
        .set("status", Value::Select(deal.status.to_string()))
        .set("probability", Value::Percentage(deal.probability))
        .set("closeDate", NaiveDate::from_ymd_opt(y, m, d))
        .set("source", deal.source)
        .set("priority", deal.priority)
}
