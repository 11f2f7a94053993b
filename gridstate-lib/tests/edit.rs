mod common;

use gridstate_lib::error::{EditError, StoreError};
use gridstate_lib::focus::{FocusCell, Key, Modifiers};
use gridstate_lib::model::types::Money;
use gridstate_lib::model::{Record, Value, ValueType};
use gridstate_lib::settings::{MemoryBackend, SettingsProvider};
use gridstate_lib::store::{FieldUpdates, InMemoryStore, RecordStore};
use gridstate_lib::{GridConfig, GridEngine, KeyOutcome};

use common::engine;

fn press(engine: &mut GridEngine<InMemoryStore>, key: Key) -> KeyOutcome {
    engine.handle_key(key, Modifiers::NONE)
}

#[test]
fn test_enter_edits_and_commits_text() {
    let mut engine = engine();
    engine.set_focus(FocusCell::new(0, 0));

    assert_eq!(press(&mut engine, Key::Enter), KeyOutcome::EditStarted);
    assert_eq!(
        engine.edit_session().unwrap().buffer,
        "Enterprise Software License"
    );

    engine.set_edit_buffer("Platform Renewal").unwrap();
    let KeyOutcome::EditCommitted(record) = press(&mut engine, Key::Enter) else {
        panic!("expected commit");
    };
    assert_eq!(record.get_text("name"), Some("Platform Renewal"));
    assert!(record.updated_at().is_some());
    assert!(engine.edit_session().is_none());
    assert_eq!(
        engine.store().get("1").unwrap().get_text("name"),
        Some("Platform Renewal")
    );
}

#[test]
fn test_typing_into_currency_cell() {
    let mut engine = engine();
    engine.set_focus(FocusCell::new(0, 2));
    press(&mut engine, Key::Enter);
    for _ in 0.."125000".len() {
        press(&mut engine, Key::Backspace);
    }
    for c in "$9,999".chars() {
        press(&mut engine, Key::Char(c));
    }
    let KeyOutcome::EditCommitted(record) = press(&mut engine, Key::Enter) else {
        panic!("expected commit");
    };
    assert_eq!(record.value("value"), &Value::Currency(Money::from_int(9_999)));
}

#[test]
fn test_escape_cancels_without_writing() {
    let mut engine = engine();
    engine.set_focus(FocusCell::new(1, 0));
    press(&mut engine, Key::Enter);
    press(&mut engine, Key::Char('!'));
    assert_eq!(press(&mut engine, Key::Escape), KeyOutcome::EditCancelled);
    assert_eq!(
        engine.store().get("2").unwrap().get_text("name"),
        Some("Cloud Migration")
    );
    // Escape ended the edit, focus is kept
    assert_eq!(engine.focus(), Some(FocusCell::new(1, 0)));
}

#[test]
fn test_invalid_input_keeps_session_open() {
    let mut engine = engine();
    engine.set_focus(FocusCell::new(0, 1));
    press(&mut engine, Key::Enter);
    engine.set_edit_buffer("Nobody").unwrap();

    let outcome = press(&mut engine, Key::Enter);
    assert_eq!(
        outcome,
        KeyOutcome::EditRejected(EditError::InvalidValue {
            column: "owner".into(),
            input: "Nobody".into(),
            expected: ValueType::Select,
        })
    );
    assert!(engine.edit_session().is_some());

    engine.set_edit_buffer("Sarah Johnson").unwrap();
    assert!(matches!(press(&mut engine, Key::Enter), KeyOutcome::EditCommitted(_)));
}

#[test]
fn test_read_only_column_does_not_start_edit() {
    let mut engine = engine();
    engine.set_focus(FocusCell::new(0, 4));
    assert_eq!(
        engine.begin_edit(),
        Err(EditError::NotEditable("closeDate".into()))
    );
    assert_eq!(press(&mut engine, Key::Enter), KeyOutcome::Ignored);
}

#[test]
fn test_edit_without_focus() {
    let mut engine = engine();
    assert_eq!(engine.begin_edit(), Err(EditError::NoFocus));
    assert_eq!(engine.commit_edit(), Err(EditError::NotEditing));
    assert!(!engine.cancel_edit());
}

#[test]
fn test_commit_rederives_sorted_rows() {
    let mut engine = engine();
    engine.toggle_sort("value", false);
    assert_eq!(engine.displayed_ids()[0], "3");

    engine.set_focus(FocusCell::new(0, 2));
    engine.begin_edit().unwrap();
    engine.set_edit_buffer("200000").unwrap();
    engine.commit_edit().unwrap();
    assert_eq!(engine.displayed_ids(), ["2", "4", "1", "3"]);
}

#[test]
fn test_blank_percentage_clears_cell() {
    let mut engine = engine();
    engine.set_focus(FocusCell::new(2, 3));
    engine.begin_edit().unwrap();
    engine.set_edit_buffer("").unwrap();
    let record = engine.commit_edit().unwrap();
    assert!(record.value("probability").is_null());
}

// =============================================================================
// Store failures
// =============================================================================

/// Store whose record disappears while a patch is in flight.
struct VanishingStore(InMemoryStore);

impl RecordStore for VanishingStore {
    fn list(&self) -> Vec<Record> {
        self.0.list()
    }

    fn get(&self, id: &str) -> Option<Record> {
        self.0.get(id)
    }

    fn patch(&mut self, id: &str, _updates: FieldUpdates) -> Result<Record, StoreError> {
        self.0.remove(id)?;
        Err(StoreError::NotFound(id.to_string()))
    }
}

#[test]
fn test_commit_on_deleted_record_drops_session_and_clamps_focus() {
    let mut engine = GridEngine::new(
        common::registry(),
        VanishingStore(InMemoryStore::with_records(common::deals())),
        SettingsProvider::new(MemoryBackend::new()),
        GridConfig::default(),
    );
    engine.set_focus(FocusCell::new(3, 0));
    engine.begin_edit().unwrap();
    engine.set_edit_buffer("renamed").unwrap();

    assert_eq!(
        engine.commit_edit(),
        Err(EditError::Store(StoreError::NotFound("4".into())))
    );
    assert!(engine.edit_session().is_none());
    assert_eq!(engine.row_count(), 3);
    assert_eq!(engine.focus(), Some(FocusCell::new(2, 0)));
}
