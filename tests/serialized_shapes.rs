use chrono::NaiveDate;
use pocket_ledger::{view, Category, Kind, Ledger, Money, Settings, TransactionForm, ValidationError};
use serde_json::json;

fn ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .append(
            Kind::Expense,
            Money::from_cents(5_000),
            "Market",
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
        .unwrap();
    ledger
}

#[test]
fn transaction_serializes_with_iso_date_and_label() {
    let ledger = ledger();
    let stored = ledger.list_chronological(Default::default()).next().unwrap();
    let value = serde_json::to_value(stored).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "kind": "expense",
            "amount": 5000,
            "description": "Market",
            "category": "Food",
            "date": "2024-01-05",
        })
    );
}

#[test]
fn unknown_category_survives_serialization() {
    let value = serde_json::to_value(Category::Unknown("Pets".into())).unwrap();
    assert_eq!(value, json!("Pets"));
    let category: Category = serde_json::from_value(json!("pets")).unwrap();
    assert_eq!(category, Category::Unknown("pets".into()));
    assert!(serde_json::from_value::<Category>(json!("")).is_err());
}

#[test]
fn feed_row_carries_presentation_fields() {
    let feed = view::feed(&ledger(), &Settings::default());
    let value = serde_json::to_value(&feed.rows[0]).unwrap();
    assert_eq!(value["glyph"], "🍔");
    assert_eq!(value["category"], "Alimentação");
    assert_eq!(value["date"], "05/01/2024");
    assert_eq!(value["sign"], "-");
    assert_eq!(value["amount"], 50.0);
    assert_eq!(value["class"], "expense");
    assert_eq!(value["kind"], "expense");
}

#[test]
fn form_reads_the_page_payload() {
    let form: TransactionForm = serde_json::from_value(json!({
        "kind": "receita",
        "amount": 1500.75,
        "description": "Freelance",
        "category": "Salário",
    }))
    .unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let draft = form.parse(today).unwrap();
    assert_eq!(draft.kind, Kind::Income);
    assert_eq!(draft.amount, Money::from_cents(150_075));
    assert_eq!(draft.category, Category::Salary);
    assert_eq!(draft.date, today);
}

#[test]
fn form_accepts_the_amount_as_input_text() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let form: TransactionForm = serde_json::from_value(json!({
        "kind": "despesa",
        "amount": "12.5",
        "description": "Lunch",
        "category": "Alimentação",
    }))
    .unwrap();
    assert_eq!(form.parse(today).unwrap().amount, Money::from_cents(1250));

    let form: TransactionForm = serde_json::from_value(json!({
        "kind": "despesa",
        "amount": "abc",
        "description": "Lunch",
        "category": "Alimentação",
    }))
    .unwrap();
    assert_eq!(
        form.parse(today),
        Err(ValidationError::NonNumericAmount("abc".to_string()))
    );
}
