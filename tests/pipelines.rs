// =============================================================================
// PIPELINES — Scénarios de bout en bout sur l'API publique
// =============================================================================

use std::cell::RefCell;

use catmonad::chain;
use catmonad::core::optional::{absent, present, Optional, NONE};
use catmonad::core::result::{err, failure, ok, success, Result};
use catmonad::error::ExtractError;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u64,
    confirmed: bool,
}

/// Enregistre l'ordre d'appel des étapes.
#[derive(Default)]
struct Journal {
    steps: RefCell<Vec<&'static str>>,
}

impl Journal {
    fn record(&self, step: &'static str) {
        self.steps.borrow_mut().push(step);
    }

    fn read_order(&self, id: u64) -> Result<Order, String> {
        self.record("read");
        success(Order { id, confirmed: false }).into()
    }

    fn confirm_order(&self, order: Order) -> Result<Order, String> {
        self.record("confirm");
        success(Order { confirmed: true, ..order }).into()
    }

    fn validate_order(&self, order: &Order) -> Result<(), String> {
        self.record("validate");
        if order.id == 13 {
            failure(format!("commande {} refusée", order.id)).into()
        } else {
            success(()).into()
        }
    }

    fn update_order(&self, _order: &Order) -> Result<(), String> {
        self.record("update");
        success(()).into()
    }

    fn process(&self, id: u64) -> Result<Order, String> {
        chain! {
            for order in self.read_order(id);
            for confirmed in self.confirm_order(order);
            for _ in self.validate_order(&confirmed);
            for _ in self.update_order(&confirmed);
            yield confirmed
        }
    }
}

#[test]
fn test_order_pipeline_success() {
    let journal = Journal::default();
    let processed = journal.process(1);
    assert_eq!(processed, ok(Order { id: 1, confirmed: true }));
    assert!(processed.match_with(|order| order.confirmed, |_| false));
    assert_eq!(*journal.steps.borrow(), vec!["read", "confirm", "validate", "update"]);
}

#[test]
fn test_order_pipeline_stops_at_first_error() {
    let journal = Journal::default();
    let outcome = journal.process(13);
    assert_eq!(outcome, err("commande 13 refusée".to_string()));
    assert_eq!(*journal.steps.borrow(), vec!["read", "confirm", "validate"]);
    assert_eq!(
        outcome.into_value(),
        Err(ExtractError::Failed("commande 13 refusée".to_string()))
    );
}

#[test]
fn test_mid_sequence_absence_skips_third_producer() {
    let journal = Journal::default();
    let third = |v: i32| {
        journal.record("third");
        present(v)
    };

    let o = present(1)
        .bind2(|_| absent::<i32>(), |a, b| a + b)
        .bind2(|_| third(3), |ab, c| ab + c);

    assert_eq!(o, absent());
    assert!(journal.steps.borrow().is_empty());
}

#[test]
fn test_tags_promote_where_needed() {
    fn lookup(key: &str) -> Optional<u32> {
        match key {
            "answer" => present(42),
            _ => NONE.into(),
        }
    }

    fn parse(text: &str) -> Result<u32, String> {
        match text.parse::<u32>() {
            Ok(v) => success(v).into(),
            Err(e) => failure(e.to_string()).into(),
        }
    }

    assert_eq!(lookup("answer").value_or(0), 42);
    assert_eq!(lookup("question").value_or_else(|| 7), 7);
    assert_eq!(parse("12").map(|v| v + 1), ok(13));
    assert!(parse("douze").is_err());
}

#[test]
fn test_optional_and_result_combined_by_client() {
    // La conversion Optional → Result reste côté client.
    fn required(o: Optional<i32>, name: &str) -> Result<i32, String> {
        o.match_with(ok, || err(format!("{} manquant", name)))
    }

    let total = chain! {
        for a in required(present(2), "a");
        for b in required(absent(), "b");
        yield a + b
    };
    assert_eq!(total, err("b manquant".to_string()));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_shape() {
    let o = present(1);
    assert_eq!(serde_json::to_string(&o).unwrap(), r#"{"Present":1}"#);
    assert_eq!(serde_json::to_string(&absent::<i32>()).unwrap(), r#""Absent""#);

    let r: Result<i32, String> = err("boom".to_string());
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, r#"{"Err":"boom"}"#);
    let back: Result<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}
