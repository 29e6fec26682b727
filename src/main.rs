// =============================================================================
// CATMONAD — Point d'entrée : démonstration des combinateurs
// =============================================================================
//
// Ce main.rs montre un exemple complet :
//   1. Créer des Optional et les réduire avec match_with
//   2. Enchaîner plusieurs Optional (bind2, chain!) avec court-circuit
//   3. Créer des Result via les étiquettes success / failure
//   4. Un pipeline métier (commande) qui s'arrête à la première erreur
//
// =============================================================================

use std::collections::HashMap;

use catmonad::chain;
use catmonad::core::optional::{absent, present, FromNullable, Optional, NONE};
use catmonad::core::result::{failure, success, Result};
use thiserror::Error;

/// Les erreurs métier du pipeline de commande.
/// Le type d'erreur est choisi par l'appelant, pas par la bibliothèque.
#[derive(Debug, Clone, PartialEq, Error)]
enum OrderError {
    #[error("commande {0} introuvable")]
    NotFound(u64),
    #[error("commande {0} vide, impossible de la confirmer")]
    Empty(u64),
    #[error("montant {0} au-delà du plafond autorisé")]
    OverLimit(u32),
    #[error("commande {0} non confirmée")]
    NotConfirmed(u64),
}

#[derive(Debug, Clone)]
struct Order {
    id: u64,
    amount: u32,
    confirmed: bool,
}

struct OrderStore {
    orders: HashMap<u64, Order>,
}

impl OrderStore {
    fn read(&self, id: u64) -> Result<Order, OrderError> {
        match self.orders.get(&id).cloned().into_optional() {
            Optional::Present(order) => success(order).into(),
            Optional::Absent => failure(OrderError::NotFound(id)).into(),
        }
    }
}

fn confirm(order: Order) -> Result<Order, OrderError> {
    if order.amount == 0 {
        return failure(OrderError::Empty(order.id)).into();
    }
    success(Order { confirmed: true, ..order }).into()
}

fn validate(order: &Order) -> Result<(), OrderError> {
    if order.amount > 10_000 {
        return failure(OrderError::OverLimit(order.amount)).into();
    }
    success(()).into()
}

fn update(order: &Order) -> Result<(), OrderError> {
    if !order.confirmed {
        return failure(OrderError::NotConfirmed(order.id)).into();
    }
    success(()).into()
}

fn process(store: &OrderStore, id: u64) -> Result<u64, OrderError> {
    chain! {
        for order in store.read(id);
        for confirmed in confirm(order);
        for _ in validate(&confirmed);
        for _ in update(&confirmed);
        yield confirmed.id
    }
}

fn main() {
    println!("╔══════════════════════════════════════════════════╗");
    println!("║      CATMONAD — Optional / Result                ║");
    println!("║      Composition de calculs absents ou en échec  ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Optional et match_with
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Optional ═══\n");

    let answer = present(42);
    let nothing: Optional<i32> = NONE.into();
    for o in [answer, nothing] {
        let text = o.match_with(|i| i.to_string(), || "No value".to_string());
        println!("  {:?} → {}", o, text);
    }
    println!();

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : Enchaînement et court-circuit
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : bind2 / chain! ═══\n");

    let six = present(1)
        .bind2(|_| present(2), |a, b| a + b)
        .bind2(|_| present(3), |ab, c| ab + c);
    println!("  1 + 2 + 3            → {:?}", six);

    let broken = chain! {
        for a in present(1);
        for b in absent::<i32>();
        for c in present(3);
        yield a + b + c
    };
    println!("  1 + (absent) + 3     → {:?}", broken);

    let greeting = chain! {
        for a in present("Hello".to_string());
        for b in present(a + " World");
        yield b + "!"
    };
    println!("  \"Hello\" puis \"World\" → {}\n", greeting.value_or_else(String::new));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Result via les étiquettes
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : Result ═══\n");

    let ok: Result<i32, String> = success(100).into();
    let ko: Result<i32, String> = failure("Some error occured".to_string()).into();
    for r in [ok, ko] {
        let mapped = r.map(|x| x * 2 + 1);
        println!(
            "  {}",
            mapped.match_with(|v| format!("succès : {}", v), |e| format!("échec : {}", e))
        );
    }
    println!();

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Pipeline de commande
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : Pipeline de commande ═══\n");

    let store = OrderStore {
        orders: HashMap::from([
            (1, Order { id: 1, amount: 250, confirmed: false }),
            (2, Order { id: 2, amount: 0, confirmed: false }),
            (3, Order { id: 3, amount: 50_000, confirmed: false }),
        ]),
    };

    for id in [1, 2, 3, 4] {
        let outcome = process(&store, id);
        println!(
            "  commande {} → {}",
            id,
            outcome.match_with(|id| format!("✓ traitée ({})", id), |e| format!("✗ {}", e))
        );
    }

    println!("\n═══════════════════════════════════════════════════");
    println!("La première erreur arrête la chaîne, les étapes suivantes");
    println!("ne sont jamais évaluées.");
    println!("═══════════════════════════════════════════════════");
}
