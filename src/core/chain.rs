// =============================================================================
// CHAIN — Sucre syntaxique de compréhension au-dessus de bind / map
// =============================================================================
//
// Une chaîne de bind imbriqués devient vite illisible :
//
//   x.bind(|a| y.bind(|b| z.map(|c| a + b + c)))
//
// La macro chain! écrit la même chose séquentiellement :
//
//   chain! {
//       for a in x;
//       for b in y;
//       for c in z;
//       yield a + b + c
//   }
//
// Réécriture (aucune sémantique ajoutée) :
//   for p in e; <reste>  →  Computation::bind(e, |p| chain!(<reste>))
//   for p in e; yield r  →  Computation::map(e, |p| r)
//   let p = e; <reste>   →  { let p = e; chain!(<reste>) }
//
// yield doit suivre un for : c'est le map final. Un calcul local en fin
// de chaîne s'écrit dans l'expression (yield { let c = a + b; c * 10 }).
//
// Comme l'expression de chaque étape est DANS la closure de l'étape
// précédente, elle n'est évaluée que si l'étape précédente a produit une
// valeur : le court-circuit et la paresse sont exactement ceux de bind.
//
// Fonctionne pour tout type qui implémente Computation.
//
// =============================================================================

/// Compréhension séquentielle sur n'importe quel [`Computation`].
///
/// ```
/// use catmonad::chain;
/// use catmonad::core::optional::{present, Optional};
///
/// let o: Optional<i32> = chain! {
///     for a in present(1);
///     let b = a + 1;
///     for c in present(a + b);
///     yield c * 10
/// };
/// assert_eq!(o, present(30));
/// ```
///
/// [`Computation`]: crate::core::compose::Computation
#[macro_export]
macro_rules! chain {
    (for $p:pat_param in $e:expr ; yield $r:expr $(;)?) => {
        $crate::core::compose::Computation::map($e, |$p| $r)
    };
    (for $p:pat_param in $e:expr ; $($rest:tt)+) => {
        $crate::core::compose::Computation::bind($e, |$p| $crate::chain!($($rest)+))
    };
    (let $p:pat_param = $e:expr ; $($rest:tt)+) => {{
        let $p = $e;
        $crate::chain!($($rest)+)
    }};
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use crate::core::optional::{absent, present, Optional};
    use crate::core::result::{failure, success, Result};
    use std::cell::Cell;

    fn returns_some(i: i32, calls: &Cell<u32>) -> Optional<i32> {
        calls.set(calls.get() + 1);
        present(i)
    }

    fn returns_none(calls: &Cell<u32>) -> Optional<i32> {
        calls.set(calls.get() + 1);
        absent()
    }

    #[test]
    fn test_three_options() {
        let option1 = present(1);
        let option2 = present(2);
        let option3 = present(3);

        let o = chain! {
            for a in option1;
            for b in option2;
            for c in option3;
            yield a + b + c
        };
        assert_eq!(o, present(6));
    }

    #[test]
    fn test_same_as_nested_binds() {
        let nested = present(1).bind(|a| present(2).bind(|b| present(3).map(|c| a + b + c)));
        let sugared = chain! {
            for a in present(1);
            for b in present(2);
            for c in present(3);
            yield a + b + c
        };
        assert_eq!(nested, sugared);
    }

    #[test]
    fn test_absent_in_the_middle() {
        let o = chain! {
            for a in present(1);
            for b in absent::<i32>();
            for c in present(3);
            yield a + b + c
        };
        assert!(o.is_absent());
    }

    #[test]
    fn test_later_steps_are_never_called() {
        let calls = Cell::new(0);

        let o = chain! {
            for a in returns_some(1, &calls);
            for b in returns_some(2, &calls);
            for c in returns_none(&calls);
            for d in returns_some(4, &calls);
            for e in returns_none(&calls);
            for f in returns_some(6, &calls);
            yield a + b + c + d + e + f
        };

        assert!(o.is_absent());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_values_flow_to_next_step() {
        let o = chain! {
            for a in present("Hello".to_string());
            for b in present(a + " World");
            for c in present(b + "!");
            yield c
        };
        assert_eq!(o.value_or(String::new()), "Hello World!");
    }

    #[test]
    fn test_result_first_failure() {
        let r: Result<i32, String> = chain! {
            for a in Result::from(success(1));
            for b in Result::<i32, String>::from(failure("Error description".to_string()));
            for c in Result::from(success(3));
            yield a + b + c
        };
        assert_eq!(r, Result::Err("Error description".to_string()));
    }

    #[test]
    fn test_let_and_wildcard() {
        let r: Result<(), &str> = chain! {
            for order in Result::ok(7);
            let confirmed = order * 2;
            for _ in Result::ok(confirmed);
            yield ()
        };
        assert!(r.is_ok());
    }

    #[test]
    fn test_std_option() {
        let o = chain! {
            for a in Some(2);
            for (b, c) in Some((3, 4));
            yield a * b * c
        };
        assert_eq!(o, Some(24));
    }

    #[test]
    fn test_outer_locals_stay_usable() {
        let calls = Cell::new(0);
        let label = String::from("total");

        let r: std::result::Result<String, String> = chain! {
            for a in Ok(1);
            for b in Err::<i32, String>("E1".to_string());
            for c in {
                calls.set(calls.get() + 1);
                Ok(3)
            };
            yield format!("{} = {}", label, a + b + c)
        };

        assert_eq!(r, Err("E1".to_string()));
        assert_eq!(calls.get(), 0);
        assert_eq!(label, "total");

        let r: std::result::Result<String, String> = chain! {
            for a in Ok(1);
            for b in Ok::<i32, String>(2);
            yield format!("{} = {}", label, a + b)
        };
        assert_eq!(r, Ok("total = 3".to_string()));
    }

    #[test]
    fn test_std_result() {
        let calls = Cell::new(0);
        let step = |v: i32| -> std::result::Result<i32, String> {
            calls.set(calls.get() + 1);
            Ok(v)
        };

        let r = chain! {
            for a in step(1);
            for b in step(2);
            yield a + b
        };
        assert_eq!(r, Ok(3));
        assert_eq!(calls.get(), 2);
    }
}
