// =============================================================================
// CORE — Les deux conteneurs et leur composition
// =============================================================================
//
// Ce module regroupe toute la logique de composition pure :
// pas d'I/O, pas de threads, pas d'état mutable partagé. Uniquement des
// valeurs immuables et des fonctions appelées une fois ou jamais.
//
// Architecture :
//   optional → Optional<T> : une valeur, ou rien (+ marqueur NONE)
//   result   → Result<T, E> : une valeur, ou une erreur (+ Success / Failure)
//   compose  → le trait Computation : map / bind / bind2 génériques
//   chain    → la macro chain! (compréhension au-dessus de bind / map)
//
// optional et result ne se connaissent pas : ce sont deux feuilles.
//
// =============================================================================

pub mod optional;
pub mod result;
pub mod compose;
pub mod chain;
