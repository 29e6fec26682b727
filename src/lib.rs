// =============================================================================
// CATMONAD — Composition de calculs absents ou en échec
// =============================================================================
//
// Catmonad fournit deux types somme paramétriques et leurs combinateurs :
//
//   Optional<T>  = T + 1   (une valeur, ou rien)
//   Result<T, E> = T + E   (une valeur, ou une erreur typée)
//
// Le code client enchaîne des étapes avec map / bind / bind2 sans jamais
// tester "à la main" l'absence ou l'échec : la propagation est automatique,
// et l'appelant ne regarde le résultat qu'à la fin (match_with, value_or).
//
// Architecture :
//   core/    → les conteneurs et le trait Computation (aucune I/O)
//   error    → les erreurs d'extraction vérifiée
//
// Concepts fondamentaux :
//   map   = foncteur (transformer la valeur contenue)
//   bind  = monade (enchaîner un calcul qui dépend de la valeur)
//   bind2 = bind + combinaison des deux valeurs intermédiaires
//   chain! = compréhension séquentielle au-dessus de bind / map
//
// =============================================================================

pub mod core;
pub mod error;
