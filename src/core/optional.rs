// =============================================================================
// OPTIONAL — Une valeur de type T, ou rien
// =============================================================================
//
// Optional<T> est la somme (coproduit) 1 + T :
//   - Present(v) : la valeur est là
//   - Absent     : il n'y a rien
//
// Un seul des deux états existe à la fois. Absent ne porte AUCUNE valeur :
// on ne fabrique jamais de T "par défaut" pour remplir la case vide.
//
// COMPOSITION :
//   map   : Optional<T> → (T → R)           → Optional<R>
//   bind  : Optional<T> → (T → Optional<R>) → Optional<R>
//   bind2 : bind + combinaison des deux valeurs intermédiaires
//
//   Dès qu'une étape renvoie Absent, toutes les étapes suivantes sont
//   court-circuitées : leurs fonctions ne sont JAMAIS appelées.
//
// EXEMPLE :
//   present(1)
//       .bind2(|_| present(2), |a, b| a + b)
//       .bind2(|_| present(3), |ab, c| ab + c)   →  Present(6)
//
// =============================================================================

use tracing::debug;

use crate::error::ExtractError;

/// Une valeur optionnelle : `Present(T)` ou `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// Aucune valeur (ordonnée avant toute valeur présente, comme `None`)
    Absent,
    /// La valeur est présente
    Present(T),
}

/// Marqueur "aucune valeur", indépendant de T.
///
/// Il se convertit en n'importe quel `Optional<T>` là où le type est attendu :
/// `let o: Optional<String> = NONE.into();`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nothing;

/// L'instance réutilisable du marqueur.
pub const NONE: Nothing = Nothing;

/// Raccourci pour `Optional::Present(value)`.
pub fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Raccourci pour `Optional::Absent`, avec le type explicite.
pub fn absent<T>() -> Optional<T> {
    Optional::Absent
}

/// Alias de [`present`].
pub fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Le marqueur [`NONE`], à convertir avec `.into()`.
pub fn none() -> Nothing {
    NONE
}

impl<T> Optional<T> {
    /// Crée un Optional présent.
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Crée un Optional absent.
    pub fn absent() -> Self {
        Optional::Absent
    }

    /// Convertit une valeur "nullable" (en Rust : `Option<T>`).
    /// `None` → `Absent`, `Some(v)` → `Present(v)`.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => Optional::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Réducteur total : exactement une des deux branches est appelée.
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Optional::Present(v) => on_present(v),
            Optional::Absent => on_absent(),
        }
    }

    /// Retourne la valeur, ou `default` si absente.
    pub fn value_or(self, default: T) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => default,
        }
    }

    /// Comme [`value_or`](Self::value_or), mais `default_fn` n'est évaluée
    /// que si la valeur est absente.
    pub fn value_or_else<F>(self, default_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => default_fn(),
        }
    }

    /// Foncteur : applique `f` à la valeur présente.
    /// `f` n'est pas appelée si la valeur est absente.
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(v) => Optional::Present(f(v)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Composition séquentielle (le "flatMap").
    ///
    /// `map(f)` équivaut à `bind(|v| present(f(v)))`, sans le ré-emballage.
    pub fn bind<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Optional::Present(v) => f(v),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Deux étapes enchaînées, puis combinaison des deux valeurs :
    /// `bind(|t1| f(&t1).map(|t2| combine(t1, t2)))`.
    ///
    /// `f` reçoit une référence pour que `t1` puisse ensuite être déplacée
    /// dans `combine` sans exiger `T: Clone`.
    pub fn bind2<T2, R, F, C>(self, f: F, combine: C) -> Optional<R>
    where
        F: FnOnce(&T) -> Optional<T2>,
        C: FnOnce(T, T2) -> R,
    {
        self.bind(|t1| f(&t1).map(|t2| combine(t1, t2)))
    }

    /// Garde la valeur seulement si elle satisfait le prédicat.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(v) => {
                if predicate(&v) {
                    Optional::Present(v)
                } else {
                    Optional::Absent
                }
            }
            Optional::Absent => Optional::Absent,
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Extraction vérifiée : `Err(ExtractError::Absent)` au lieu de paniquer.
    pub fn into_value(self) -> Result<T, ExtractError> {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Absent => {
                debug!(
                    value_type = std::any::type_name::<T>(),
                    "extraction d'un Optional absent"
                );
                Err(ExtractError::Absent)
            }
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Nothing> for Optional<T> {
    fn from(_: Nothing) -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Present(v) => Some(v),
            Optional::Absent => None,
        }
    }
}

/// Extension "nullable → Optional", utilisable en fin de chaîne :
/// `map.get(&key).copied().into_optional()`.
pub trait FromNullable<T> {
    fn into_optional(self) -> Optional<T>;
}

impl<T> FromNullable<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        Optional::from_nullable(self)
    }
}
