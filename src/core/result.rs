// =============================================================================
// RESULT — Une valeur de type T, ou une erreur de type E
// =============================================================================
//
// Result<T, E> est la somme T + E :
//   - Ok(v)  : le calcul a réussi
//   - Err(e) : le calcul a échoué, avec une erreur du type choisi par
//              l'appelant (un message, une enum d'erreurs métier...)
//
// Le type de l'erreur n'est jamais imposé. La case inutilisée n'existe pas :
// pas de T "par défaut" dans un Err, pas de E "par défaut" dans un Ok.
//
// ÉTIQUETTES :
//   success(v) → Success<T>   (ne connaît pas E)
//   failure(e) → Failure<E>   (ne connaît pas T)
//   Chacune devient un Result<T, E> complet via From / Into, là où le
//   type est attendu.
//
// SÉMANTIQUE D'ÉCHEC :
//   Dans une chaîne de bind, c'est la PREMIÈRE erreur qui est propagée ;
//   les étapes suivantes ne sont jamais évaluées.
//   Il n'y a pas de mode "accumulation d'erreurs" : pour lancer plusieurs
//   validations indépendantes et collecter tous les échecs, ce type n'est
//   pas le bon outil. Il modélise un calcul séquentiel dépendant.
//
// =============================================================================

use std::fmt::Display;

use tracing::debug;

use crate::error::ExtractError;

/// Le résultat d'un calcul faillible : `Ok(T)` ou `Err(E)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// Succès
    Ok(T),
    /// Échec
    Err(E),
}

/// Étiquette de succès, sans paramètre d'erreur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Success<T>(pub T);

/// Étiquette d'échec, sans paramètre de valeur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Failure<E>(pub E);

impl<T> Success<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E> Failure<E> {
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// Crée une étiquette de succès : `let r: Result<i32, String> = success(1).into();`
pub fn success<T>(value: T) -> Success<T> {
    Success(value)
}

/// Crée une étiquette d'échec : `let r: Result<i32, String> = failure("oups".into()).into();`
pub fn failure<E>(error: E) -> Failure<E> {
    Failure(error)
}

/// Raccourci pour `Result::Ok(value)`.
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Raccourci pour `Result::Err(error)`.
pub fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}

impl<T, E> Result<T, E> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Réducteur total : exactement une des deux branches est appelée.
    pub fn match_with<R, S, F>(self, on_ok: S, on_err: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(v) => on_ok(v),
            Self::Err(e) => on_err(e),
        }
    }

    /// Retourne la valeur, ou `default` en cas d'échec (l'erreur est perdue).
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    /// `default_fn` reçoit l'erreur ; elle n'est évaluée qu'en cas d'échec.
    pub fn value_or_else<F>(self, default_fn: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => default_fn(e),
        }
    }

    /// Foncteur : transforme la valeur de succès, l'erreur passe telle quelle.
    pub fn map<R, F>(self, f: F) -> Result<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Ok(v) => Result::Ok(f(v)),
            Self::Err(e) => Result::Err(e),
        }
    }

    /// Transforme l'erreur ; `f` n'est appelée qu'en cas d'échec.
    pub fn map_err<E2, F>(self, f: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(f(e)),
        }
    }

    /// Composition séquentielle avec court-circuit sur la première erreur.
    pub fn bind<R, F>(self, f: F) -> Result<R, E>
    where
        F: FnOnce(T) -> Result<R, E>,
    {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    /// `bind(|t1| f(&t1).map(|t2| combine(t1, t2)))`, même dérivation que
    /// [`Optional::bind2`](crate::core::optional::Optional::bind2).
    pub fn bind2<T2, R, F, C>(self, f: F, combine: C) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<T2, E>,
        C: FnOnce(T, T2) -> R,
    {
        self.bind(|t1| f(&t1).map(|t2| combine(t1, t2)))
    }

    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }

    /// Extraction vérifiée de l'erreur : `Err(ExtractError::Succeeded)` si
    /// le calcul a réussi.
    pub fn into_error(self) -> std::result::Result<E, ExtractError> {
        match self {
            Self::Ok(_) => {
                debug!(
                    value_type = std::any::type_name::<T>(),
                    "extraction de l'erreur d'un Result en succès"
                );
                Err(ExtractError::Succeeded)
            }
            Self::Err(e) => Ok(e),
        }
    }
}

impl<T, E: Display> Result<T, E> {
    /// Extraction vérifiée de la valeur : l'erreur est convertie en
    /// `ExtractError::Failed` avec son message.
    pub fn into_value(self) -> std::result::Result<T, ExtractError> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => {
                let message = e.to_string();
                debug!(error = %message, "extraction de la valeur d'un Result en échec");
                Err(ExtractError::Failed(message))
            }
        }
    }
}

impl<T, E> From<Success<T>> for Result<T, E> {
    fn from(s: Success<T>) -> Self {
        Self::Ok(s.0)
    }
}

impl<T, E> From<Failure<E>> for Result<T, E> {
    fn from(f: Failure<E>) -> Self {
        Self::Err(f.0)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(r: std::result::Result<T, E>) -> Self {
        match r {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(r: Result<T, E>) -> Self {
        match r {
            Result::Ok(v) => Ok(v),
            Result::Err(e) => Err(e),
        }
    }
}
