// =============================================================================
// COMPOSE — map / bind / bind2 pour N'IMPORTE QUEL conteneur de calcul
// =============================================================================
//
// Optional et Result ne sont que deux instances d'une même structure :
// un conteneur à un paramètre C<T>, muni de
//
//   pure  : T → C<T>
//   map   : C<T> → (T → U)    → C<U>
//   bind  : C<T> → (T → C<U>) → C<U>
//   bind2 : bind + combinaison (t1, t2) → R
//
// Rust n'a pas de types d'ordre supérieur : on "re-lie" le paramètre avec
// un type associé générique (GAT) :
//
//   Optional<T>::Rebind<U>   = Optional<U>
//   Result<T, E>::Rebind<U>  = Result<U, E>     (E fixé)
//
// Le code client peut alors écrire UN SEUL schéma de composition pour tous
// les conteneurs (cf. la macro chain!).
//
// LOIS (vérifiées dans tests/laws.rs) :
//   identité        : x.map(id)             == x
//   composition     : x.map(f).map(g)       == x.map(g ∘ f)
//   unité à gauche  : pure(v).bind(f)       == f(v)
//   unité à droite  : x.bind(pure)          == x
//   associativité   : x.bind(f).bind(g)     == x.bind(|v| f(v).bind(g))
//
// =============================================================================

use super::optional::Optional;
use super::result::Result;

/// Un conteneur de calcul à un paramètre.
///
/// Toutes les fonctions passées sont `FnOnce` : chaque callback est appelé
/// au plus une fois, de façon synchrone, ou pas du tout.
pub trait Computation: Sized {
    /// Le type de la valeur contenue
    type Item;
    /// Le même conteneur, avec une valeur de type `U`
    type Rebind<U>: Computation<Item = U>;

    /// Injecte une valeur (Present / Ok / Some).
    fn pure(value: Self::Item) -> Self;

    fn map<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Item) -> U;

    fn bind<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Item) -> Self::Rebind<U>;

    fn bind2<U, R, F, C>(self, f: F, combine: C) -> Self::Rebind<R>
    where
        F: FnOnce(&Self::Item) -> Self::Rebind<U>,
        C: FnOnce(Self::Item, U) -> R;
}

impl<T> Computation for Optional<T> {
    type Item = T;
    type Rebind<U> = Optional<U>;

    fn pure(value: T) -> Self {
        Optional::Present(value)
    }

    fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::map(self, f)
    }

    fn bind<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        Optional::bind(self, f)
    }

    fn bind2<U, R, F, C>(self, f: F, combine: C) -> Optional<R>
    where
        F: FnOnce(&T) -> Optional<U>,
        C: FnOnce(T, U) -> R,
    {
        Optional::bind2(self, f, combine)
    }
}

impl<T, E> Computation for Result<T, E> {
    type Item = T;
    type Rebind<U> = Result<U, E>;

    fn pure(value: T) -> Self {
        Result::Ok(value)
    }

    fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Result::map(self, f)
    }

    fn bind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Result::bind(self, f)
    }

    fn bind2<U, R, F, C>(self, f: F, combine: C) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<U, E>,
        C: FnOnce(T, U) -> R,
    {
        Result::bind2(self, f, combine)
    }
}

// Les types standards suivent le même contrat.

impl<T> Computation for Option<T> {
    type Item = T;
    type Rebind<U> = Option<U>;

    fn pure(value: T) -> Self {
        Some(value)
    }

    fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        Option::map(self, f)
    }

    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }

    fn bind2<U, R, F, C>(self, f: F, combine: C) -> Option<R>
    where
        F: FnOnce(&T) -> Option<U>,
        C: FnOnce(T, U) -> R,
    {
        self.and_then(|t1| f(&t1).map(|t2| combine(t1, t2)))
    }
}

impl<T, E> Computation for std::result::Result<T, E> {
    type Item = T;
    type Rebind<U> = std::result::Result<U, E>;

    fn pure(value: T) -> Self {
        Ok(value)
    }

    fn map<U, F>(self, f: F) -> std::result::Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        std::result::Result::map(self, f)
    }

    fn bind<U, F>(self, f: F) -> std::result::Result<U, E>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
    {
        self.and_then(f)
    }

    fn bind2<U, R, F, C>(self, f: F, combine: C) -> std::result::Result<R, E>
    where
        F: FnOnce(&T) -> std::result::Result<U, E>,
        C: FnOnce(T, U) -> R,
    {
        self.and_then(|t1| f(&t1).map(|t2| combine(t1, t2)))
    }
}

// =============================================================================
// Fonctions libres : la même composition, sans syntaxe de méthode
// =============================================================================

pub fn pure<C: Computation>(value: C::Item) -> C {
    C::pure(value)
}

pub fn map<C, U, F>(c: C, f: F) -> C::Rebind<U>
where
    C: Computation,
    F: FnOnce(C::Item) -> U,
{
    c.map(f)
}

pub fn bind<C, U, F>(c: C, f: F) -> C::Rebind<U>
where
    C: Computation,
    F: FnOnce(C::Item) -> C::Rebind<U>,
{
    c.bind(f)
}

pub fn bind2<C, U, R, F, G>(c: C, f: F, combine: G) -> C::Rebind<R>
where
    C: Computation,
    F: FnOnce(&C::Item) -> C::Rebind<U>,
    G: FnOnce(C::Item, U) -> R,
{
    c.bind2(f, combine)
}
