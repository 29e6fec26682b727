// =============================================================================
// ERROR — Erreurs d'extraction
// =============================================================================
//
// L'absence (Optional) et l'échec typé (Result<T, E>) ne sont PAS des
// erreurs de la bibliothèque : ce sont des valeurs, propagées par
// map / bind / bind2.
//
// ExtractError n'apparaît qu'au moment où l'appelant veut sortir la valeur
// du conteneur sans fournir de valeur par défaut (into_value, into_error).
//
// =============================================================================

use thiserror::Error;

/// Erreur d'extraction vérifiée.
///
/// Produite uniquement par `Optional::into_value`, `Result::into_value`
/// et `Result::into_error`, jamais par map / bind / bind2.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Extraction d'un `Optional::Absent`
    #[error("aucune valeur présente")]
    Absent,
    /// Extraction de la valeur d'un `Result::Err` ; contient l'erreur affichée
    #[error("le calcul a échoué : {0}")]
    Failed(String),
    /// Extraction de l'erreur d'un `Result::Ok`
    #[error("le calcul a réussi, aucune erreur à extraire")]
    Succeeded,
}
