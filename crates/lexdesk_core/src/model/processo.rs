//! Process record model.
//!
//! # Responsibility
//! - Define the named read model replacing raw positional rows.
//! - Define the nine-field input shape for creation.
//! - Offer the closed canonical status set to presentation callers.
//!
//! # Invariants
//! - The store itself never validates `status`; `StatusProcesso` is a
//!   presentation-boundary convention, not a storage constraint.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProcessoId = i64;

/// Canonical status values offered by the UI's fixed three-option selection.
///
/// The store stores and returns plain strings verbatim; this enum exists so
/// presentation code can work with a closed set instead of free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusProcesso {
    /// Case is in progress.
    EmAndamento,
    /// Case work is concluded.
    Concluido,
    /// Case is closed out.
    Finalizado,
}

impl StatusProcesso {
    /// All canonical values, in UI display order.
    pub const ALL: [Self; 3] = [Self::EmAndamento, Self::Concluido, Self::Finalizado];

    /// Returns the exact string persisted for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmAndamento => "Em andamento",
            Self::Concluido => "Concluído",
            Self::Finalizado => "Finalizado",
        }
    }
}

impl Display for StatusProcesso {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the canonical three-value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError {
    pub value: String,
}

impl Display for StatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown process status `{}`", self.value)
    }
}

impl Error for StatusParseError {}

impl FromStr for StatusProcesso {
    type Err = StatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Em andamento" => Ok(Self::EmAndamento),
            "Concluído" => Ok(Self::Concluido),
            "Finalizado" => Ok(Self::Finalizado),
            other => Err(StatusParseError {
                value: other.to_string(),
            }),
        }
    }
}

/// Canonical read model for one legal case row.
///
/// Field names mirror the `processos` columns so serialized records match
/// the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processo {
    /// Store-assigned primary key; unique, immutable, never reused.
    pub id: ProcessoId,
    /// Case number; duplicates are allowed.
    pub numero_processo: i64,
    /// Freeform date-range text; stored unparsed and unvalidated.
    pub data: String,
    /// Legal action description.
    pub acao: String,
    /// Court instance.
    pub instancia: String,
    /// Procedural stage.
    pub fase: String,
    /// Client identifier (CPF/CNPJ) kept as an opaque string; filter key.
    pub cliente: String,
    /// Company name.
    pub empresa: String,
    /// Responsible lawyer.
    pub advogado: String,
    /// Status text stored verbatim; canonically one of `StatusProcesso`.
    pub status: String,
}

/// Input shape for creating a process record; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessoDraft {
    pub numero_processo: i64,
    pub data: String,
    pub acao: String,
    pub instancia: String,
    pub fase: String,
    pub cliente: String,
    pub empresa: String,
    pub advogado: String,
    pub status: String,
}

impl ProcessoDraft {
    /// Builds a draft using a canonical status value.
    ///
    /// Free-text statuses can still be set directly on the `status` field;
    /// the store accepts either verbatim.
    #[allow(clippy::too_many_arguments)]
    pub fn with_status(
        numero_processo: i64,
        data: impl Into<String>,
        acao: impl Into<String>,
        instancia: impl Into<String>,
        fase: impl Into<String>,
        cliente: impl Into<String>,
        empresa: impl Into<String>,
        advogado: impl Into<String>,
        status: StatusProcesso,
    ) -> Self {
        Self {
            numero_processo,
            data: data.into(),
            acao: acao.into(),
            instancia: instancia.into(),
            fase: fase.into(),
            cliente: cliente.into(),
            empresa: empresa.into(),
            advogado: advogado.into(),
            status: status.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StatusParseError, StatusProcesso};
    use std::str::FromStr;

    #[test]
    fn canonical_statuses_round_trip_through_strings() {
        for status in StatusProcesso::ALL {
            assert_eq!(StatusProcesso::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected_by_the_closed_set() {
        let err = StatusProcesso::from_str("Arquivado").unwrap_err();
        assert_eq!(
            err,
            StatusParseError {
                value: "Arquivado".to_string()
            }
        );
    }
}
