//! Erros do calculador RLC
//!
//! As mensagens de `Display` são as mesmas exibidas ao usuário no console.

use thiserror::Error;

pub type CircuitResult<T> = Result<T, CircuitError>;

/// Erros de cálculo, conversão e exportação
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// Nenhum ramo do solver se aplica aos valores conhecidos
    #[error("Pas assez de données pour effectuer les calculs.")]
    InsufficientData,

    /// Q e R conhecidos, mas falta f
    #[error("Fréquence f est nécessaire pour utiliser Q et R.")]
    FrequencyRequired,

    /// L ou C desconhecido
    #[error("Veuillez d'abord calculer ou spécifier les valeurs de L et C.")]
    ConversionsUnavailable,

    /// R, L, C e f precisam ser conhecidos antes de exportar
    #[error("Veuillez calculer toutes les valeurs avant d'exporter.")]
    ExportIncomplete,

    #[error("Erreur : le nom du fichier ne peut pas être vide.")]
    EmptyFileName,

    /// Falha ao criar ou escrever o arquivo de exportação
    #[error("Erreur : Impossible de créer le fichier.")]
    FileCreation { path: String, reason: String },

    /// Entrada padrão encerrada
    #[error("Fin de l'entrée standard.")]
    EndOfInput,

    /// Erro de I/O no console
    #[error("Erreur d'entrée/sortie : {0}")]
    Io(String),
}

impl From<std::io::Error> for CircuitError {
    fn from(err: std::io::Error) -> Self {
        CircuitError::Io(err.to_string())
    }
}
