//! Exportação dos resultados para arquivo texto

use std::fs;
use std::path::Path;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::error::{CircuitError, CircuitResult};
use crate::state::CircuitState;
use crate::units::{fixed, Conversions, LabelStyle};

/// Data e hora no formato `Y-M-D H:M:S`, sem zeros à esquerda
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    format!(
        "{}-{}-{} {}:{}:{}",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

/// Verifica se R, L, C e f são conhecidos
pub fn ensure_exportable(state: &CircuitState) -> CircuitResult<()> {
    let required = [
        state.resistance,
        state.inductance,
        state.capacitance,
        state.frequency,
    ];
    if required.iter().all(Option::is_some) {
        Ok(())
    } else {
        Err(CircuitError::ExportIncomplete)
    }
}

/// Gera o documento exportado. Exige R, L, C e f conhecidos.
pub fn render_report(state: &CircuitState, at: &NaiveDateTime) -> CircuitResult<String> {
    let (Some(r), Some(l), Some(c), Some(f)) = (
        state.resistance,
        state.inductance,
        state.capacitance,
        state.frequency,
    ) else {
        return Err(CircuitError::ExportIncomplete);
    };

    let mut out = format!("Résultats calculés (Date : {}):\n", format_timestamp(at));
    out.push_str(&format!("R = {} Ohms\n", fixed(r)));
    out.push_str(&format!("f = {} Hz\n", fixed(f)));
    out.push_str(&format!("L = {} H\n", fixed(l)));
    out.push_str(&format!("C = {} F\n", fixed(c)));
    if let Some(q) = state.quality {
        out.push_str(&format!("Facteur de qualité Q = {}\n", fixed(q)));
    }

    let conversions = Conversions { inductance: l, capacitance: c };
    out.push_str("Conversions des unités :\n");
    out.push_str(&conversions.render(LabelStyle::Symbol));
    Ok(out)
}

/// Escreve o relatório em `path` com a hora local atual.
///
/// Nada é escrito se o estado estiver incompleto.
pub fn export_results(state: &CircuitState, path: &Path) -> CircuitResult<()> {
    export_results_at(state, path, &Local::now().naive_local())
}

/// Igual a [`export_results`], com horário explícito
pub fn export_results_at(
    state: &CircuitState,
    path: &Path,
    at: &NaiveDateTime,
) -> CircuitResult<()> {
    if path.as_os_str().is_empty() {
        return Err(CircuitError::EmptyFileName);
    }
    let report = render_report(state, at)?;

    fs::write(path, report).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "export failed");
        CircuitError::FileCreation {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    tracing::info!(path = %path.display(), "results exported");
    Ok(())
}
