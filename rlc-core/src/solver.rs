//! Solver de ressonância
//!
//! Cada chamada de [`solve`] executa no máximo um ramo, escolhido pela
//! primeira combinação de valores conhecidos na ordem de [`Branch::PRIORITY`].
//! A ordem faz parte do comportamento: com f e R conhecidos o ramo 1 vence
//! mesmo que L e C também sejam conhecidos, e o ramo Q+R+f nunca é alcançado
//! quando f e R já bastam para o ramo 1.

use std::f64::consts::PI;
use std::fmt;

use crate::error::{CircuitError, CircuitResult};
use crate::state::{CircuitState, Parameter};

/// Ramos de cálculo, em ordem de prioridade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// f, R → C, L
    ResistanceFrequency,
    /// L, C → f
    InductanceCapacitance,
    /// f, C → R
    FrequencyCapacitance,
    /// Q, R (+ f) → C, L
    QualityResistance,
}

impl Branch {
    pub const PRIORITY: [Branch; 4] = [
        Branch::ResistanceFrequency,
        Branch::InductanceCapacitance,
        Branch::FrequencyCapacitance,
        Branch::QualityResistance,
    ];

    /// Parâmetros que precisam ser conhecidos para o ramo ser escolhido
    pub fn requires(self) -> &'static [Parameter] {
        match self {
            Branch::ResistanceFrequency => &[Parameter::Frequency, Parameter::Resistance],
            Branch::InductanceCapacitance => &[Parameter::Inductance, Parameter::Capacitance],
            Branch::FrequencyCapacitance => &[Parameter::Frequency, Parameter::Capacitance],
            Branch::QualityResistance => &[Parameter::Quality, Parameter::Resistance],
        }
    }

    /// Primeiro ramo aplicável ao estado
    pub fn select(state: &CircuitState) -> Option<Branch> {
        Self::PRIORITY
            .into_iter()
            .find(|branch| branch.requires().iter().all(|p| state.is_known(*p)))
    }

    /// Cabeçalho exibido após o cálculo
    pub fn description(self) -> &'static str {
        match self {
            Branch::ResistanceFrequency => "Calculé à partir de R et f :",
            Branch::InductanceCapacitance => "Calculé à partir de L et C :",
            Branch::FrequencyCapacitance => "Calculé à partir de f et C :",
            Branch::QualityResistance => "Calculé à partir de Q, R, et f :",
        }
    }
}

/// Resultado de um cálculo bem-sucedido
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub branch: Branch,
    /// Valores derivados, na ordem em que são exibidos
    pub derived: Vec<(Parameter, f64)>,
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.branch.description())?;
        for (param, value) in &self.derived {
            match param {
                Parameter::Resistance => writeln!(f, "Résistance R = {} Ohms", value)?,
                Parameter::Inductance => writeln!(f, "Inductance L = {} H", value)?,
                Parameter::Capacitance => writeln!(f, "Capacité C = {} F", value)?,
                Parameter::Frequency => writeln!(f, "Fréquence f = {} Hz", value)?,
                Parameter::Quality => writeln!(f, "Facteur de qualité Q = {}", value)?,
            }
        }
        Ok(())
    }
}

/// Frequência angular de ressonância ω₀ = 2πf
pub fn angular_frequency(frequency: f64) -> f64 {
    2.0 * PI * frequency
}

/// Calcula os valores desconhecidos e os marca como conhecidos.
///
/// Erros não alteram o estado.
pub fn solve(state: &mut CircuitState) -> CircuitResult<Derivation> {
    let Some(branch) = Branch::select(state) else {
        tracing::debug!(known = ?state.known(), "no solver branch applies");
        return Err(CircuitError::InsufficientData);
    };
    tracing::debug!(?branch, "solver branch selected");

    let derived = match branch {
        Branch::ResistanceFrequency => {
            let (r, f) = (known(state, Parameter::Resistance)?, known(state, Parameter::Frequency)?);
            let omega0 = angular_frequency(f);
            let c = 1.0 / (r * omega0);
            let l = 1.0 / (omega0 * omega0 * c);
            vec![(Parameter::Capacitance, c), (Parameter::Inductance, l)]
        }
        Branch::InductanceCapacitance => {
            let (l, c) = (known(state, Parameter::Inductance)?, known(state, Parameter::Capacitance)?);
            let omega0 = 1.0 / (l * c).sqrt();
            vec![(Parameter::Frequency, omega0 / (2.0 * PI))]
        }
        Branch::FrequencyCapacitance => {
            let (f, c) = (known(state, Parameter::Frequency)?, known(state, Parameter::Capacitance)?);
            let omega0 = angular_frequency(f);
            vec![(Parameter::Resistance, 1.0 / (omega0 * c))]
        }
        Branch::QualityResistance => {
            let Some(f) = state.frequency else {
                return Err(CircuitError::FrequencyRequired);
            };
            let (q, r) = (known(state, Parameter::Quality)?, known(state, Parameter::Resistance)?);
            let omega0 = angular_frequency(f);
            let c = 1.0 / (r * omega0);
            let l = q * q * c * r * r;
            vec![(Parameter::Inductance, l), (Parameter::Capacitance, c)]
        }
    };

    for (param, value) in &derived {
        state.set(*param, *value);
    }

    Ok(Derivation { branch, derived })
}

fn known(state: &CircuitState, param: Parameter) -> CircuitResult<f64> {
    state.get(param).ok_or(CircuitError::InsufficientData)
}
