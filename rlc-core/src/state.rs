//! Estado do circuito RLC

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grandeza do circuito endereçável pelo menu e pelo solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    Resistance,
    Inductance,
    Capacitance,
    Frequency,
    Quality,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Resistance,
        Parameter::Inductance,
        Parameter::Capacitance,
        Parameter::Frequency,
        Parameter::Quality,
    ];

    /// Símbolo usado nas fórmulas
    pub fn symbol(self) -> &'static str {
        match self {
            Parameter::Resistance => "R",
            Parameter::Inductance => "L",
            Parameter::Capacitance => "C",
            Parameter::Frequency => "f",
            Parameter::Quality => "Q",
        }
    }

    /// Rótulo mostrado ao pedir o valor
    pub fn prompt_label(self) -> &'static str {
        match self {
            Parameter::Resistance => "R (Ohms)",
            Parameter::Inductance => "L (Henrys)",
            Parameter::Capacitance => "C (Farads)",
            Parameter::Frequency => "f (Hz)",
            Parameter::Quality => "Q (Facteur de qualité)",
        }
    }

    /// Nome no submenu de especificação
    pub fn menu_label(self) -> &'static str {
        match self {
            Parameter::Resistance => "Résistance R",
            Parameter::Inductance => "Inductance L",
            Parameter::Capacitance => "Capacité C",
            Parameter::Frequency => "Fréquence f",
            Parameter::Quality => "Facteur de qualité Q",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Valores conhecidos do circuito.
///
/// `None` significa desconhecido: um valor só existe depois de digitado
/// ou derivado pelo solver, e nunca volta a ser desconhecido.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitState {
    /// Resistência (Ohms)
    pub resistance: Option<f64>,
    /// Indutância (Henrys)
    pub inductance: Option<f64>,
    /// Capacitância (Farads)
    pub capacitance: Option<f64>,
    /// Frequência de ressonância (Hz)
    pub frequency: Option<f64>,
    /// Fator de qualidade (adimensional)
    pub quality: Option<f64>,
}

impl CircuitState {
    /// Cria estado com tudo desconhecido
    pub fn new() -> Self {
        Self::default()
    }

    /// Define um valor e o marca como conhecido
    pub fn with(mut self, param: Parameter, value: f64) -> Self {
        self.set(param, value);
        self
    }

    pub fn get(&self, param: Parameter) -> Option<f64> {
        match param {
            Parameter::Resistance => self.resistance,
            Parameter::Inductance => self.inductance,
            Parameter::Capacitance => self.capacitance,
            Parameter::Frequency => self.frequency,
            Parameter::Quality => self.quality,
        }
    }

    pub fn set(&mut self, param: Parameter, value: f64) {
        tracing::debug!(param = param.symbol(), value, "parameter known");
        let slot = match param {
            Parameter::Resistance => &mut self.resistance,
            Parameter::Inductance => &mut self.inductance,
            Parameter::Capacitance => &mut self.capacitance,
            Parameter::Frequency => &mut self.frequency,
            Parameter::Quality => &mut self.quality,
        };
        *slot = Some(value);
    }

    pub fn is_known(&self, param: Parameter) -> bool {
        self.get(param).is_some()
    }

    /// Parâmetros atualmente conhecidos, na ordem R, L, C, f, Q
    pub fn known(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|p| self.is_known(*p))
            .collect()
    }

    /// L e C, quando ambos conhecidos
    pub fn reactive_pair(&self) -> Option<(f64, f64)> {
        Some((self.inductance?, self.capacitance?))
    }
}
