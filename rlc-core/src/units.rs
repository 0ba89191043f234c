//! Conversões de unidade para L e C

use std::fmt::Write as _;

use crate::error::{CircuitError, CircuitResult};
use crate::state::CircuitState;

/// Casas decimais de todo valor numérico exibido ou exportado
pub const PRECISION: usize = 12;

/// Escala de unidade: fator sobre a unidade SI, símbolo e nome por extenso
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pub factor: f64,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const INDUCTANCE_SCALES: [UnitScale; 3] = [
    UnitScale { factor: 1.0, symbol: "H", name: "Henrys" },
    UnitScale { factor: 1e3, symbol: "mH", name: "millihenrys" },
    UnitScale { factor: 1e6, symbol: "µH", name: "microhenrys" },
];

pub const CAPACITANCE_SCALES: [UnitScale; 3] = [
    UnitScale { factor: 1.0, symbol: "F", name: "Farads" },
    UnitScale { factor: 1e9, symbol: "nF", name: "nanofarads" },
    UnitScale { factor: 1e12, symbol: "pF", name: "picofarads" },
];

/// Forma do rótulo de unidade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// `H (Henrys)`, usado no console
    Verbose,
    /// `H`, usado no arquivo exportado
    Symbol,
}

/// Formata em ponto fixo com [`PRECISION`] casas
pub fn fixed(value: f64) -> String {
    format!("{:.*}", PRECISION, value)
}

/// L e C em todas as escalas
#[derive(Debug, Clone, PartialEq)]
pub struct Conversions {
    pub inductance: f64,
    pub capacitance: f64,
}

impl Conversions {
    /// Exige L e C conhecidos
    pub fn from_state(state: &CircuitState) -> CircuitResult<Self> {
        let (inductance, capacitance) = state
            .reactive_pair()
            .ok_or(CircuitError::ConversionsUnavailable)?;
        Ok(Self { inductance, capacitance })
    }

    pub fn inductance_values(&self) -> impl Iterator<Item = (f64, UnitScale)> + '_ {
        INDUCTANCE_SCALES.iter().map(|s| (self.inductance * s.factor, *s))
    }

    pub fn capacitance_values(&self) -> impl Iterator<Item = (f64, UnitScale)> + '_ {
        CAPACITANCE_SCALES.iter().map(|s| (self.capacitance * s.factor, *s))
    }

    /// Bloco de conversões, sem a linha de título
    pub fn render(&self, style: LabelStyle) -> String {
        let mut out = String::new();
        out.push_str("Inductance (L) :\n");
        for (value, scale) in self.inductance_values() {
            push_line(&mut out, value, scale, style);
        }
        out.push_str("Capacité (C) :\n");
        for (value, scale) in self.capacitance_values() {
            push_line(&mut out, value, scale, style);
        }
        out
    }
}

fn push_line(out: &mut String, value: f64, scale: UnitScale, style: LabelStyle) {
    // Escrever em String não falha
    let _ = match style {
        LabelStyle::Verbose => writeln!(out, " - {} {} ({})", fixed(value), scale.symbol, scale.name),
        LabelStyle::Symbol => writeln!(out, " - {} {}", fixed(value), scale.symbol),
    };
}

/// Relatório de conversões exibido pelo menu
pub fn report_conversions(state: &CircuitState) -> CircuitResult<String> {
    let conversions = Conversions::from_state(state)?;
    Ok(format!(
        "\nConversions des unités :\n{}",
        conversions.render(LabelStyle::Verbose)
    ))
}
