//! # ⚡ rlc-core — Calculadora de circuitos RLC ressonantes
//!
//! A partir de um subconjunto de {R, L, C, f, Q}, deriva os demais valores
//! pelas fórmulas de ressonância, converte L e C em várias escalas e exporta
//! os resultados para um arquivo texto com data e hora.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Session (menu)              │
//! │  ┌───────────────────────────┐  │
//! │  │  Console                  │  │
//! │  │  (prompt + validação)     │  │
//! │  └───────────────────────────┘  │
//! │  ┌───────────────────────────┐  │
//! │  │  CircuitState             │  │
//! │  │  (R, L, C, f, Q)          │  │
//! │  └───────────────────────────┘  │
//! │   solver · units · export       │
//! └─────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use rlc_core::{solve, CircuitState, Parameter};
//!
//! let mut state = CircuitState::new()
//!     .with(Parameter::Resistance, 50.0)
//!     .with(Parameter::Frequency, 60.0);
//!
//! let derivation = solve(&mut state)?;
//! assert!(state.capacitance.is_some() && state.inductance.is_some());
//! println!("{derivation}");
//! # Ok::<(), rlc_core::CircuitError>(())
//! ```

pub mod console;
pub mod error;
pub mod export;
pub mod menu;
pub mod solver;
pub mod state;
pub mod units;

pub use console::Console;
pub use error::{CircuitError, CircuitResult};
pub use export::{export_results, render_report};
pub use menu::{MainCommand, Session, SpecifyCommand};
pub use solver::{solve, Branch, Derivation};
pub use state::{CircuitState, Parameter};
pub use units::{report_conversions, Conversions};

#[cfg(test)]
mod tests;
