//! Entrada e saída do console
//!
//! [`Console`] é genérico sobre `BufRead`/`Write`, então a mesma sessão roda
//! sobre stdin/stdout ou sobre um `Cursor` nos testes.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{CircuitError, CircuitResult};

/// Interpreta uma linha como valor estritamente positivo e finito
pub fn parse_positive(line: &str) -> Option<f64> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Interpreta uma linha como opção numérica de menu
pub fn parse_choice(line: &str) -> Option<u32> {
    line.trim().parse().ok()
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Escreve uma linha
    pub fn say(&mut self, text: impl Display) -> CircuitResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Escreve sem quebra de linha e lê a resposta
    pub fn prompt(&mut self, text: impl Display) -> CircuitResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Lê uma linha, sem o terminador
    pub fn read_line(&mut self) -> CircuitResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CircuitError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Pede um valor até receber um número estritamente positivo
    pub fn collect_positive(&mut self, label: &str) -> CircuitResult<f64> {
        loop {
            let line = self.prompt(format_args!("Entrez la valeur de {} (> 0): ", label))?;
            match parse_positive(&line) {
                Some(value) => return Ok(value),
                None => {
                    tracing::debug!(input = %line, label, "rejected value");
                    self.say(format_args!(
                        "Erreur : {} doit être strictement supérieur à 0.",
                        label
                    ))?;
                }
            }
        }
    }

    /// Lê a opção de menu; `None` para entrada não numérica
    pub fn read_choice(&mut self) -> CircuitResult<Option<u32>> {
        let line = self.prompt("Votre choix : ")?;
        Ok(parse_choice(&line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
