//! Laço de menus interativo
//!
//! ```text
//! MainMenu ──1──▶ SpecifyMenu ──6──▶ MainMenu
//!    │  2,3,4 executam e voltam ao MainMenu
//!    └──5 / fim da entrada──▶ Terminated
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use crate::console::Console;
use crate::error::{CircuitError, CircuitResult};
use crate::export::{ensure_exportable, export_results};
use crate::solver::solve;
use crate::state::{CircuitState, Parameter};
use crate::units::report_conversions;

/// Opções do menu principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    Specify,
    Calculate,
    Conversions,
    Export,
    Quit,
}

impl MainCommand {
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(MainCommand::Specify),
            2 => Some(MainCommand::Calculate),
            3 => Some(MainCommand::Conversions),
            4 => Some(MainCommand::Export),
            5 => Some(MainCommand::Quit),
            _ => None,
        }
    }
}

/// Opções do submenu de especificação
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifyCommand {
    Set(Parameter),
    Finish,
}

impl SpecifyCommand {
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1..=5 => Some(SpecifyCommand::Set(Parameter::ALL[choice as usize - 1])),
            6 => Some(SpecifyCommand::Finish),
            _ => None,
        }
    }
}

const MAIN_MENU: &str = "\
==== Menu ====
1. Spécifier les valeurs connues (R, L, C, f, Q)
2. Calculer les valeurs inconnues
3. Afficher les conversions des unités
4. Exporter les résultats dans un fichier
5. Quitter";

const INVALID_CHOICE: &str = "Choix invalide. Veuillez réessayer.";

/// Sessão interativa: o estado do circuito e o console que o manipula
pub struct Session<R, W> {
    state: CircuitState,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            state: CircuitState::new(),
            console: Console::new(input, output),
        }
    }

    pub fn state(&self) -> &CircuitState {
        &self.state
    }

    pub fn into_parts(self) -> (CircuitState, W) {
        (self.state, self.console.into_output())
    }

    /// Roda até "Quitter" ou fim da entrada.
    ///
    /// Só erros de I/O do console são propagados.
    pub fn run(&mut self) -> CircuitResult<()> {
        match self.main_menu() {
            Err(CircuitError::EndOfInput) => {
                tracing::debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> CircuitResult<()> {
        loop {
            self.console.say(MAIN_MENU)?;
            let Some(command) = self.console.read_choice()?.and_then(MainCommand::from_choice) else {
                self.console.say(INVALID_CHOICE)?;
                continue;
            };
            tracing::debug!(?command, "main menu");

            match command {
                MainCommand::Specify => self.specify_menu()?,
                MainCommand::Calculate => self.calculate()?,
                MainCommand::Conversions => self.show_conversions()?,
                MainCommand::Export => self.export()?,
                MainCommand::Quit => {
                    self.console.say("Programme terminé. Au revoir !")?;
                    return Ok(());
                }
            }
        }
    }

    fn specify_menu(&mut self) -> CircuitResult<()> {
        loop {
            self.console.say("Quelles valeurs connaissez-vous ?")?;
            for (i, param) in Parameter::ALL.iter().enumerate() {
                self.console.say(format_args!("{}. {}", i + 1, param.menu_label()))?;
            }
            self.console.say("6. Terminer la spécification")?;

            match self.console.read_choice()?.and_then(SpecifyCommand::from_choice) {
                Some(SpecifyCommand::Set(param)) => {
                    let value = self.console.collect_positive(param.prompt_label())?;
                    self.state.set(param, value);
                }
                Some(SpecifyCommand::Finish) => {
                    self.console.say("Spécification terminée.")?;
                    return Ok(());
                }
                None => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn calculate(&mut self) -> CircuitResult<()> {
        match solve(&mut self.state) {
            Ok(derivation) => self.console.say(derivation.to_string().trim_end()),
            Err(err) => self.console.say(err),
        }
    }

    fn show_conversions(&mut self) -> CircuitResult<()> {
        match report_conversions(&self.state) {
            Ok(report) => self.console.say(report.trim_end()),
            Err(err) => self.console.say(err),
        }
    }

    fn export(&mut self) -> CircuitResult<()> {
        if let Err(err) = ensure_exportable(&self.state) {
            return self.console.say(err);
        }

        let name = self
            .console
            .prompt("Entrez le nom du fichier d'exportation (par exemple, resultats.txt) : ")?;
        let name = name.trim();
        match export_results(&self.state, Path::new(name)) {
            Ok(()) => self
                .console
                .say(format_args!("Résultats exportés dans le fichier '{}'.", name)),
            Err(err) => self.console.say(err),
        }
    }
}
