use crate::command::parser::{parse_command, Command};
use crate::error::Result;
use crate::meadow::Meadow;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// The interactive command loop: reads lines, parses them, and dispatches
/// the resulting commands against a meadow.
///
/// No state of its own beyond presentation flags; every line is handled to
/// completion before the next one is read.
pub struct Interpreter {
    quiet: bool,
}

impl Interpreter {
    /// Create an interpreter; `quiet` suppresses the banner and prompt
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Run the command loop until `exit` or end of input.
    ///
    /// Command-level failures (unknown keyword, species, or farm id) are
    /// reported and the loop continues; only an input read error propagates.
    pub fn run<R: BufRead>(&mut self, meadow: &mut Meadow, input: R) -> Result<()> {
        if !self.quiet {
            println!("{}", "Welcome to the Ant Farm Simulation!".bold());
            println!("Commands available: spawn X Y T, give I R A, tick, summary I, exit");
        }

        let mut stdout = io::stdout();
        let mut lines = input.lines();
        loop {
            if !self.quiet {
                print!("> ");
                stdout.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line == "exit" {
                break;
            }
            self.handle_line(meadow, &line);
        }

        println!("Simulation ended!");
        Ok(())
    }

    /// Parse and execute one line, reporting any command-level error
    pub fn handle_line(&mut self, meadow: &mut Meadow, line: &str) {
        let outcome = parse_command(line).and_then(|cmd| self.execute(meadow, cmd));
        if let Err(err) = outcome {
            println!("{}", err.to_string().red());
        }
    }

    /// Execute a parsed command against the meadow
    pub fn execute(&mut self, meadow: &mut Meadow, command: Command) -> Result<()> {
        match command {
            Command::Spawn { x, y, species } => {
                let id = meadow.create_farm(species, (x, y));
                println!(
                    "Ant Farm {} created with species: {} at position ({}, {}).",
                    id,
                    species.as_str(),
                    x,
                    y
                );
            }
            Command::Give {
                farm_id,
                resource,
                amount,
            } => {
                meadow.add_resource_to_farm(farm_id, &resource, amount)?;
                println!("Given {} {} to farm {}.", amount, resource, farm_id);
            }
            Command::Tick => {
                meadow.process_all();
                println!("Performed a simulation tick.");
            }
            Command::Summary { farm_id } => {
                // Unknown ids print nothing; summary is a pure read
                if let Some(farm) = meadow.farm(farm_id) {
                    print!("{}", farm);
                }
            }
        }
        Ok(())
    }
}
