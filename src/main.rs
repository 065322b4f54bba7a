use ant_farm::prelude::*;
use clap::Parser;
use std::io;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // All simulation state lives in the meadow; it is built here and handed
    // to the interpreter so tests can construct their own in isolation.
    let mut meadow = Meadow::new();
    let mut interpreter = Interpreter::new(args.quiet);

    let stdin = io::stdin();
    interpreter.run(&mut meadow, stdin.lock())?;

    Ok(())
}
