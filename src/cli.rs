use clap::Parser;

/// CLI arguments for the ant farm simulation
#[derive(Parser, Debug)]
#[command(name = "ant_farm", about = "🐜 Interactive ant farm simulator")]
pub struct Args {
    /// Suppress the banner and prompt (for piped or scripted input)
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
