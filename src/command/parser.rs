use crate::error::{CommandError, Result};
use crate::species::Species;

/// A parsed command line, ready to run against a meadow
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `spawn <x> <y> <species>`
    Spawn {
        x: i64,
        y: i64,
        species: Species,
    },
    /// `give <farmId> <resource> <amount>`
    Give {
        farm_id: u32,
        resource: String,
        amount: i64,
    },
    /// `tick`
    Tick,
    /// `summary <farmId>`
    Summary { farm_id: u32 },
}

/// Parse one command line into a [`Command`].
///
/// Tokens are split on whitespace; the first token selects the action.
/// A missing or malformed integer token reads as zero and never aborts the
/// command, so `give x food 5` targets farm 0 (an id the meadow never
/// issues). The `exit` keyword is handled by the interpreter loop, not here.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let action = tokens.next().ok_or(CommandError::InvalidCommand)?;

    match action {
        "spawn" => {
            let x = int_token(&mut tokens);
            let y = int_token(&mut tokens);
            let species: Species = tokens.next().unwrap_or("").parse()?;
            Ok(Command::Spawn { x, y, species })
        }
        "give" => {
            let farm_id = id_token(&mut tokens);
            let resource = tokens.next().unwrap_or("").to_string();
            let amount = int_token(&mut tokens);
            Ok(Command::Give {
                farm_id,
                resource,
                amount,
            })
        }
        "tick" => Ok(Command::Tick),
        "summary" => Ok(Command::Summary {
            farm_id: id_token(&mut tokens),
        }),
        _ => Err(CommandError::InvalidCommand),
    }
}

#[inline]
fn int_token<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> i64 {
    tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0)
}

#[inline]
fn id_token<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> u32 {
    tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spawn() {
        let cmd = parse_command("spawn 3 -2 queen").unwrap();
        assert_eq!(
            cmd,
            Command::Spawn {
                x: 3,
                y: -2,
                species: Species::Queen
            }
        );
    }

    #[test]
    fn test_parse_spawn_unknown_species() {
        let err = parse_command("spawn 0 0 lizard").unwrap_err();
        assert_eq!(err.to_string(), "Unknown species: lizard.");
    }

    #[test]
    fn test_parse_spawn_missing_species() {
        assert!(matches!(
            parse_command("spawn 0 0"),
            Err(CommandError::UnknownSpecies(_))
        ));
    }

    #[test]
    fn test_parse_give() {
        let cmd = parse_command("give 1 food 10").unwrap();
        assert_eq!(
            cmd,
            Command::Give {
                farm_id: 1,
                resource: "food".to_string(),
                amount: 10
            }
        );
    }

    #[test]
    fn test_malformed_numbers_read_as_zero() {
        assert_eq!(
            parse_command("spawn a b worker").unwrap(),
            Command::Spawn {
                x: 0,
                y: 0,
                species: Species::Worker
            }
        );
        assert_eq!(
            parse_command("give x food oops").unwrap(),
            Command::Give {
                farm_id: 0,
                resource: "food".to_string(),
                amount: 0
            }
        );
        assert_eq!(
            parse_command("summary nope").unwrap(),
            Command::Summary { farm_id: 0 }
        );
    }

    #[test]
    fn test_parse_tick_and_summary() {
        assert_eq!(parse_command("tick").unwrap(), Command::Tick);
        assert_eq!(
            parse_command("summary 7").unwrap(),
            Command::Summary { farm_id: 7 }
        );
    }

    #[test]
    fn test_unknown_keyword() {
        let err = parse_command("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Invalid command.");
    }

    #[test]
    fn test_empty_line_is_invalid() {
        assert!(matches!(
            parse_command("   "),
            Err(CommandError::InvalidCommand)
        ));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(matches!(
            parse_command("Tick"),
            Err(CommandError::InvalidCommand)
        ));
    }
}
