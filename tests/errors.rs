use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use assert_cmd::Command;

const BIN: &str = "ant_farm"; // change if needed

#[test]
fn unknown_species_rejects_the_spawn() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--quiet");
    cmd.write_stdin("spawn 0 0 lizard\nsummary 1\nexit\n");

    // No farm is created, so the summary prints nothing.
    cmd.assert()
        .success()
        .stdout(contains("Unknown species: lizard."))
        .stdout(contains("Ant Farm: Farm1").not());

    Ok(())
}

#[test]
fn give_to_unknown_farm_reports_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--quiet");
    cmd.write_stdin("give 7 food 5\nexit\n");

    cmd.assert()
        .success()
        .stdout(contains("No ant farm with id 7."))
        .stdout(contains("Given").not());

    Ok(())
}

#[test]
fn malformed_farm_id_falls_back_to_zero() -> Result<(), Box<dyn std::error::Error>> {
    // Farm ids start at 1, so a token that reads as zero can never match.
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--quiet");
    cmd.write_stdin("spawn 0 0 worker\ngive x food 5\nexit\n");

    cmd.assert()
        .success()
        .stdout(contains("No ant farm with id 0."));

    Ok(())
}
