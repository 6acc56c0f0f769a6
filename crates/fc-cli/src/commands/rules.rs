use colored::Colorize;
use fc_core::{FinalOutcome, OutcomeStyle};

pub fn run() -> Result<(), String> {
    println!("  {}", "How a check works".bold().underline());
    println!();
    println!("  1. Threshold = 11 - level gap, kept between 2 and 19.");
    println!("  2. Roll a d20 and add the modifier to get the total.");
    println!("  3. Total >= threshold succeeds, otherwise the check fails.");
    println!("     A natural 1 always fails, a natural 20 always succeeds.");
    println!("  4. Roll the fate die (two +, two -, two 0 faces):");
    println!("       0  keeps the result as it is");
    println!("       +  improves it (yes, and / no, but)");
    println!("       -  worsens it (yes, but / no, and)");
    println!("  5. The \">= 11\" column notes whether the total reached 11,");
    println!("     whatever the threshold was.");
    println!();
    println!("  {}", "Outcomes".bold().underline());
    println!();
    for outcome in FinalOutcome::ALL {
        let line = outcome.to_string();
        let line = match outcome.style() {
            OutcomeStyle::Favorable => line.green(),
            OutcomeStyle::Unfavorable => line.red(),
        };
        println!("    {line}");
    }

    Ok(())
}
