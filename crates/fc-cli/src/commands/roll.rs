use colored::Colorize;
use fc_core::CheckConfig;

pub fn run(config: &CheckConfig) -> Result<(), String> {
    let batch = super::roll_from_config(config)?;

    println!(
        "  {} {}",
        "Check".bold(),
        format!(
            "(level gap {}, modifier {:+}, threshold {})",
            batch.input.level_gap,
            batch.input.modifier,
            batch.input.threshold()
        )
        .dimmed()
    );
    println!();
    println!("{}", super::results_table(&batch));
    println!();
    println!(
        "  {} roll{}",
        batch.len(),
        if batch.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
