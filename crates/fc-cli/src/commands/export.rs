use std::path::{Path, PathBuf};

use fc_core::{CheckConfig, ExportFormat};

pub fn run(config: &CheckConfig, format: &str, output: Option<&Path>) -> Result<(), String> {
    let format = ExportFormat::parse(format).map_err(|e| e.to_string())?;
    let batch = super::roll_from_config(config)?;
    let content = fc_core::export(&batch, format).map_err(|e| e.to_string())?;

    if let Some(path) = output {
        let path = output_path(path, format);
        std::fs::write(&path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), rolls = batch.len(), "exported batch");
        println!("  Exported {} rolls to {}", batch.len(), path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

/// Add the format's extension when the path has none.
fn output_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}
