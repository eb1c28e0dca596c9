use std::path::PathBuf;

use locedit::{Localization, LocalizationProvider, Parser, UpdateOutcome, strings::Format};

/// Sets one key in a .strings file, writing the file back sorted by key.
/// Reports when the value already matched and nothing was written.
pub fn run_set_command(file: String, key: String, value: String) -> Result<(), String> {
    let path = PathBuf::from(&file);
    let format = Format::read_from(&path).map_err(|e| format!("Failed to read {}: {}", file, e))?;

    let provider = LocalizationProvider::new();
    let localization = Localization::new(provider.language_of(&path), format.strings, path);

    match provider
        .update_localization(&localization, &key, &value)
        .map_err(|e| format!("Failed to update {}: {}", file, e))?
    {
        UpdateOutcome::Unchanged => {
            println!("\"{}\" already has that value, file not written", key);
        }
        UpdateOutcome::Updated(updated) => {
            println!(
                "Updated \"{}\" in {} ({} keys)",
                key,
                updated.path.display(),
                updated.translations.len()
            );
        }
    }

    Ok(())
}
