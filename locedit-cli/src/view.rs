use locedit::{Parser, strings::Format};

/// Prints the key-sorted pairs of one .strings file.
pub fn run_view_command(file: String) -> Result<(), String> {
    let format = Format::read_from(&file).map_err(|e| format!("Failed to read {}: {}", file, e))?;

    if format.strings.is_empty() {
        println!("No entries in {}", file);
        return Ok(());
    }

    for string in &format.strings {
        println!("{}", string);
    }

    Ok(())
}
