use locedit::LocalizationProvider;

/// Lists every localization group under `root`, with per-language key counts.
pub fn run_scan_command(root: String, json: bool) -> Result<(), String> {
    let provider = LocalizationProvider::new();
    let groups = provider
        .localizations(&root)
        .map_err(|e| format!("Scan failed: {}", e))?;

    if json {
        let rendered = serde_json::to_string_pretty(&groups)
            .map_err(|e| format!("Failed to serialize groups: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    if groups.is_empty() {
        println!("No localization files found under {}", root);
        return Ok(());
    }

    for group in &groups {
        println!("{}", group);
        for localization in &group.localizations {
            println!(
                "  {}: {} keys ({})",
                localization,
                localization.translations.len(),
                localization.path.display()
            );
        }
    }

    Ok(())
}
