//! Service for finding and updating `.strings` files under a project root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::{debug, error};

use crate::{
    error::Error,
    strings::Format,
    traits::Parser,
    types::{Localization, LocalizationGroup, LocalizationString},
};

/// Scan behavior as data: what to skip, how language bundles are named,
/// which extension marks a localization file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory names skipped during the search, at any depth. A name
    /// starting with a dot matches as a segment suffix, so `.framework`
    /// skips any framework bundle.
    pub ignored_directories: Vec<String>,

    /// Suffix marking a language bundle directory, including the dot.
    pub bundle_suffix: String,

    /// Extension of localization files, without the leading dot.
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            ignored_directories: vec![
                "Pods".to_string(),
                "Carthage".to_string(),
                "build".to_string(),
                ".framework".to_string(),
            ],
            bundle_suffix: ".lproj".to_string(),
            extension: "strings".to_string(),
        }
    }
}

/// Outcome of [`LocalizationProvider::update_localization`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The key already had exactly this value; no file write happened.
    Unchanged,
    /// The file was rewritten; holds the updated in-memory state. The
    /// original `Localization` is left untouched.
    Updated(Localization),
}

/// Service for working with the strings files.
#[derive(Debug, Clone, Default)]
pub struct LocalizationProvider {
    config: ScanConfig,
}

impl LocalizationProvider {
    /// Creates a provider with the default [`ScanConfig`].
    pub fn new() -> Self {
        LocalizationProvider::default()
    }

    pub fn with_config(config: ScanConfig) -> Self {
        LocalizationProvider { config }
    }

    /// Finds and constructs localization groups for a given root directory.
    ///
    /// Every `.strings` file under `root` (outside ignored directories) is
    /// parsed and grouped by its path with language bundle directories
    /// elided. Groups come back sorted by name, localizations within a
    /// group sorted by language.
    ///
    /// A file that fails to parse is still listed, with zero translations.
    pub fn localizations<P: AsRef<Path>>(&self, root: P) -> Result<Vec<LocalizationGroup>, Error> {
        let root = root.as_ref();
        debug!("Searching {} for localization files", root.display());

        if !root.is_dir() {
            return Err(Error::ScanTargetUnavailable(root.to_path_buf()));
        }

        let mut grouped: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        for entry in WalkBuilder::new(root).standard_filters(false).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if !self.is_localization_file(&path) || self.is_ignored(&path) {
                continue;
            }
            grouped.entry(self.logical_path(&path)).or_default().push(path);
        }

        debug!("Found {} localization file groups", grouped.len());

        let mut groups: Vec<LocalizationGroup> = grouped
            .into_iter()
            .map(|(logical, files)| {
                let name = logical.rsplit('/').next().unwrap_or(&logical).to_string();
                let mut localizations: Vec<Localization> = files
                    .into_iter()
                    .map(|file| {
                        let language = self.language_of(&file);
                        let translations = self.localization_strings(&file);
                        Localization::new(language, translations, file)
                    })
                    .collect();
                localizations.sort_by(|a, b| a.language.cmp(&b.language));
                LocalizationGroup {
                    name,
                    path: logical,
                    localizations,
                }
            })
            .collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(groups)
    }

    /// Updates one localization value in its backing file. Regenerates the
    /// whole file, sorted by key.
    ///
    /// If the key already holds exactly `value`, nothing is written and the
    /// outcome is [`UpdateOutcome::Unchanged`]. A key not present yet is
    /// inserted through the same path. The caller keeps using the returned
    /// state; the passed-in `Localization` is not mutated.
    pub fn update_localization(
        &self,
        localization: &Localization,
        key: &str,
        value: &str,
    ) -> Result<UpdateOutcome, Error> {
        if let Some(existing) = localization.translation(key)
            && existing.value == value
        {
            debug!("Same value provided for {}, not updating", existing);
            return Ok(UpdateOutcome::Unchanged);
        }

        let mut translations: Vec<LocalizationString> = localization
            .translations
            .iter()
            .filter(|string| string.key != key)
            .cloned()
            .collect();
        translations.push(LocalizationString::new(key, value));
        translations.sort();

        debug!(
            "Updating \"{}\" in {}",
            key,
            localization.path.display()
        );
        Format::new(translations.clone()).write_to(&localization.path)?;

        Ok(UpdateOutcome::Updated(Localization::new(
            localization.language.clone(),
            translations,
            localization.path.clone(),
        )))
    }

    /// Whether the path lies inside one of the ignored directories.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let parent = match path.parent() {
            Some(parent) => normalized(parent),
            None => return false,
        };
        parent.split('/').any(|segment| {
            self.config.ignored_directories.iter().any(|name| {
                segment == name || (name.starts_with('.') && segment.ends_with(name.as_str()))
            })
        })
    }

    /// The path with every language bundle segment removed; files sharing a
    /// logical path across bundles form one group.
    pub fn logical_path(&self, path: &Path) -> String {
        normalized(path)
            .split('/')
            .filter(|segment| !segment.ends_with(&self.config.bundle_suffix))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Language code for a file, from its parent directory name with the
    /// bundle suffix stripped.
    pub fn language_of(&self, path: &Path) -> String {
        let parent = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        parent
            .strip_suffix(&self.config.bundle_suffix)
            .unwrap_or(parent)
            .to_string()
    }

    fn is_localization_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension == self.config.extension)
    }

    /// Best-effort read: a file that does not parse yields no translations.
    fn localization_strings(&self, path: &Path) -> Vec<LocalizationString> {
        match Format::read_from(path) {
            Ok(format) => {
                debug!("Found {} keys in {}", format.strings.len(), path.display());
                format.strings
            }
            Err(err) => {
                error!("Could not parse {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }
}

fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_directory_matches_as_path_segment_prefix() {
        let provider = LocalizationProvider::new();
        assert!(provider.is_ignored(Path::new("/proj/Pods/en.lproj/Localizable.strings")));
        assert!(provider.is_ignored(Path::new("/proj/deep/Carthage/x/A.strings")));
        assert!(provider.is_ignored(Path::new("/proj/Foo.framework/en.lproj/A.strings")));
        assert!(!provider.is_ignored(Path::new("/proj/Feature/en.lproj/Localizable.strings")));
    }

    #[test]
    fn test_my_pods_is_not_ignored() {
        // "MyPods" merely contains "Pods"; only the exact segment is skipped.
        let provider = LocalizationProvider::new();
        assert!(!provider.is_ignored(Path::new("/proj/MyPods/en.lproj/A.strings")));
        assert!(!provider.is_ignored(Path::new("/proj/Podspec/en.lproj/A.strings")));
    }

    #[test]
    fn test_logical_path_elides_bundle_directories() {
        let provider = LocalizationProvider::new();
        assert_eq!(
            provider.logical_path(Path::new("/proj/en.lproj/Localizable.strings")),
            "/proj/Localizable.strings"
        );
        assert_eq!(
            provider.logical_path(Path::new("/proj/fr.lproj/Localizable.strings")),
            "/proj/Localizable.strings"
        );
    }

    #[test]
    fn test_language_of_strips_bundle_suffix() {
        let provider = LocalizationProvider::new();
        assert_eq!(
            provider.language_of(Path::new("/proj/en.lproj/Localizable.strings")),
            "en"
        );
        assert_eq!(
            provider.language_of(Path::new("/proj/zh-Hans.lproj/Localizable.strings")),
            "zh-Hans"
        );
        // Parent that is not a bundle directory keeps its name.
        assert_eq!(
            provider.language_of(Path::new("/proj/Base/Localizable.strings")),
            "Base"
        );
    }

    #[test]
    fn test_scan_of_missing_root_is_an_error() {
        let provider = LocalizationProvider::new();
        let error = provider
            .localizations("/definitely/not/a/real/root")
            .unwrap_err();
        assert!(matches!(error, Error::ScanTargetUnavailable(_)));
    }
}
