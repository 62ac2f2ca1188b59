//! Stats structure tables
//!
//! The toolkit expects stats exported from `Stats/Generated/Data` to live in
//! per-category folders under `Editor/Mods/<name>/Stats/`. These tables map
//! the exported files to those folders.

/// Suffixes of table/stats/metadata-export files that belong to the editor tree
pub const EDITOR_SUFFIXES: &[&str] = &["tbl", "stats", "mei"];

/// Path prefix rewrites, applied before the filename lookup
pub const STRUCTURE_PATHS: &[(&str, &str)] = &[("/Stats/Generated/Data/", "/Stats/")];

/// Stats filename → folder under `/Stats/`
pub const STRUCTURE_FILES: &[(&str, &str)] = &[
    ("BloodTypes.stats", "BloodTypes"),
    ("CriticalHitTypes.stats", "BloodTypes"),
    ("Crimes.stats", "Crimes"),
    ("Equipment.stats", "Equipment"),
    ("Data.stats", "ExtraData"),
    ("Requirements.stats", "ExtraData"),
    ("XPData.stats", "ExtraData"),
    ("ItemColor.stats", "ItemColor"),
    ("CraftingStationsItemComboPreviewData.stats", "ItemCombos"),
    ("ItemComboProperties.stats", "ItemCombos"),
    ("ItemCombos.stats", "ItemCombos"),
    ("ObjectCategoriesItemComboPreviewData.stats", "ItemCombos"),
    ("ItemProgressionNames.stats", "ItemProgression"),
    ("ItemProgressionVisuals.stats", "ItemProgression"),
    ("ItemTypes.stats", "ItemTypes"),
    ("Projectile.stats", "SpellData"),
    ("ProjectileStrike.stats", "SpellData"),
    ("Rush.stats", "SpellData"),
    ("Shout.stats", "SpellData"),
    ("SpellSet.stats", "SpellData"),
    ("Target.stats", "SpellData"),
    ("Teleportation.stats", "SpellData"),
    ("Throw.stats", "SpellData"),
    ("Wall.stats", "SpellData"),
    ("Zone.stats", "SpellData"),
    ("Armor.stats", "Stats"),
    ("Character.stats", "Stats"),
    ("Interrupt.stats", "Stats"),
    ("Object.stats", "Stats"),
    ("Passive.stats", "Stats"),
    ("Weapon.stats", "Stats"),
    ("Status_BOOST.stats", "StatusData"),
    ("Status_DEACTIVATED.stats", "StatusData"),
    ("Status_DOWNED.stats", "StatusData"),
    ("Status_EFFECT.stats", "StatusData"),
    ("Status_FEAR.stats", "StatusData"),
    ("Status_HEAL.stats", "StatusData"),
    ("Status_INCAPACITATED.stats", "StatusData"),
    ("Status_INVISIBLE.stats", "StatusData"),
    ("Status_KNOCKED_DOWN.stats", "StatusData"),
    ("Status_POLYMORPHED.stats", "StatusData"),
    ("Status_SNEAKING.stats", "StatusData"),
    ("TreasureGroups.stats", "TreasureTable"),
    ("TreasureTable.stats", "TreasureTable"),
];

/// Whether a file name has one of the [`EDITOR_SUFFIXES`] (case-insensitive)
#[must_use]
pub fn is_editor_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| EDITOR_SUFFIXES.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

/// Folder under `/Stats/` for an exact stats file name
#[must_use]
pub fn stats_folder(file_name: &str) -> Option<&'static str> {
    STRUCTURE_FILES
        .iter()
        .find(|(file, _)| *file == file_name)
        .map(|(_, folder)| *folder)
}

/// Apply the structure tables to a directory path (`/…/`).
///
/// Path prefixes are rewritten first. A file listed in [`STRUCTURE_FILES`]
/// then gets nested one level under the first `/Stats/` segment, unless its
/// folder is `Stats` itself or the path is already nested.
#[must_use]
pub fn translate_structure(dir: &str, file_name: &str) -> String {
    let mut dir = dir.to_string();
    for (from, to) in STRUCTURE_PATHS {
        dir = dir.replace(from, to);
    }

    let Some(folder) = stats_folder(file_name) else {
        return dir;
    };
    if folder == "Stats" {
        return dir;
    }

    let nested = format!("/Stats/{folder}/");
    if dir.contains(&nested) {
        return dir;
    }
    dir.replacen("/Stats/", &nested, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(STRUCTURE_FILES.len(), 44);
        assert!(STRUCTURE_FILES.iter().all(|(f, _)| f.ends_with(".stats")));
    }

    #[test]
    fn test_table_has_no_duplicate_files() {
        for (i, (file, _)) in STRUCTURE_FILES.iter().enumerate() {
            assert!(
                STRUCTURE_FILES[i + 1..].iter().all(|(other, _)| other != file),
                "duplicate entry {file}"
            );
        }
    }

    #[test]
    fn test_is_editor_file() {
        assert!(is_editor_file("Armor.stats"));
        assert!(is_editor_file("Passives.TBL"));
        assert!(is_editor_file("Spells.mei"));
        assert!(!is_editor_file("foo.lsx"));
        assert!(!is_editor_file("stats"));
    }

    #[test]
    fn test_nests_known_files() {
        assert_eq!(
            translate_structure("/Editor/Mods/N/Stats/", "TreasureTable.stats"),
            "/Editor/Mods/N/Stats/TreasureTable/"
        );
        assert_eq!(
            translate_structure("/Editor/Mods/N/Stats/", "Status_FEAR.stats"),
            "/Editor/Mods/N/Stats/StatusData/"
        );
    }

    #[test]
    fn test_stats_folder_adds_no_nesting() {
        assert_eq!(
            translate_structure("/Editor/Mods/N/Stats/", "Armor.stats"),
            "/Editor/Mods/N/Stats/"
        );
    }

    #[test]
    fn test_unknown_file_keeps_path() {
        assert_eq!(
            translate_structure("/Editor/Mods/N/Stats/", "Custom.stats"),
            "/Editor/Mods/N/Stats/"
        );
    }

    #[test]
    fn test_prefix_rewrite_runs_first() {
        assert_eq!(
            translate_structure("/Editor/Mods/N/Stats/Generated/Data/", "Shout.stats"),
            "/Editor/Mods/N/Stats/SpellData/"
        );
    }

    #[test]
    fn test_already_nested_is_stable() {
        let once = translate_structure("/Editor/Mods/N/Stats/", "Crimes.stats");
        assert_eq!(translate_structure(&once, "Crimes.stats"), once);
    }
}
