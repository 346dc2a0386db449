use anyhow::Result;
use regex::Regex;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct RugFolder {
    pub name: String,
    /// 1-based position after the lexicographic sort.
    pub index: usize,
    /// Human-facing number shown in the "Teppich Nr." column (1000 + index).
    pub rug_number: u32,
}

impl RugFolder {
    /// Path of the folder's first image: `<base>/<name>/<name>-01.jpeg`.
    pub fn image_path(&self, base: &str) -> String {
        format!("{}/{}/{}-01.jpeg", base, self.name, self.name)
    }
}

/// Fields encoded in the shop's folder naming convention
/// (`<sort>-<nummer>-<LxB>`, e.g. "2-15057-272x183"). All optional: folders
/// that do not follow the convention still get a row, just no details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderDetails {
    pub collection: Option<String>,
    pub item_number: Option<String>,
    pub length_cm: Option<u32>,
    pub width_cm: Option<u32>,
}

pub fn folder_name_pattern() -> Result<Regex> {
    Ok(Regex::new(r"^(\d+)-(\d+)-(\d+)x(\d+)$")?)
}

pub fn parse_folder_details(pattern: &Regex, name: &str) -> FolderDetails {
    match pattern.captures(name) {
        Some(caps) => FolderDetails {
            collection: Some(caps[1].to_string()),
            item_number: Some(caps[2].to_string()),
            length_cm: caps[3].parse().ok(),
            width_cm: caps[4].parse().ok(),
        },
        None => FolderDetails::default(),
    }
}

/// Lists the immediate children of `base`, sorted lexicographically, and
/// assigns each its position and display number.
///
/// Entries are not filtered by type: a stray file at the top level is
/// treated as a folder name and will produce a row with a broken image
/// path. Enumeration order never depends on the filesystem, so the numbers
/// are stable across runs and platforms.
pub fn discover_rug_folders(base: &str) -> Result<Vec<RugFolder>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(base).min_depth(1).max_depth(1) {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(i, name)| RugFolder {
            name,
            index: i + 1,
            rug_number: 1000 + (i + 1) as u32,
        })
        .collect())
}
