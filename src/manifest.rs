use crate::data::{self, RugFolder};
use anyhow::Result;
use serde::Serialize;

/// One manifest line per scanned folder. Collection, item number and
/// dimensions come from the folder naming convention and stay empty for
/// folders that do not follow it.
#[derive(Debug, Serialize)]
pub struct ManifestRecord {
    pub rug_number: u32,
    pub folder: String,
    pub image_path: String,
    pub collection: Option<String>,
    pub item_number: Option<String>,
    pub length_cm: Option<u32>,
    pub width_cm: Option<u32>,
}

pub fn write_manifest<W: std::io::Write>(
    folders: &[RugFolder],
    base: &str,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    let pattern = data::folder_name_pattern()?;

    for folder in folders {
        let details = data::parse_folder_details(&pattern, &folder.name);
        let record = ManifestRecord {
            rug_number: folder.rug_number,
            folder: folder.name.clone(),
            image_path: folder.image_path(base),
            collection: details.collection,
            item_number: details.item_number,
            length_cm: details.length_cm,
            width_cm: details.width_cm,
        };
        writer.serialize(record)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RugFolder;

    fn folder(name: &str, index: usize) -> RugFolder {
        RugFolder {
            name: name.to_string(),
            index,
            rug_number: 1000 + index as u32,
        }
    }

    #[test]
    fn records_carry_parsed_folder_details() {
        let folders = vec![folder("2-15057-272x183", 1), folder("rug42", 2)];
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_manifest(&folders, "images/nain_trading", &mut writer).expect("manifest");

        let bytes = writer.into_inner().expect("flush");
        let text = String::from_utf8(bytes).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "rug_number,folder,image_path,collection,item_number,length_cm,width_cm"
        );
        assert_eq!(
            lines[1],
            "1001,2-15057-272x183,images/nain_trading/2-15057-272x183/2-15057-272x183-01.jpeg,2,15057,272,183"
        );
        assert_eq!(
            lines[2],
            "1002,rug42,images/nain_trading/rug42/rug42-01.jpeg,,,,"
        );
    }

    #[test]
    fn no_folders_write_nothing() {
        // The header row is emitted lazily, so an empty scan stays empty.
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_manifest(&[], "images", &mut writer).expect("manifest");

        let bytes = writer.into_inner().expect("flush");
        assert!(bytes.is_empty());
    }
}
