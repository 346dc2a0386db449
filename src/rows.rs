use crate::data::RugFolder;
use anyhow::Result;
use indicatif::ProgressBar;
use std::io::Write;

/// One table row for a product folder. The fragment shape is fixed: image
/// cell, rug number, then empty size/color/price cells that get filled in
/// by hand later. Folder names go into the markup verbatim.
pub fn row_fragment(folder: &RugFolder, base: &str) -> String {
    format!(
        r#"  <tr>
    <td class="img-cell">
      <img src="{img}" alt="Teppich {idx}" />
    </td>
    <td data-label="Teppich Nr.">{nr}</td>
    <td data-label="Größe"></td>
    <td data-label="Farbe"></td>
    <td data-label="Preis" class="price"></td>
  </tr>"#,
        img = folder.image_path(base),
        idx = folder.index,
        nr = folder.rug_number,
    )
}

/// Writes the fragments joined with single newlines (no trailing newline).
pub fn write_rows<W: Write>(
    folders: &[RugFolder],
    base: &str,
    writer: &mut W,
    progress: &ProgressBar,
) -> Result<()> {
    for (i, folder) in folders.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(row_fragment(folder, base).as_bytes())?;
        progress.inc(1);
    }
    Ok(())
}
