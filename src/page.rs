use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

fn page_styles() -> &'static str {
    r#"
body { font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif; margin: 2rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px 12px; text-align: left; }
th { background: #f4f4f4; }
.img-cell img { max-width: 160px; height: auto; object-fit: contain; }
.price { text-align: right; }
"#
}

/// Wraps generated table rows into a standalone document so the table can
/// be checked in a browser before the fragments are pasted into the site.
/// The rows go in verbatim.
pub fn render_preview(rows_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="UTF-8">
  <title>Teppich-Katalog Vorschau</title>
  <style>{styles}</style>
</head>
<body>
  <h1>Teppich-Katalog Vorschau</h1>
  <table>
    <thead>
      <tr>
        <th>Bild</th>
        <th>Teppich Nr.</th>
        <th>Größe</th>
        <th>Farbe</th>
        <th>Preis</th>
      </tr>
    </thead>
    <tbody>
{rows}
    </tbody>
  </table>
</body>
</html>
"#,
        styles = page_styles(),
        rows = rows_html,
    )
}

pub fn write_preview(input: &Path, output: &Path) -> Result<()> {
    let rows = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    fs::write(output, render_preview(&rows))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn preview_embeds_the_rows_verbatim() {
        let rows = "  <tr>\n    <td>x</td>\n  </tr>";
        let page = render_preview(rows);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(rows));
        assert!(page.contains("<th>Teppich Nr.</th>"));
        assert!(page.contains("<th>Preis</th>"));
    }

    #[test]
    fn write_preview_fails_on_a_missing_rows_file() {
        let temp = TempDir::new().expect("tempdir");
        let input = temp.path().join("missing.html");
        let output = temp.path().join("preview.html");

        let err = write_preview(&input, &output).expect_err("must fail");
        assert!(err.to_string().contains("missing.html"));
        assert!(!output.exists());
    }

    #[test]
    fn write_preview_wraps_the_rows_file() {
        let temp = TempDir::new().expect("tempdir");
        let input = temp.path().join("rows.html");
        let output = temp.path().join("preview.html");
        fs::write(&input, "  <tr></tr>").expect("write rows");

        write_preview(&input, &output).expect("preview");

        let page = fs::read_to_string(&output).expect("read");
        assert!(page.contains("  <tr></tr>"));
        assert!(page.ends_with("</html>\n"));
    }
}
