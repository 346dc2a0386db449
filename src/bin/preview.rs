use anyhow::Result;
use rug_catalog::page;
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    // Check if a rows file was passed as argument, otherwise use default
    let args: Vec<String> = env::args().collect();
    let rows_path = if args.len() > 1 {
        &args[1]
    } else {
        "teppiche_rows.html"
    };

    println!("Generating preview page from {}...", rows_path);
    page::write_preview(Path::new(rows_path), Path::new("teppiche_preview.html"))?;
    println!("Done! Open teppiche_preview.html in a browser.");

    Ok(())
}
