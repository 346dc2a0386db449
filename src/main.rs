use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use rug_catalog::{data, manifest, rows};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing one folder per rug
    #[arg(long, default_value = "images/nain_trading")]
    base_path: String,

    /// File the generated table rows are written to
    #[arg(short, long, default_value = "teppiche_rows.html")]
    output: PathBuf,

    /// Also write a CSV manifest of the scanned folders
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Folder Discovery
    println!("Scanning product folders in {}...", args.base_path);
    let folders = data::discover_rug_folders(&args.base_path)?;
    println!("Found {} folders.", folders.len());

    // 2. Generate Rows
    let file = File::create(&args.output)?;
    let mut writer = BufWriter::new(file);

    let pb = ProgressBar::new(folders.len() as u64);
    rows::write_rows(&folders, &args.base_path, &mut writer, &pb)?;
    pb.finish_with_message("Rows generated");
    writer.flush()?;

    println!("{} rows written to {}.", folders.len(), args.output.display());

    // 3. Optional Manifest
    if let Some(manifest_path) = &args.manifest {
        let file = File::create(manifest_path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        manifest::write_manifest(&folders, &args.base_path, &mut writer)?;
        writer.flush()?;
        println!("Manifest written to {}.", manifest_path.display());
    }

    println!("To check the table in a browser, run: cargo run --bin preview");

    Ok(())
}
