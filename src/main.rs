//! CLI for exifpeek: print camera attribution EXIF for files, directories, or URLs.

#![cfg(feature = "cli")]

use clap::Parser;
use exifpeek::fetch::{fetch_with_fallback, HttpFetcher, DEFAULT_FALLBACK_SUFFIX};
use exifpeek::CameraInfo;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "exifpeek")]
#[command(about = "Extract camera attribution EXIF from JPEG files or URLs", long_about = None)]
struct Args {
    /// Path to a file or directory to inspect (use -d/--directory to scan a whole directory)
    path: Option<String>,

    /// Fetch one or more image URLs instead of local files (fallback variant tried on failure)
    #[arg(long, value_name = "URL")]
    url: Vec<String>,

    /// Scan a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When scanning a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// File extensions to scan (comma-separated)
    #[arg(short, long, default_value = "jpg,jpeg")]
    extensions: String,

    /// Output JSON per result (one line per image unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print images with camera attribution
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let exts: std::collections::HashSet<String> = args
        .extensions
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .collect();

    if !args.url.is_empty() {
        let fetcher = HttpFetcher::new();
        for url in &args.url {
            match fetch_with_fallback(&fetcher, url, DEFAULT_FALLBACK_SUFFIX).await {
                Ok(bytes) => print_image(url, &bytes, &args)?,
                Err(err) => eprintln!("fetch failed: {url}: {err}"),
            }
        }
        if args.path.is_none() && args.directory.is_none() {
            return Ok(());
        }
    }

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing input: give a file/directory, -d/--directory <DIR>, or --url <URL>")?;
    let path = Path::new(path_str.as_str());

    if !path.exists() {
        eprintln!("Not found: {}", path.display());
        std::process::exit(1);
    }

    if path.is_file() {
        if args.directory.is_some() {
            eprintln!("--directory expects a directory, not a file: {}", path.display());
            std::process::exit(1);
        }
        let bytes = fs::read(path)?;
        print_image(&path.display().to_string(), &bytes, &args)?;
        return Ok(());
    }

    if path.is_dir() {
        scan_dir(path, &args, &exts)?;
        return Ok(());
    }

    eprintln!("Not a file or directory: {}", path.display());
    std::process::exit(1);
}

fn scan_dir(
    dir: &Path,
    args: &Args,
    exts: &std::collections::HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let mut total = 0u64;
    let mut with_attribution = 0u64;

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !exts.is_empty() && !exts.contains(&ext) {
            continue;
        }
        total += 1;
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(_) => continue,
        };
        let fields = exifpeek::extract(&bytes);
        if fields
            .as_ref()
            .map(|f| CameraInfo::from_fields(f).has_attribution())
            .unwrap_or(false)
        {
            with_attribution += 1;
        }
        print_image(&path.display().to_string(), &bytes, args)?;
    }

    if !args.quiet {
        eprintln!("Scanned {} files, {} with camera attribution", total, with_attribution);
    }
    Ok(())
}

fn print_image(label: &str, bytes: &[u8], args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let fields = exifpeek::extract(bytes);
    let info = fields.as_ref().map(CameraInfo::from_fields);
    let has_attribution = info.as_ref().map(|i| i.has_attribution()).unwrap_or(false);

    if args.quiet && !has_attribution {
        return Ok(());
    }

    if args.json {
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert("path".to_string(), serde_json::Value::String(label.to_string()));
        out.insert("size_bytes".to_string(), serde_json::to_value(bytes.len())?);
        out.insert("camera".to_string(), serde_json::to_value(&info)?);
        out.insert("fields".to_string(), serde_json::to_value(&fields)?);
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{}", json_str);
        return Ok(());
    }

    let Some(fields) = fields else {
        println!("NO EXIF {} ({} bytes)", label, bytes.len());
        return Ok(());
    };
    let info = info.unwrap_or_default();

    if has_attribution {
        println!("{} ({} bytes)", label, bytes.len());
        println!("  camera: {}", info.summary());
    } else {
        println!("{} ({} bytes) — no camera attribution", label, bytes.len());
    }
    if let Some(lens) = &info.lens {
        println!("  lens: {}", lens);
    }
    if let Some(aperture) = &info.aperture {
        println!("  aperture: f/{}", aperture);
    }
    if let Some(shutter) = &info.shutter_speed {
        println!("  shutter: {} s", shutter);
    }
    if let Some(focal) = &info.focal_length {
        println!("  focal length: {} mm", focal);
    }
    if let Some(iso) = info.iso {
        println!("  iso: {}", iso);
    }
    if !args.quiet {
        for (name, value) in &fields {
            println!("  - {} = {}", name, value);
        }
    }
    Ok(())
}
