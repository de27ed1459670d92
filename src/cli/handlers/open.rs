//! Open command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::OpenArgs;
use crate::cli::output::{OpenListing, Output, OutputFormat};
use crate::domain::NoteTree;
use crate::infra::read_note_text;

/// Reads a note file and keeps only its open tasks and their ancestors.
pub fn open_tasks(path: &Path) -> Result<NoteTree> {
    let text = read_note_text(path)
        .with_context(|| format!("failed to read note file: {}", path.display()))?;
    let mut tree = NoteTree::parse(&text);
    tree.filter_incomplete_tasks();
    Ok(tree)
}

pub fn handle_open(args: &OpenArgs) -> Result<()> {
    let mut listings = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let tree = open_tasks(path)?;
        listings.push(OpenListing {
            path: path.clone(),
            open: tree.count_unmigrated(),
            contents: tree.to_string(),
        });
    }

    match args.format {
        OutputFormat::Human => {
            let show_headers = listings.len() > 1;
            for listing in listings.iter().filter(|l| l.open > 0) {
                if show_headers {
                    println!("# {}", listing.path.display());
                }
                println!("{}", listing.contents);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&listings))?);
        }
    }

    Ok(())
}
