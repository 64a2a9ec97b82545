//! Info command implementation
//!
//! Prints the metrics of one face in a font file.

use crate::cli::InfoArgs;
use newtext_hb::{Blob, Result};

pub fn run(args: &InfoArgs) -> Result<()> {
    let blob = Blob::from_file(&args.font_file)?;
    let face = blob.create_face(args.face_index)?;

    println!("file:   {}", args.font_file.display());
    println!("index:  {}", face.index());
    println!("upem:   {}", face.upem());
    println!("glyphs: {}", face.glyph_count());
    Ok(())
}
