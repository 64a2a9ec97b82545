//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newtext - HarfBuzz text shaping from the command line
#[derive(Parser, Debug)]
#[command(name = "newtext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shape text with a font and print the glyph records
    #[command(alias = "s")]
    Shape(ShapeArgs),

    /// List the known script tags
    Scripts(ScriptsArgs),

    /// Display face metrics for a font file
    #[command(alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the shape command
#[derive(Parser, Debug)]
pub struct ShapeArgs {
    /// Text to shape
    pub text: String,

    /// Font file path (.ttf, .otf, .ttc, .otc)
    #[arg(short = 'f', long = "font-file")]
    pub font_file: PathBuf,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value = "0")]
    pub face_index: u32,

    /// Font size in pixels; positions come out in 1/upem pixel units
    #[arg(short = 's', long = "size", default_value = "16")]
    pub size: u32,

    /// Text direction: ltr, rtl, ttb, btt (guessed from the text if omitted)
    #[arg(short = 'd', long = "direction")]
    pub direction: Option<String>,

    /// Script, as an ISO 15924 code (Latn, Arab) or a name (LATIN)
    #[arg(short = 'S', long = "script")]
    pub script: Option<String>,

    /// Language tag (BCP 47), e.g. en, ar, zh-Hans
    #[arg(short = 'l', long = "language")]
    pub language: Option<String>,

    /// Print a JSON document instead of one line per glyph
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the scripts command
#[derive(Parser, Debug)]
pub struct ScriptsArgs {
    /// Only list scripts whose name or tag contains this text
    #[arg(long)]
    pub filter: Option<String>,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Font file path
    #[arg(short = 'f', long = "font-file")]
    pub font_file: PathBuf,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value = "0")]
    pub face_index: u32,
}
