//! Shape command implementation
//!
//! Loads a face, shapes one run of text and prints the glyph records.

use serde::Serialize;

use crate::cli::ShapeArgs;
use newtext_core::{cumulative_advances, Direction, GlyphInfo, GlyphPosition, Script};
use newtext_hb::{Blob, Buffer, Result};

/// JSON form of a shaped run
#[derive(Debug, Serialize)]
pub struct ShapeOutput {
    pub text: String,
    pub direction: String,
    pub script: String,
    pub language: Option<String>,
    pub upem: u32,
    pub size: u32,
    /// Sum of all advances, in the font's scale units
    pub advance: (i64, i64),
    pub glyphs: Vec<ShapedGlyph>,
}

#[derive(Debug, Serialize)]
pub struct ShapedGlyph {
    pub info: GlyphInfo,
    pub position: GlyphPosition,
}

pub fn run(args: &ShapeArgs) -> Result<()> {
    let output = shape(args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(std::io::Error::other)?;
        println!("{}", json);
    } else {
        for glyph in &output.glyphs {
            println!("{}", format_glyph(&glyph.info, &glyph.position));
        }
    }
    Ok(())
}

/// Shape `args.text` and collect everything the printers need.
pub fn shape(args: &ShapeArgs) -> Result<ShapeOutput> {
    let direction = args
        .direction
        .as_deref()
        .map(str::parse::<Direction>)
        .transpose()?;
    let script = args.script.as_deref().map(str::parse::<Script>).transpose()?;

    let blob = Blob::from_file(&args.font_file)?;
    let face = blob.create_face(args.face_index)?;
    let mut font = face.create_font()?;
    font.set_scale_pixels(args.size, face.upem())?;

    let mut buffer = Buffer::new()?;
    buffer.add_text(&args.text)?;
    if let Some(direction) = direction {
        buffer.set_direction(direction);
    }
    if let Some(script) = script {
        buffer.set_script(script);
    }
    if let Some(language) = &args.language {
        buffer.set_language_str(language)?;
    }
    // Fills in only what the flags left unset
    buffer.guess_segment_properties();

    log::info!(
        "Shaping {:?} as {} / {} at {}px",
        args.text,
        buffer.direction(),
        buffer.script(),
        args.size
    );
    font.shape(&mut buffer)?;

    let glyphs = buffer.glyphs()?;
    let positions: Vec<GlyphPosition> = glyphs.iter().map(|(_, pos)| *pos).collect();
    let advance = cumulative_advances(&positions)
        .last()
        .copied()
        .unwrap_or((0, 0));

    Ok(ShapeOutput {
        text: args.text.clone(),
        direction: buffer.direction().to_string(),
        script: buffer.script().to_string(),
        language: buffer.language().map(|lang| lang.as_str().to_string()),
        upem: face.upem(),
        size: args.size,
        advance,
        glyphs: glyphs
            .into_iter()
            .map(|(info, position)| ShapedGlyph { info, position })
            .collect(),
    })
}

/// One glyph as `gid=cluster@x_advance,y_advance+x_offset,y_offset`.
pub fn format_glyph(info: &GlyphInfo, pos: &GlyphPosition) -> String {
    format!(
        "{}={}@{},{}+{},{}",
        info.codepoint, info.cluster, pos.x_advance, pos.y_advance, pos.x_offset, pos.y_offset
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(font_file: &str, text: &str) -> ShapeArgs {
        ShapeArgs {
            text: text.to_string(),
            font_file: PathBuf::from(font_file),
            face_index: 0,
            size: 16,
            direction: None,
            script: None,
            language: None,
            json: false,
        }
    }

    #[test]
    fn test_format_glyph() {
        let info = GlyphInfo {
            codepoint: 36,
            cluster: 0,
        };
        let pos = GlyphPosition {
            x_advance: 19728,
            y_advance: 0,
            x_offset: -5,
            y_offset: 12,
        };
        assert_eq!(format_glyph(&info, &pos), "36=0@19728,0+-5,12");
    }

    #[test]
    fn test_bad_direction_fails_before_loading() {
        let mut a = args("/nonexistent/font.ttf", "abc");
        a.direction = Some("sideways".to_string());
        assert!(matches!(
            shape(&a),
            Err(newtext_core::NewtextError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_missing_font_is_io_error() {
        let a = args("/nonexistent/font.ttf", "abc");
        assert!(matches!(shape(&a), Err(newtext_core::NewtextError::Io(_))));
    }

    #[test]
    fn test_shape_with_system_font() {
        let path = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";
        if !std::path::Path::new(path).exists() {
            return;
        }

        let mut a = args(path, "AB");
        a.language = Some("en".to_string());
        let output = shape(&a).unwrap();
        assert_eq!(output.direction, "ltr");
        assert_eq!(output.script, "Latn");
        assert_eq!(output.language.as_deref(), Some("en"));
        assert_eq!(output.glyphs.len(), 2);
        assert!(output.advance.0 > 0);

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["glyphs"][1]["info"]["cluster"], 1);
    }
}
