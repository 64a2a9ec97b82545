//! Agreement between newtext fonts and fonts adopted from `harfbuzz_rs`

use std::path::PathBuf;

use newtext_hb::interop::{to_hb_direction, to_hb_script, to_hb_tag};
use newtext_hb::{Blob, Buffer, Direction, Font, Script, Tag};

fn font_path() -> Option<PathBuf> {
    std::env::var("NEWTEXT_TEST_FONT")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            [
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
            ]
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
        })
}

fn glyph_ids(font: &Font, text: &str) -> Vec<u32> {
    let mut buffer = Buffer::new().unwrap();
    buffer.add_text(text).unwrap();
    buffer.set_direction(Direction::LeftToRight);
    buffer.set_script(Script::LATIN);
    font.shape(&mut buffer).unwrap();
    buffer
        .glyph_infos()
        .unwrap()
        .iter()
        .map(|info| info.codepoint)
        .collect()
}

#[test]
fn test_direction_mapping() {
    assert!(to_hb_direction(Direction::LeftToRight).is_some());
    assert!(to_hb_direction(Direction::BottomToTop).is_some());
    assert!(to_hb_direction(Direction::Invalid).is_none());
}

#[test]
fn test_tag_mapping_keeps_value() {
    let tag = Tag::new(*b"liga");
    assert_eq!(to_hb_tag(tag).0, tag.to_raw());
    assert_eq!(to_hb_script(Script::ARABIC).0, Script::ARABIC.to_raw());
}

#[test]
fn test_adopted_font_shapes_like_native_font() {
    let Some(path) = font_path() else { return };

    let hb_face = harfbuzz_rs::Face::from_file(&path, 0).unwrap();
    let hb_font = harfbuzz_rs::Font::new(hb_face);
    let adopted = Font::from_harfbuzz_rs(&hb_font).unwrap();

    let blob = Blob::from_file(&path).unwrap();
    let native = blob.face().unwrap().create_font().unwrap();

    assert_eq!(glyph_ids(&adopted, "AB"), glyph_ids(&native, "AB"));

    let reference = harfbuzz_rs::shape(
        &hb_font,
        harfbuzz_rs::UnicodeBuffer::new()
            .add_str("AB")
            .set_direction(to_hb_direction(Direction::LeftToRight).unwrap())
            .set_script(to_hb_script(Script::LATIN)),
        &[],
    );
    let expected: Vec<u32> = reference
        .get_glyph_infos()
        .iter()
        .map(|info| info.codepoint)
        .collect();
    assert_eq!(glyph_ids(&adopted, "AB"), expected);
}

#[test]
fn test_adopted_font_outlives_source() {
    let Some(path) = font_path() else { return };

    let adopted = {
        let hb_face = harfbuzz_rs::Face::from_file(&path, 0).unwrap();
        let hb_font = harfbuzz_rs::Font::new(hb_face);
        Font::from_harfbuzz_rs(&hb_font).unwrap()
    };
    assert_eq!(glyph_ids(&adopted, "xyz").len(), 3);
}
