//! Raw declarations for the slice of the HarfBuzz C API this crate wraps
//!
//! The symbols come from the HarfBuzz build that `harfbuzz_rs` links into
//! the final artifact. Types mirror `hb-common.h`, `hb-blob.h`,
//! `hb-buffer.h`, `hb-face.h`, `hb-font.h` and `hb-shape.h`.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int, c_uint, c_void};

pub type hb_bool_t = c_int;
pub type hb_codepoint_t = u32;
pub type hb_mask_t = u32;
pub type hb_position_t = i32;
pub type hb_tag_t = u32;
pub type hb_direction_t = c_int;
pub type hb_script_t = u32;
pub type hb_memory_mode_t = c_int;
pub type hb_buffer_content_type_t = c_int;
pub type hb_destroy_func_t = Option<unsafe extern "C" fn(user_data: *mut c_void)>;

pub const HB_MEMORY_MODE_DUPLICATE: hb_memory_mode_t = 0;
pub const HB_MEMORY_MODE_READONLY: hb_memory_mode_t = 1;
pub const HB_MEMORY_MODE_WRITABLE: hb_memory_mode_t = 2;
pub const HB_MEMORY_MODE_READONLY_MAY_MAKE_WRITABLE: hb_memory_mode_t = 3;

pub const HB_BUFFER_CONTENT_TYPE_INVALID: hb_buffer_content_type_t = 0;
pub const HB_BUFFER_CONTENT_TYPE_UNICODE: hb_buffer_content_type_t = 1;
pub const HB_BUFFER_CONTENT_TYPE_GLYPHS: hb_buffer_content_type_t = 2;

#[repr(C)]
pub struct hb_blob_t {
    _private: [u8; 0],
}

#[repr(C)]
pub struct hb_buffer_t {
    _private: [u8; 0],
}

#[repr(C)]
pub struct hb_face_t {
    _private: [u8; 0],
}

#[repr(C)]
pub struct hb_font_t {
    _private: [u8; 0],
}

#[repr(C)]
pub struct hb_feature_t {
    _private: [u8; 0],
}

#[repr(C)]
pub struct hb_language_impl_t {
    _private: [u8; 0],
}

pub type hb_language_t = *const hb_language_impl_t;

/// `hb_var_int_t` is a 32-bit union; only its size matters here.
pub type hb_var_int_t = u32;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct hb_glyph_info_t {
    pub codepoint: hb_codepoint_t,
    pub mask: hb_mask_t,
    pub cluster: u32,
    pub var1: hb_var_int_t,
    pub var2: hb_var_int_t,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct hb_glyph_position_t {
    pub x_advance: hb_position_t,
    pub y_advance: hb_position_t,
    pub x_offset: hb_position_t,
    pub y_offset: hb_position_t,
    pub var: hb_var_int_t,
}

extern "C" {
    // hb-buffer.h
    pub fn hb_buffer_create() -> *mut hb_buffer_t;
    pub fn hb_buffer_destroy(buffer: *mut hb_buffer_t);
    pub fn hb_buffer_reset(buffer: *mut hb_buffer_t);
    pub fn hb_buffer_clear_contents(buffer: *mut hb_buffer_t);
    pub fn hb_buffer_allocation_successful(buffer: *mut hb_buffer_t) -> hb_bool_t;
    pub fn hb_buffer_add_utf8(
        buffer: *mut hb_buffer_t,
        text: *const c_char,
        text_length: c_int,
        item_offset: c_uint,
        item_length: c_int,
    );
    pub fn hb_buffer_set_direction(buffer: *mut hb_buffer_t, direction: hb_direction_t);
    pub fn hb_buffer_get_direction(buffer: *const hb_buffer_t) -> hb_direction_t;
    pub fn hb_buffer_set_script(buffer: *mut hb_buffer_t, script: hb_script_t);
    pub fn hb_buffer_get_script(buffer: *const hb_buffer_t) -> hb_script_t;
    pub fn hb_buffer_set_language(buffer: *mut hb_buffer_t, language: hb_language_t);
    pub fn hb_buffer_get_language(buffer: *const hb_buffer_t) -> hb_language_t;
    pub fn hb_buffer_guess_segment_properties(buffer: *mut hb_buffer_t);
    pub fn hb_buffer_get_length(buffer: *const hb_buffer_t) -> c_uint;
    pub fn hb_buffer_get_content_type(buffer: *const hb_buffer_t) -> hb_buffer_content_type_t;
    pub fn hb_buffer_get_glyph_infos(
        buffer: *mut hb_buffer_t,
        length: *mut c_uint,
    ) -> *mut hb_glyph_info_t;
    pub fn hb_buffer_get_glyph_positions(
        buffer: *mut hb_buffer_t,
        length: *mut c_uint,
    ) -> *mut hb_glyph_position_t;

    // hb-blob.h
    pub fn hb_blob_create(
        data: *const c_char,
        length: c_uint,
        mode: hb_memory_mode_t,
        user_data: *mut c_void,
        destroy: hb_destroy_func_t,
    ) -> *mut hb_blob_t;
    pub fn hb_blob_destroy(blob: *mut hb_blob_t);
    pub fn hb_blob_get_length(blob: *mut hb_blob_t) -> c_uint;
    pub fn hb_blob_get_empty() -> *mut hb_blob_t;

    // hb-face.h
    pub fn hb_face_create(blob: *mut hb_blob_t, index: c_uint) -> *mut hb_face_t;
    pub fn hb_face_destroy(face: *mut hb_face_t);
    pub fn hb_face_get_upem(face: *const hb_face_t) -> c_uint;
    pub fn hb_face_get_glyph_count(face: *const hb_face_t) -> c_uint;
    pub fn hb_face_get_index(face: *const hb_face_t) -> c_uint;
    pub fn hb_face_get_empty() -> *mut hb_face_t;

    // hb-font.h
    pub fn hb_font_create(face: *mut hb_face_t) -> *mut hb_font_t;
    pub fn hb_font_destroy(font: *mut hb_font_t);
    pub fn hb_font_reference(font: *mut hb_font_t) -> *mut hb_font_t;
    pub fn hb_font_set_scale(font: *mut hb_font_t, x_scale: c_int, y_scale: c_int);
    pub fn hb_font_get_scale(font: *mut hb_font_t, x_scale: *mut c_int, y_scale: *mut c_int);
    pub fn hb_font_get_empty() -> *mut hb_font_t;

    // hb-shape.h
    pub fn hb_shape(
        font: *mut hb_font_t,
        buffer: *mut hb_buffer_t,
        features: *const hb_feature_t,
        num_features: c_uint,
    );

    // hb-common.h
    pub fn hb_language_from_string(str: *const c_char, len: c_int) -> hb_language_t;
    pub fn hb_language_to_string(language: hb_language_t) -> *const c_char;
}

#[cfg(feature = "freetype")]
extern "C" {
    // hb-ft.h; FT_Face is an opaque pointer on this side.
    pub fn hb_ft_font_create_referenced(ft_face: *mut c_void) -> *mut hb_font_t;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_record_layouts_match_the_c_headers() {
        assert_eq!(size_of::<hb_glyph_info_t>(), 20);
        assert_eq!(size_of::<hb_glyph_position_t>(), 20);
    }
}
