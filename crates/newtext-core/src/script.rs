//! Script codes in the native tag space
//!
//! Every constant here is the ISO 15924 code packed as a [`Tag`], which is
//! exactly the value `hb_script_t` uses. A wrong value does not fail at the
//! native boundary, it silently selects the wrong shaping rules, so the
//! table must stay identical to HarfBuzz's `hb-common.h`.

use std::fmt;
use std::str::FromStr;

use crate::error::NewtextError;
use crate::tag::Tag;

/// A writing system, identified by its four-letter tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script(Tag);

macro_rules! script_table {
    ($($name:ident => $code:expr,)*) => {
        impl Script {
            $(
                #[doc = concat!("`", stringify!($code), "`")]
                pub const $name: Script = Script(Tag::new(*$code));
            )*

            /// Every known script with its symbolic name, in native header order.
            pub const ALL: &'static [(&'static str, Script)] = &[
                $((stringify!($name), Script::$name),)*
            ];
        }
    };
}

script_table! {
    COMMON => b"Zyyy",
    INHERITED => b"Zinh",
    UNKNOWN => b"Zzzz",
    ARABIC => b"Arab",
    ARMENIAN => b"Armn",
    BENGALI => b"Beng",
    CYRILLIC => b"Cyrl",
    DEVANAGARI => b"Deva",
    GEORGIAN => b"Geor",
    GREEK => b"Grek",
    GUJARATI => b"Gujr",
    GURMUKHI => b"Guru",
    HANGUL => b"Hang",
    HAN => b"Hani",
    HEBREW => b"Hebr",
    HIRAGANA => b"Hira",
    KANNADA => b"Knda",
    KATAKANA => b"Kana",
    LAO => b"Laoo",
    LATIN => b"Latn",
    MALAYALAM => b"Mlym",
    ORIYA => b"Orya",
    TAMIL => b"Taml",
    TELUGU => b"Telu",
    THAI => b"Thai",
    TIBETAN => b"Tibt",
    BOPOMOFO => b"Bopo",
    BRAILLE => b"Brai",
    CANADIAN_SYLLABICS => b"Cans",
    CHEROKEE => b"Cher",
    ETHIOPIC => b"Ethi",
    KHMER => b"Khmr",
    MONGOLIAN => b"Mong",
    MYANMAR => b"Mymr",
    OGHAM => b"Ogam",
    RUNIC => b"Runr",
    SINHALA => b"Sinh",
    SYRIAC => b"Syrc",
    THAANA => b"Thaa",
    YI => b"Yiii",
    DESERET => b"Dsrt",
    GOTHIC => b"Goth",
    OLD_ITALIC => b"Ital",
    BUHID => b"Buhd",
    HANUNOO => b"Hano",
    TAGALOG => b"Tglg",
    TAGBANWA => b"Tagb",
    CYPRIOT => b"Cprt",
    LIMBU => b"Limb",
    LINEAR_B => b"Linb",
    OSMANYA => b"Osma",
    SHAVIAN => b"Shaw",
    TAI_LE => b"Tale",
    UGARITIC => b"Ugar",
    BUGINESE => b"Bugi",
    COPTIC => b"Copt",
    GLAGOLITIC => b"Glag",
    KHAROSHTHI => b"Khar",
    NEW_TAI_LUE => b"Talu",
    OLD_PERSIAN => b"Xpeo",
    SYLOTI_NAGRI => b"Sylo",
    TIFINAGH => b"Tfng",
    BALINESE => b"Bali",
    CUNEIFORM => b"Xsux",
    NKO => b"Nkoo",
    PHAGS_PA => b"Phag",
    PHOENICIAN => b"Phnx",
    CARIAN => b"Cari",
    CHAM => b"Cham",
    KAYAH_LI => b"Kali",
    LEPCHA => b"Lepc",
    LYCIAN => b"Lyci",
    LYDIAN => b"Lydi",
    OL_CHIKI => b"Olck",
    REJANG => b"Rjng",
    SAURASHTRA => b"Saur",
    SUNDANESE => b"Sund",
    VAI => b"Vaii",
    AVESTAN => b"Avst",
    BAMUM => b"Bamu",
    EGYPTIAN_HIEROGLYPHS => b"Egyp",
    IMPERIAL_ARAMAIC => b"Armi",
    INSCRIPTIONAL_PAHLAVI => b"Phli",
    INSCRIPTIONAL_PARTHIAN => b"Prti",
    JAVANESE => b"Java",
    KAITHI => b"Kthi",
    LISU => b"Lisu",
    MEETEI_MAYEK => b"Mtei",
    OLD_SOUTH_ARABIAN => b"Sarb",
    OLD_TURKIC => b"Orkh",
    SAMARITAN => b"Samr",
    TAI_THAM => b"Lana",
    TAI_VIET => b"Tavt",
    BATAK => b"Batk",
    BRAHMI => b"Brah",
    MANDAIC => b"Mand",
    CHAKMA => b"Cakm",
    MEROITIC_CURSIVE => b"Merc",
    MEROITIC_HIEROGLYPHS => b"Mero",
    MIAO => b"Plrd",
    SHARADA => b"Shrd",
    SORA_SOMPENG => b"Sora",
    TAKRI => b"Takr",
    BASSA_VAH => b"Bass",
    CAUCASIAN_ALBANIAN => b"Aghb",
    DUPLOYAN => b"Dupl",
    ELBASAN => b"Elba",
    GRANTHA => b"Gran",
    KHOJKI => b"Khoj",
    KHUDAWADI => b"Sind",
    LINEAR_A => b"Lina",
    MAHAJANI => b"Mahj",
    MANICHAEAN => b"Mani",
    MENDE_KIKAKUI => b"Mend",
    MODI => b"Modi",
    MRO => b"Mroo",
    NABATAEAN => b"Nbat",
    OLD_NORTH_ARABIAN => b"Narb",
    OLD_PERMIC => b"Perm",
    PAHAWH_HMONG => b"Hmng",
    PALMYRENE => b"Palm",
    PAU_CIN_HAU => b"Pauc",
    PSALTER_PAHLAVI => b"Phlp",
    SIDDHAM => b"Sidd",
    TIRHUTA => b"Tirh",
    WARANG_CITI => b"Wara",
    AHOM => b"Ahom",
    ANATOLIAN_HIEROGLYPHS => b"Hluw",
    HATRAN => b"Hatr",
    MULTANI => b"Mult",
    OLD_HUNGARIAN => b"Hung",
    SIGNWRITING => b"Sgnw",
    ADLAM => b"Adlm",
    BHAIKSUKI => b"Bhks",
    MARCHEN => b"Marc",
    OSAGE => b"Osge",
    TANGUT => b"Tang",
    NEWA => b"Newa",
    MASARAM_GONDI => b"Gonm",
    NUSHU => b"Nshu",
    SOYOMBO => b"Soyo",
    ZANABAZAR_SQUARE => b"Zanb",
    DOGRA => b"Dogr",
    GUNJALA_GONDI => b"Gong",
    HANIFI_ROHINGYA => b"Rohg",
    MAKASAR => b"Maka",
    MEDEFAIDRIN => b"Medf",
    OLD_SOGDIAN => b"Sogo",
    SOGDIAN => b"Sogd",
    ELYMAIC => b"Elym",
    NANDINAGARI => b"Nand",
    NYIAKENG_PUACHUE_HMONG => b"Hmnp",
    WANCHO => b"Wcho",
    CHORASMIAN => b"Chrs",
    DIVES_AKURU => b"Diak",
    KHITAN_SMALL_SCRIPT => b"Kits",
    YEZIDI => b"Yezi",
    CYPRO_MINOAN => b"Cpmn",
    OLD_UYGHUR => b"Ougr",
    TANGSA => b"Tnsa",
    TOTO => b"Toto",
    VITHKUQI => b"Vith",
    MATH => b"Zmth",
    KAWI => b"Kawi",
    NAG_MUNDARI => b"Nagm",
    GARAY => b"Gara",
    GURUNG_KHEMA => b"Gukh",
    KIRAT_RAI => b"Krai",
    OL_ONAL => b"Onao",
    SUNUWAR => b"Sunu",
    TODHRI => b"Todr",
    TULU_TIGALARI => b"Tutg",
}

impl Script {
    /// `HB_SCRIPT_INVALID`, the zero tag.
    pub const INVALID: Script = Script(Tag::NONE);

    pub const fn from_tag(tag: Tag) -> Self {
        Script(tag)
    }

    pub const fn tag(self) -> Tag {
        self.0
    }

    pub const fn to_raw(self) -> u32 {
        self.0.to_raw()
    }

    pub const fn from_raw(raw: u32) -> Self {
        Script(Tag::from_raw(raw))
    }

    /// Symbolic name (`"LATIN"`) for scripts in [`Script::ALL`].
    pub fn name(self) -> Option<&'static str> {
        if self == Script::INVALID {
            return Some("INVALID");
        }
        Script::ALL
            .iter()
            .find(|(_, script)| *script == self)
            .map(|(name, _)| *name)
    }

    /// Look up by symbolic name, ignoring case; `-` and spaces match `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        if normalized == "INVALID" {
            return Some(Script::INVALID);
        }
        Script::ALL
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, script)| *script)
    }

    /// Resolve an ISO 15924 code the way `hb_script_from_string` does.
    ///
    /// The code is title-cased first, deprecated and variant codes fold to
    /// their base script, and any well-formed code outside the table passes
    /// through unchanged. Malformed input yields [`Script::UNKNOWN`].
    pub fn from_iso15924(code: &str) -> Self {
        let Ok(tag) = code.parse::<Tag>() else {
            return Script::UNKNOWN;
        };
        let tag = Tag((tag.0 & 0xDFDF_DFDF) | 0x0020_2020);

        match &tag.to_bytes() {
            b"Qaai" => Script::INHERITED,
            b"Qaac" => Script::COPTIC,
            b"Aran" => Script::ARABIC,
            b"Cyrs" => Script::CYRILLIC,
            b"Geok" => Script::GEORGIAN,
            b"Hans" | b"Hant" => Script::HAN,
            b"Jamo" => Script::HANGUL,
            b"Latf" | b"Latg" => Script::LATIN,
            b"Syre" | b"Syrj" | b"Syrn" => Script::SYRIAC,
            _ if (tag.0 & 0xE0E0_E0E0) == 0x4060_6060 => Script(tag),
            _ => Script::UNKNOWN,
        }
    }

    /// Whether the script is listed in [`Script::ALL`].
    pub fn is_known(self) -> bool {
        Script::ALL.iter().any(|(_, script)| *script == self)
    }
}

impl From<Tag> for Script {
    fn from(tag: Tag) -> Self {
        Script(tag)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Script::{}", name),
            None => write!(f, "Script({})", self.0),
        }
    }
}

/// Accepts a symbolic name (`"latin"`, `"old-italic"`) or an ISO 15924 code (`"Latn"`).
impl FromStr for Script {
    type Err = NewtextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(script) = Script::from_name(s) {
            return Ok(script);
        }
        if s.len() == 4 {
            let script = Script::from_iso15924(s);
            if script != Script::UNKNOWN || s.eq_ignore_ascii_case("zzzz") {
                return Ok(script);
            }
        }
        Err(NewtextError::UnknownScript(s.to_string()))
    }
}
