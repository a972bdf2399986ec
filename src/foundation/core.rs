use crate::foundation::error::{AlephError, AlephResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> AlephResult<Self> {
        if den == 0 {
            return Err(AlephError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(AlephError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Number of frames needed to cover `secs`, rounding partial frames up.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        // Guard against `0.1 * 30 = 3.0000000000000004` style drift.
        let frames = secs.max(0.0) * self.as_f64();
        (frames - 1e-9).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serialized as a `#RRGGBB` / `#RRGGBBAA` hex string; deserializes from hex, an
/// `{ "r", "g", "b", "a" }` object or a `[r, g, b(, a)]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Self = Self::rgb(0x88, 0x88, 0x88);
    pub const RED: Self = Self::rgb(0xFC, 0x62, 0x55);
    pub const GREEN: Self = Self::rgb(0x83, 0xC1, 0x67);
    pub const BLUE: Self = Self::rgb(0x58, 0xC4, 0xDD);
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    pub const ORANGE: Self = Self::rgb(0xFF, 0x86, 0x2F);
    pub const PINK: Self = Self::rgb(0xD1, 0x47, 0xBD);
    pub const PURPLE: Self = Self::rgb(0x9A, 0x72, 0xAC);
    pub const TEAL: Self = Self::rgb(0x5C, 0xD0, 0xB3);
    pub const MAROON: Self = Self::rgb(0xC5, 0x5F, 0x73);
    pub const GOLD: Self = Self::rgb(0xF0, 0xAC, 0x5F);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn from_hex(s: &str) -> AlephResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> AlephResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| AlephError::serde(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(AlephError::serde("hex color must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err(AlephError::serde(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Color::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Color::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}
