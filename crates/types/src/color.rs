use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An opaque-or-translucent RGB colour as carried on styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xff, r, g, b }
    }

    /// Builds a colour from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Formats as `#RRGGBB`, or `#AARRGGBB` when the colour is not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }

    /// Parse a hex colour string (`#RGB`, `#RRGGBB` or `#AARRGGBB`).
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Color must be ASCII hex digits, got: {}", s));
        }

        let channel = |range: &str, name: &str| {
            u8::from_str_radix(range, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => Ok(Color::rgb(
                channel(&hex[0..1].repeat(2), "red")?,
                channel(&hex[1..2].repeat(2), "green")?,
                channel(&hex[2..3].repeat(2), "blue")?,
            )),
            6 => Ok(Color::rgb(
                channel(&hex[0..2], "red")?,
                channel(&hex[2..4], "green")?,
                channel(&hex[4..6], "blue")?,
            )),
            8 => Ok(Color {
                a: channel(&hex[0..2], "alpha")?,
                r: channel(&hex[2..4], "red")?,
                g: channel(&hex[4..6], "green")?,
                b: channel(&hex[6..8], "blue")?,
            }),
            n => Err(format!("Invalid hex color length: expected 3, 6 or 8, got {}", n)),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Argb(u32),
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Argb(n) => Ok(Color::from_argb(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_unpacks_channels() {
        let c = Color::from_argb(0xff2980b9);
        assert_eq!(c, Color { a: 0xff, r: 0x29, g: 0x80, b: 0xb9 });
        assert_eq!(c.to_argb(), 0xff2980b9);
        assert_eq!(c.to_hex(), "#2980b9");
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse_hex(" #2980B9 ").unwrap(), Color::rgb(0x29, 0x80, 0xb9));
        assert_eq!(Color::parse_hex("#802980b9").unwrap().a, 0x80);
        assert!(Color::parse_hex("2980b9").is_err());
        assert!(Color::parse_hex("#12345").is_err());
    }

    #[test]
    fn test_deserialize_from_string_or_number() {
        let c: Color = serde_json::from_str("\"#2980b9\"").unwrap();
        assert_eq!(c, Color::from_argb(0xff2980b9));
        let c: Color = serde_json::from_str("4281958585").unwrap();
        assert_eq!(c, Color::from_argb(0xff2980b9));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#2980b9\"");
    }

    #[test]
    fn test_non_ascii_hex_is_an_error() {
        assert!(Color::parse_hex("#\u{e9}1").is_err());
        assert!(Color::parse_hex("#2980\u{e9}").is_err());
        let err = serde_json::from_str::<Color>("\"#\u{e9}1\"").unwrap_err();
        assert!(err.to_string().contains("ASCII"));
    }
}
