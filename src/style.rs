use serde::{Deserialize, Serialize};

// §0-§f, serialized as the code character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "0")]
    Black,
    #[serde(rename = "1")]
    DarkBlue,
    #[serde(rename = "2")]
    DarkGreen,
    #[serde(rename = "3")]
    DarkAqua,
    #[serde(rename = "4")]
    DarkRed,
    #[serde(rename = "5")]
    DarkPurple,
    #[serde(rename = "6")]
    Gold,
    #[serde(rename = "7")]
    Gray,
    #[serde(rename = "8")]
    DarkGray,
    #[serde(rename = "9")]
    Blue,
    #[serde(rename = "a")]
    Green,
    #[serde(rename = "b")]
    Aqua,
    #[serde(rename = "c")]
    Red,
    #[serde(rename = "d")]
    LightPurple,
    #[serde(rename = "e")]
    Yellow,
    #[serde(rename = "f")]
    White,
}

impl Color {
    pub const DEFAULT: Color = Color::Black;

    pub fn of(code: char) -> Option<Self> {
        let color = match code {
            '0' => Self::Black,
            '1' => Self::DarkBlue,
            '2' => Self::DarkGreen,
            '3' => Self::DarkAqua,
            '4' => Self::DarkRed,
            '5' => Self::DarkPurple,
            '6' => Self::Gold,
            '7' => Self::Gray,
            '8' => Self::DarkGray,
            '9' => Self::Blue,
            'a' => Self::Green,
            'b' => Self::Aqua,
            'c' => Self::Red,
            'd' => Self::LightPurple,
            'e' => Self::Yellow,
            'f' => Self::White,
            _ => return None,
        };
        Some(color)
    }

    pub fn code(&self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }
}

// §k-§o
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Obfuscated,    // §k
    Bold,          // §l
    Strikethrough, // §m
    Underline,     // §n
    Italic,        // §o
}

impl Modifier {
    pub fn of(code: char) -> Option<Self> {
        match code {
            'k' => Some(Self::Obfuscated),
            'l' => Some(Self::Bold),
            'm' => Some(Self::Strikethrough),
            'n' => Some(Self::Underline),
            'o' => Some(Self::Italic),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
        }
    }
}

/// Everything that may follow `§`. Line breaks are `TextEntry::LineBreak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCode {
    Color(Color),
    Modifier(Modifier),
    Reset,
}

impl StyleCode {
    // the character following `§`
    pub fn of(code: char) -> Option<Self> {
        if code == 'r' {
            return Some(Self::Reset);
        }
        if let Some(color) = Color::of(code) {
            return Some(Self::Color(color));
        }
        Modifier::of(code).map(Self::Modifier)
    }

    pub fn is_valid_escape(code: char) -> bool {
        Self::of(code).is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub obfuscated: bool,
    pub bold: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub italic: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !self.obfuscated && !self.bold && !self.strikethrough && !self.underline && !self.italic
    }

    pub fn set(&mut self, modifier: Modifier) {
        match modifier {
            Modifier::Obfuscated => self.obfuscated = true,
            Modifier::Bold => self.bold = true,
            Modifier::Strikethrough => self.strikethrough = true,
            Modifier::Underline => self.underline = true,
            Modifier::Italic => self.italic = true,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        [
            (self.obfuscated, Modifier::Obfuscated),
            (self.bold, Modifier::Bold),
            (self.strikethrough, Modifier::Strikethrough),
            (self.underline, Modifier::Underline),
            (self.italic, Modifier::Italic),
        ]
        .into_iter()
        .filter_map(|(on, modifier)| on.then_some(modifier))
    }
}

/// Formatting state in effect for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    #[serde(default, skip_serializing_if = "Modifiers::is_empty")]
    pub modifiers: Modifiers,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::DEFAULT,
            modifiers: Modifiers::default(),
        }
    }
}

impl Style {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    // "§a", "§c§l", ...
    pub fn codes(&self) -> String {
        let mut codes = format!("§{}", self.color.code());
        for modifier in self.modifiers.iter() {
            codes.push('§');
            codes.push(modifier.code());
        }
        codes
    }
}
