//! Core types shared across the tool engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural position of a part within a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    /// Primary part, determines base durability, attack and mining speed
    Head,
    /// Multiplies durability
    Handle,
    /// Adds durability
    Accessory,
}

/// Tooltip color attached to traits and modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    #[default]
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl TextColor {
    /// Name used when persisting the color into a tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::DarkBlue => "dark_blue",
            TextColor::DarkGreen => "dark_green",
            TextColor::DarkAqua => "dark_aqua",
            TextColor::DarkRed => "dark_red",
            TextColor::DarkPurple => "dark_purple",
            TextColor::Gold => "gold",
            TextColor::Gray => "gray",
            TextColor::DarkGray => "dark_gray",
            TextColor::Blue => "blue",
            TextColor::Green => "green",
            TextColor::Aqua => "aqua",
            TextColor::Red => "red",
            TextColor::LightPurple => "light_purple",
            TextColor::Yellow => "yellow",
            TextColor::White => "white",
        }
    }

    /// Parse a persisted color name, falling back to gray for unknown names
    pub fn from_name(name: &str) -> Self {
        match name {
            "black" => TextColor::Black,
            "dark_blue" => TextColor::DarkBlue,
            "dark_green" => TextColor::DarkGreen,
            "dark_aqua" => TextColor::DarkAqua,
            "dark_red" => TextColor::DarkRed,
            "dark_purple" => TextColor::DarkPurple,
            "gold" => TextColor::Gold,
            "dark_gray" => TextColor::DarkGray,
            "blue" => TextColor::Blue,
            "green" => TextColor::Green,
            "aqua" => TextColor::Aqua,
            "red" => TextColor::Red,
            "light_purple" => TextColor::LightPurple,
            "yellow" => TextColor::Yellow,
            "white" => TextColor::White,
            _ => TextColor::Gray,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stack of input items offered to the modifier loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item identifier
    pub item: String,
    /// Number of items in the stack
    pub amount: u32,
}

impl ItemStack {
    pub fn new(item: impl Into<String>, amount: u32) -> Self {
        ItemStack {
            item: item.into(),
            amount,
        }
    }

    /// Check whether this stack holds the given item
    pub fn is(&self, item: &str) -> bool {
        self.item == item && self.amount > 0
    }
}
