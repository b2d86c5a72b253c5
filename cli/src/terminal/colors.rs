use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 94, g: 234, b: 212 };
pub const ACCENT: Color = Color::TrueColor { r: 250, g: 204, b: 21 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const WEIGHT: Color = Color::TrueColor { r: 147, g: 197, b: 253 };
pub const LIMIT: Color = Color::TrueColor { r: 196, g: 181, b: 253 };
pub const HAZARD: Color = Color::TrueColor { r: 251, g: 146, b: 60 };
pub const SAFE: Color = Color::TrueColor { r: 134, g: 239, b: 172 };
