use ratatui::style::Color;

use crate::bmi::Category;

pub const ACCENT: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const UNDERWEIGHT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const NORMAL: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const OVERWEIGHT: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const OBESE: Color = Color::Rgb(0xef, 0x44, 0x44);

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Underweight => UNDERWEIGHT,
        Category::Normal => NORMAL,
        Category::Overweight => OVERWEIGHT,
        Category::Obese => OBESE,
    }
}
