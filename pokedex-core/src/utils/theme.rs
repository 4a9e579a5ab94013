//! Fixed type and stat palettes

use crate::types::Color;

/// Badge color of a Pokémon type; black for unknown types.
pub fn type_color(type_name: &str) -> Color {
    let rgb = match type_name.to_ascii_lowercase().as_str() {
        "normal" => 0x00A8_A77A,
        "fire" => 0x00EE_8130,
        "water" => 0x0063_90F0,
        "electric" => 0x00F7_D02C,
        "grass" => 0x007A_C74C,
        "ice" => 0x0096_D9D6,
        "fighting" => 0x00C2_2E28,
        "poison" => 0x00A3_3EA1,
        "ground" => 0x00E2_BF65,
        "flying" => 0x00A9_8FF3,
        "psychic" => 0x00F9_5587,
        "bug" => 0x00A6_B91A,
        "rock" => 0x00B6_A136,
        "ghost" => 0x0073_5797,
        "dragon" => 0x006F_35FC,
        "dark" => 0x0070_5746,
        "steel" => 0x00B7_B7CE,
        "fairy" => 0x00D6_85AD,
        _ => return Color::BLACK,
    };
    Color::from_rgb_u32(rgb)
}

/// Bar color of a base stat; white for unknown stats.
pub fn stat_color(stat_name: &str) -> Color {
    let rgb = match stat_name.to_ascii_lowercase().as_str() {
        "hp" => 0x00F5_FF00,
        "attack" => 0x009E_E865,
        "defense" => 0x00F5_DE69,
        "special-attack" => 0x0066_D8F6,
        "special-defense" => 0x0089_9EEA,
        "speed" => 0x00E4_6CF6,
        _ => return Color::WHITE,
    };
    Color::from_rgb_u32(rgb)
}

/// Short label of a base stat; empty for unknown stats.
pub fn stat_abbreviation(stat_name: &str) -> &'static str {
    match stat_name.to_ascii_lowercase().as_str() {
        "hp" => "HP",
        "attack" => "Atk",
        "defense" => "Def",
        "special-attack" => "SpAtk",
        "special-defense" => "SpDef",
        "speed" => "Spd",
        _ => "",
    }
}
