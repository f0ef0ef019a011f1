//! Text formatting shared by anything that presents records

const MAX_BASE_STAT: f32 = 255.0;

/// `25` -> `#025`
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// `special-attack` -> `Special attack`
pub fn display_name(name: &str) -> String {
    let spaced = name.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn height_meters(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f32 / 10.0)
}

pub fn weight_kilograms(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f32 / 10.0)
}

/// Share of the stat bar to fill, in `0.0..=1.0`.
pub fn stat_fraction(base_stat: u32) -> f32 {
    (base_stat as f32 / MAX_BASE_STAT).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dex_number_pads_to_three() {
        assert_eq!(dex_number(1), "#001");
        assert_eq!(dex_number(25), "#025");
        assert_eq!(dex_number(1025), "#1025");
    }

    #[test]
    fn display_name_capitalizes_and_spaces() {
        assert_eq!(display_name("special-attack"), "Special attack");
        assert_eq!(display_name("pikachu"), "Pikachu");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn units_divide_by_ten() {
        assert_eq!(height_meters(7), "0.7 m");
        assert_eq!(weight_kilograms(69), "6.9 kg");
    }

    #[test]
    fn stat_fraction_is_clamped() {
        assert_eq!(stat_fraction(0), 0.0);
        assert_eq!(stat_fraction(255), 1.0);
        assert_eq!(stat_fraction(300), 1.0);
    }
}
