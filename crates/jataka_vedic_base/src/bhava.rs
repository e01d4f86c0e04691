//! Whole-sign bhava (house) numbering.
//!
//! House boundaries coincide with rashi boundaries: the rashi holding the
//! lagna is house 1, the next rashi house 2, and so on around the zodiac.

/// House number (1-12) of a body sign counted from the lagna sign.
///
/// Both arguments are 0-based rashi indices; values >= 12 wrap.
pub const fn house_from_signs(body_sign: u8, lagna_sign: u8) -> u8 {
    let b = body_sign % 12;
    let a = lagna_sign % 12;
    ((b + 12 - a) % 12) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lagna_sign_is_first_house() {
        for a in 0..12u8 {
            assert_eq!(house_from_signs(a, a), 1);
        }
    }

    #[test]
    fn houses_always_in_range() {
        for a in 0..12u8 {
            for b in 0..12u8 {
                let h = house_from_signs(b, a);
                assert!((1..=12).contains(&h), "house({b},{a}) = {h}");
            }
        }
    }

    #[test]
    fn sign_before_lagna_is_twelfth() {
        assert_eq!(house_from_signs(5, 6), 12);
        assert_eq!(house_from_signs(11, 0), 12);
    }
}
