use crate::context::Platform;

const LOWER_A: u32 = 97;
const LOWER_Z: u32 = 122;
const UPPER_A: u32 = 65;
const UPPER_Z: u32 = 90;

pub const BACKSPACE: u32 = 8;

fn is_lower(code: u32) -> bool {
    (LOWER_A..=LOWER_Z).contains(&code)
}

// Uppercase codes count only when not produced by Shift on a Mac, which
// reports Shift+CapsLock combinations differently.
fn is_upper(code: u32, shift: bool, platform: Platform) -> bool {
    (UPPER_A..=UPPER_Z).contains(&code) && !(shift && platform.is_mac())
}

/// Infer whether Caps Lock is engaged from the code range and the Shift flag.
/// `None` for anything that is not a qualifying alphabetic key.
pub fn caps_lock_active(code: u32, shift: bool, platform: Platform) -> Option<bool> {
    if is_lower(code) {
        Some(shift)
    } else if is_upper(code, shift, platform) {
        Some(!shift)
    } else {
        None
    }
}

/// The typed character with its case inverted.
pub fn corrected_char(code: u32, shift: bool, platform: Platform) -> Option<char> {
    let c = char::from_u32(code)?;
    if is_lower(code) {
        Some(c.to_ascii_uppercase())
    } else if is_upper(code, shift, platform) {
        Some(c.to_ascii_lowercase())
    } else if c.is_ascii_alphabetic() {
        Some(c)
    } else {
        None
    }
}

/// A keystroke that needs its case flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qualified {
    /// What the browser will insert.
    pub typed: char,
    /// What the user meant.
    pub corrected: char,
}

pub fn qualify(code: u32, shift: bool, platform: Platform) -> Option<Qualified> {
    if caps_lock_active(code, shift, platform)? {
        Some(Qualified {
            typed: char::from_u32(code)?,
            corrected: corrected_char(code, shift, platform)?,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercase_with_shift_means_caps_lock() {
        assert_eq!(caps_lock_active(97, true, Platform::Other), Some(true));
        assert_eq!(caps_lock_active(122, false, Platform::Other), Some(false));
        assert_eq!(caps_lock_active(110, true, Platform::Mac), Some(true));
    }

    #[test]
    fn uppercase_without_shift_means_caps_lock() {
        assert_eq!(caps_lock_active(65, false, Platform::Other), Some(true));
        assert_eq!(caps_lock_active(90, true, Platform::Other), Some(false));
        assert_eq!(caps_lock_active(72, false, Platform::Mac), Some(true));
    }

    #[test]
    fn mac_shift_uppercase_is_not_alphabetic() {
        assert_eq!(caps_lock_active(65, true, Platform::Mac), None);
        assert_eq!(corrected_char(65, true, Platform::Mac), Some('A'));
        assert_eq!(qualify(65, true, Platform::Mac), None);
    }

    #[test]
    fn non_alphabetic_codes_are_ignored() {
        for code in [0, 8, 13, 32, 48, 57, 64, 91, 96, 123, 233] {
            assert_eq!(caps_lock_active(code, true, Platform::Other), None);
            assert_eq!(qualify(code, false, Platform::Other), None);
        }
    }

    #[test]
    fn qualify_inverts_case() {
        assert_eq!(
            qualify(104, true, Platform::Other),
            Some(Qualified { typed: 'h', corrected: 'H' })
        );
        assert_eq!(
            qualify(72, false, Platform::Other),
            Some(Qualified { typed: 'H', corrected: 'h' })
        );
        assert_eq!(qualify(104, false, Platform::Other), None);
    }
}
