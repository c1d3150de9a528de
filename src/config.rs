use log::Level;

pub const COMPANY_NAME: &str = "S&Z Trading International Limited";
pub const FOUNDED_YEAR: i32 = 2022;

pub const PHONE_HREF: &str = "tel:+441234567890";
pub const PHONE_DISPLAY: &str = "+44 123 456 7890";
pub const CONTACT_EMAIL: &str = "info@szitrans.com";
pub const LOCATION: &str = "United Kingdom";

pub const QUOTE_TARGET: &str = "/contact";

/// Header switches to its solid palette once the page is scrolled past this.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long the mobile menu stays mounted while it animates out.
pub const MENU_EXIT_MS: u32 = 200;

pub fn mailto_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::is_valid_email;

    #[test]
    fn contact_email_is_well_formed() {
        assert!(is_valid_email(CONTACT_EMAIL));
        assert_eq!(mailto_href(), "mailto:info@szitrans.com");
    }

    #[test]
    fn phone_href_matches_display_number() {
        let href_digits: String = PHONE_HREF.chars().filter(char::is_ascii_digit).collect();
        let display_digits: String = PHONE_DISPLAY.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(href_digits, display_digits);
        assert!(PHONE_HREF.starts_with("tel:+"));
    }

    #[test]
    fn national_digits_format_for_the_start_up_log() {
        let national = PHONE_HREF.trim_start_matches("tel:+44");
        assert_eq!(crate::utils::format_phone(national), "12 3456 7890");
    }
}
