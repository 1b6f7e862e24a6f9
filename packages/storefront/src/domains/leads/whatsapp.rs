//! WhatsApp deep links for the contact funnel.
//!
//! Two URI schemes: the native app scheme on handheld platforms and the
//! wa.me web endpoint elsewhere. Callers open `primary` and switch to
//! `fallback` if the environment rejects the native scheme.

use crate::domains::catalog::models::Property;

/// Client platform, as detected by the embedding shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientPlatform {
    /// Handheld with the native app scheme available.
    Mobile,
    /// Desktop browser or unknown; use the web endpoint directly.
    Web,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub primary: String,
    /// Web endpoint; always safe to open if `primary` throws.
    pub fallback: String,
}

/// Whole-unit price for the message body, grouped for readability.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("R$ {sign}{grouped}")
}

/// Interest message templated with the listing details and the page URL.
pub fn interest_message(property: &Property, page_url: &str) -> String {
    format!(
        "Hello! I'm interested in \"{}\" (code {}) listed at {}. Could you share more details? Link: {}",
        property.title,
        property.code(),
        format_price(property.price),
        page_url,
    )
}

/// Build the outbound link pair for a contact number.
///
/// Returns `None` when the number has no digits - the caller shows the
/// contact-unavailable notice instead.
pub fn contact_link(phone: &str, message: &str, platform: ClientPlatform) -> Option<DeepLink> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let text = urlencoding::encode(message);
    let fallback = format!("https://wa.me/{digits}?text={text}");
    let primary = match platform {
        ClientPlatform::Mobile => format!("whatsapp://send?phone={digits}&text={text}"),
        ClientPlatform::Web => fallback.clone(),
    };
    Some(DeepLink { primary, fallback })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_grouped() {
        assert_eq!(format_price(0), "R$ 0");
        assert_eq!(format_price(950), "R$ 950");
        assert_eq!(format_price(450_000), "R$ 450.000");
        assert_eq!(format_price(1_250_000), "R$ 1.250.000");
    }

    #[test]
    fn phone_is_reduced_to_digits() {
        let link = contact_link("+55 (48) 99999-0000", "hi", ClientPlatform::Web).unwrap();
        assert_eq!(link.fallback, "https://wa.me/5548999990000?text=hi");
    }

    #[test]
    fn mobile_gets_the_native_scheme_with_web_fallback() {
        let link = contact_link("5548999990000", "hello there", ClientPlatform::Mobile).unwrap();
        assert!(link.primary.starts_with("whatsapp://send?phone=5548999990000&text="));
        assert!(link.fallback.starts_with("https://wa.me/5548999990000?text="));
    }

    #[test]
    fn web_primary_is_the_fallback() {
        let link = contact_link("123", "x", ClientPlatform::Web).unwrap();
        assert_eq!(link.primary, link.fallback);
    }

    #[test]
    fn message_is_url_encoded() {
        let link = contact_link("123", "two words & more", ClientPlatform::Web).unwrap();
        assert_eq!(link.fallback, "https://wa.me/123?text=two%20words%20%26%20more");
    }

    #[test]
    fn empty_number_yields_no_link() {
        assert_eq!(contact_link("", "hi", ClientPlatform::Web), None);
        assert_eq!(contact_link("call me", "hi", ClientPlatform::Mobile), None);
    }
}
