//! Signup receipt and WhatsApp click-to-chat link

use shared::models::Member;

use super::calendar::expiry_date;

const DATE_FORMAT: &str = "%d %b %Y";

/// Render the confirmation message sent to a member after signup.
pub fn receipt_message(member: &Member, gym_name: &str) -> String {
    let expires_on = expiry_date(member.payment_date, member.duration_months);
    format!(
        "*{gym} RECEIPT*\n\n\
         Hi {name},\n\
         Welcome to the planet! Your subscription is confirmed.\n\n\
         *Plan:* {months} Month(s)\n\
         *Start Date:* {start}\n\
         *Valid Until:* {end}\n\n\
         Let's crush those goals!",
        gym = gym_name.to_uppercase(),
        name = member.name,
        months = member.duration_months,
        start = member.payment_date.format(DATE_FORMAT),
        end = expires_on.format(DATE_FORMAT),
    )
}

/// Digits-only phone number with country code, as wa.me expects.
///
/// A leading `+` means the number already carries its country code;
/// otherwise `default_country_code` is prefixed.
pub fn normalize_phone(phone: &str, default_country_code: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    match cleaned.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None => format!("{default_country_code}{cleaned}"),
    }
}

/// `https://wa.me/<phone>?text=<message>` link that opens a prefilled chat.
pub fn whatsapp_link(phone: &str, message: &str, default_country_code: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_phone(phone, default_country_code),
        urlencoding::encode(message)
    )
}
