use log::Level;

pub const BRAND: &str = "Clínica Vivace";
pub const PHONE: &str = "+55 (11) 3456-7890";
pub const PHONE_LINK: &str = "tel:+551134567890";
pub const WHATSAPP_NUMBER: &str = "5511987654321";
pub const EMAIL: &str = "contato@clinicavivace.com.br";
pub const ADDRESS: &str = "Rua das Acácias, 412 - Vila Mariana, São Paulo - SP";
pub const TIMEZONE: chrono_tz::Tz = chrono_tz::America::Sao_Paulo;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    ""  // Production URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// WhatsApp deep link with an optional pre-filled message.
pub fn whatsapp_link(message: Option<&str>) -> String {
    match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(text) => format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        None => format!("https://wa.me/{}", WHATSAPP_NUMBER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_without_message() {
        assert_eq!(whatsapp_link(None), "https://wa.me/5511987654321");
        assert_eq!(whatsapp_link(Some("   ")), "https://wa.me/5511987654321");
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link(Some("Olá, quero agendar")),
            "https://wa.me/5511987654321?text=Ol%C3%A1%2C%20quero%20agendar"
        );
    }
}
