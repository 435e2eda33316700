use super::*;

#[test]
fn mecard_payload_formats_all_fields() {
    let payload = QrPayload::MeCard {
        name: "Ada Lovelace".to_string(),
        phone: "+44 20 0000 0000".to_string(),
        email: "ada@example.org".to_string(),
        url: "https://example.org".to_string(),
    };
    assert_eq!(
        payload.encode_text(),
        "MECARD:N:Ada Lovelace;TEL:+44 20 0000 0000;EMAIL:ada@example.org;URL:https\\://example.org;;"
    );
}

#[test]
fn mecard_reserved_characters_are_escaped() {
    let payload = QrPayload::MeCard {
        name: "Lovelace; Ada".to_string(),
        phone: String::new(),
        email: String::new(),
        url: String::new(),
    };
    assert!(payload.encode_text().starts_with("MECARD:N:Lovelace\\; Ada;"));
}

#[test]
fn url_payload_is_passed_through_verbatim() {
    let payload = QrPayload::Url("https://example.org/card".to_string());
    assert_eq!(payload.encode_text(), "https://example.org/card");
}

#[test]
fn qrencode_colors_accept_hex_and_common_names() {
    assert_eq!(qrencode_color("#4365E1").unwrap(), "4365E1");
    assert_eq!(qrencode_color("4365E1").unwrap(), "4365E1");
    assert_eq!(qrencode_color("#4365E1FF").unwrap(), "4365E1FF");
    assert_eq!(qrencode_color("white").unwrap(), "FFFFFF");
    assert_eq!(qrencode_color("black").unwrap(), "000000");
    assert!(qrencode_color("hotpink").is_err());
    assert!(qrencode_color("#123").is_err());
}
