use super::*;

#[test]
fn helper_constructors_pick_the_right_variant() {
    assert!(matches!(
        CardforgeError::validation("bad size"),
        CardforgeError::Validation(_)
    ));
    assert!(matches!(
        CardforgeError::config("bad panel"),
        CardforgeError::Config(_)
    ));
    assert!(matches!(
        CardforgeError::encode("qrencode missing"),
        CardforgeError::Encode(_)
    ));
    assert!(matches!(
        CardforgeError::serde("bad json"),
        CardforgeError::Serde(_)
    ));
}

#[test]
fn display_includes_category_and_message() {
    let e = CardforgeError::validation("cube size must be > 0");
    assert_eq!(e.to_string(), "validation error: cube size must be > 0");
}

#[test]
fn anyhow_errors_pass_through_transparently() {
    let inner = anyhow::anyhow!("disk full");
    let e = CardforgeError::from(inner);
    assert_eq!(e.to_string(), "disk full");
}
