use super::*;

#[test]
fn login_request_trims_username_only() {
    let request = login_request("  marie_dubois ", " pass word ").unwrap();
    assert_eq!(request.username, "marie_dubois");
    assert_eq!(request.password, " pass word ");
}

#[test]
fn login_request_rejects_blank_fields() {
    assert!(login_request("   ", "secret").is_err());
    assert!(login_request("marie", "").is_err());
}
