use medmentor::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Is it safe to combine warfarin and aspirin?";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let prompt = "Authorization: Bearer sk-abc123xyz";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let prompt = "Send request with api_key=secret123";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_password_when_sanitizing_then_redacts_password() {
    let prompt = "Login with password=hunter2";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("password=[REDACTED]"));
    assert!(!result.contains("hunter2"));
}

#[test]
fn given_whitespace_padded_prompt_when_sanitizing_then_trims() {
    let prompt = "  Hello world  ";
    assert_eq!(sanitize_prompt(prompt), "Hello world");
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_truncates_on_char_boundary() {
    let prompt = "é".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("... (120 chars total)"));
}

#[test]
fn given_supabase_style_apikey_when_sanitizing_then_redacts_key() {
    let prompt = "GET /functions/v1/drug-advisor?apikey=eyJhbGci&x=1";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("apikey=[REDACTED]&x=1"));
    assert!(!result.contains("eyJhbGci"));
}
