//! Free-text "connect" command parsing.
//!
//! Two grammars are accepted, tried in this order:
//!
//! 1. **Structured**: `key=value` tokens anywhere in the text, with keys
//!    `url`/`base_url`, `username`/`user` and `password`/`pass`.
//!    `connect url=https://10.1.1.1 user=admin pass=Secret123`
//! 2. **Positional**: the first `http://` or `https://` token followed by
//!    exactly two whitespace-delimited tokens, read as username and password.
//!    `connect to https://10.1.1.1 admin Secret123`
//!
//! Tokens are split on whitespace with no quoting or escaping, so neither
//! grammar supports passwords containing spaces.

use super::credentials::Credentials;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectParseError {
    #[error("no http:// or https:// URL found in the request")]
    MissingUrl,

    #[error("expected a username and a password after the URL")]
    MissingCredentials,

    #[error("missing {0} (use url=..., username=... and password=...)")]
    MissingField(&'static str),
}

const URL_KEYS: [&str; 2] = ["url", "base_url"];
const USER_KEYS: [&str; 2] = ["username", "user"];
const PASSWORD_KEYS: [&str; 2] = ["password", "pass"];

/// Parse connect parameters out of a free-text request.
pub fn parse_connect_command(text: &str) -> Result<Credentials, ConnectParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if tokens.iter().any(|t| structured_pair(t).is_some()) {
        return parse_structured(&tokens);
    }

    parse_positional(&tokens)
}

fn structured_pair(token: &str) -> Option<(&'static str, &str)> {
    let (key, value) = token.split_once('=')?;
    let key = key.to_lowercase();
    let canonical = if URL_KEYS.contains(&key.as_str()) {
        "url"
    } else if USER_KEYS.contains(&key.as_str()) {
        "username"
    } else if PASSWORD_KEYS.contains(&key.as_str()) {
        "password"
    } else {
        return None;
    };
    Some((canonical, value))
}

fn parse_structured(tokens: &[&str]) -> Result<Credentials, ConnectParseError> {
    let mut url = None;
    let mut username = None;
    let mut password = None;

    for (key, value) in tokens.iter().filter_map(|t| structured_pair(t)) {
        if value.is_empty() {
            continue;
        }
        match key {
            "url" => url = Some(value),
            "username" => username = Some(value),
            _ => password = Some(value),
        }
    }

    Ok(Credentials::new(
        url.ok_or(ConnectParseError::MissingField("url"))?,
        username.ok_or(ConnectParseError::MissingField("username"))?,
        password.ok_or(ConnectParseError::MissingField("password"))?,
    ))
}

fn is_url(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

fn parse_positional(tokens: &[&str]) -> Result<Credentials, ConnectParseError> {
    let url_index = tokens
        .iter()
        .position(|t| is_url(t))
        .ok_or(ConnectParseError::MissingUrl)?;

    match tokens.get(url_index + 1..url_index + 3) {
        Some([username, password]) => Ok(Credentials::new(
            tokens[url_index],
            *username,
            *password,
        )),
        _ => Err(ConnectParseError::MissingCredentials),
    }
}
