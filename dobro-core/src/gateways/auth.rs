/// Identity carried by a successfully decoded bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub user_id: i64,
    pub login: String,
}

/// Resolves an opaque bearer string into a user identity.
///
/// Implementations decide the token format and its validation rules.
/// `None` covers every failure mode, i.e. malformed, expired or
/// otherwise unverifiable tokens.
pub trait AuthTokenDecoder {
    fn decode_token(&self, token: &str) -> Option<TokenData>;
}
