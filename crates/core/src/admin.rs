//! Administrator allow-list.
//!
//! Administrator capability is not stored on the user row. It is derived by
//! checking the user's email against a configured allow-list at token
//! issuance, so rotating the list takes effect on the next login/refresh
//! without touching the database.

/// The configured set of administrator identities.
///
/// Entries are matched case-insensitively. An entry starting with `@` grants
/// admin to every address on that domain (`"@studio.example"` matches
/// `"anyone@studio.example"`); any other entry must match the full address.
#[derive(Debug, Clone, Default)]
pub struct AdminList {
    entries: Vec<String>,
}

impl AdminList {
    /// Build from raw entries, normalizing to lowercase and dropping blanks.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Parse a comma-separated list (the `ADMIN_EMAILS` env var format).
    pub fn from_comma_separated(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Whether the given email holds administrator capability.
    pub fn is_admin(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.entries.iter().any(|entry| {
            if let Some(domain) = entry.strip_prefix('@') {
                email
                    .rsplit_once('@')
                    .is_some_and(|(_, email_domain)| email_domain == domain)
            } else {
                *entry == email
            }
        })
    }

    /// True when no entries are configured (nobody is an admin).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
