use crate::errors::DomainError;

const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;

/// A syntactically valid email address, split at the first `@`.
///
/// The original input is kept for echoing back in API responses; the
/// local part and domain are stored lowercased since every downstream
/// signal (blocklist, MX cache, keywords, entropy) is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    raw: String,
    local_part: String,
    domain: String,
}

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::InvalidEmail("empty address".to_string()));
        }

        let (local, domain) = input
            .split_once('@')
            .ok_or_else(|| DomainError::InvalidEmail(format!("missing '@' in {input:?}")))?;

        if domain.contains('@') {
            return Err(DomainError::InvalidEmail(format!(
                "multiple '@' in {input:?}"
            )));
        }

        Self::validate_local_part(local, input)?;
        Self::validate_domain(domain, input)?;

        Ok(Self {
            raw: input.to_string(),
            local_part: local.to_lowercase(),
            domain: domain.to_lowercase(),
        })
    }

    fn validate_local_part(local: &str, input: &str) -> Result<(), DomainError> {
        if local.is_empty() {
            return Err(DomainError::InvalidEmail(format!(
                "empty local part in {input:?}"
            )));
        }
        if local.len() > MAX_LOCAL_PART_LEN {
            return Err(DomainError::InvalidEmail(format!(
                "local part exceeds {MAX_LOCAL_PART_LEN} bytes in {input:?}"
            )));
        }
        if local.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::InvalidEmail(format!(
                "local part contains whitespace in {input:?}"
            )));
        }
        Ok(())
    }

    fn validate_domain(domain: &str, input: &str) -> Result<(), DomainError> {
        if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
            return Err(DomainError::InvalidEmail(format!(
                "invalid domain length in {input:?}"
            )));
        }
        if !domain.contains('.') {
            return Err(DomainError::InvalidEmail(format!(
                "domain has no dot in {input:?}"
            )));
        }
        for label in domain.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidEmail(format!(
                    "empty domain label in {input:?}"
                )));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(DomainError::InvalidEmail(format!(
                    "domain label starts or ends with '-' in {input:?}"
                )));
            }
            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(DomainError::InvalidEmail(format!(
                    "invalid character in domain of {input:?}"
                )));
            }
        }
        Ok(())
    }

    /// The address as submitted (whitespace-trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased part before the first `@`.
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Lowercased part after the first `@`.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
