//! Authentication primitives such as login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.
//! Each field owns an ordered rule table; every field is checked and the
//! first failing rule per field is reported.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use zeroize::Zeroizing;

/// Login payload field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    /// The `email` field.
    Email,
    /// The `password` field.
    Password,
}

impl LoginField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// A single failed login validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRule {
    /// Email was missing or empty.
    EmailRequired,
    /// Email was present but not a syntactically valid address.
    InvalidEmailFormat,
    /// Password was missing or empty.
    PasswordRequired,
}

impl LoginRule {
    /// Field the rule guards.
    pub fn field(self) -> LoginField {
        match self {
            Self::EmailRequired | Self::InvalidEmailFormat => LoginField::Email,
            Self::PasswordRequired => LoginField::Password,
        }
    }

    /// Stable machine-readable code for adapters.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmailRequired => "email_required",
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::PasswordRequired => "password_required",
        }
    }

    /// Human-readable message surfaced to callers.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmailRequired => "Email is required",
            Self::InvalidEmailFormat => "Invalid email format",
            Self::PasswordRequired => "Password is required",
        }
    }
}

impl fmt::Display for LoginRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

struct FieldRule {
    rule: LoginRule,
    passes: fn(&str) -> bool,
}

const EMAIL_RULES: &[FieldRule] = &[
    FieldRule {
        rule: LoginRule::EmailRequired,
        passes: is_present,
    },
    FieldRule {
        rule: LoginRule::InvalidEmailFormat,
        passes: is_email,
    },
];

const PASSWORD_RULES: &[FieldRule] = &[FieldRule {
    rule: LoginRule::PasswordRequired,
    passes: is_present,
}];

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| {
            // Dot-atom local part; hostname labels ending in an alphabetic TLD of
            // at least two letters. Quoted local parts and IP literals fail.
            Regex::new(concat!(
                r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
                r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
            ))
            .ok()
        })
        .as_ref()
}

fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    let local_fits = value
        .rsplit_once('@')
        .is_some_and(|(local, _)| local.len() <= EMAIL_LOCAL_MAX_LEN);
    local_fits && email_regex().is_some_and(|re| re.is_match(value))
}

fn first_failure(value: &str, rules: &[FieldRule]) -> Option<LoginRule> {
    rules
        .iter()
        .find(|candidate| !(candidate.passes)(value))
        .map(|candidate| candidate.rule)
}

/// Domain error returned when login payload values are invalid.
///
/// Holds every failed rule, at most one per field, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginValidationError {
    violations: Vec<LoginRule>,
}

impl LoginValidationError {
    /// Failed rules in field order.
    pub fn violations(&self) -> &[LoginRule] {
        self.violations.as_slice()
    }

    /// Messages for every failed rule.
    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|rule| rule.message()).collect()
    }

    /// Whether the given rule failed.
    pub fn contains(&self, rule: LoginRule) -> bool {
        self.violations.contains(&rule)
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials handed to authentication services.
///
/// ## Invariants
/// - `email` is non-empty and syntactically valid. It is not trimmed, so
///   surrounding whitespace fails the format rule.
/// - `password` is non-empty and retains caller-provided whitespace to avoid
///   surprising credential comparisons.
///
/// # Examples
/// ```
/// use restaurant_discovery::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("user@example.com", "Password123!").unwrap();
/// assert_eq!(creds.email(), "user@example.com");
/// assert_eq!(creds.password(), "Password123!");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let violations: Vec<LoginRule> = [
            first_failure(email, EMAIL_RULES),
            first_failure(password, PASSWORD_RULES),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !violations.is_empty() {
            return Err(LoginValidationError { violations });
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address suitable for user lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "x", LoginRule::EmailRequired)]
    #[case("not-an-email", "x", LoginRule::InvalidEmailFormat)]
    #[case("a@b.com", "", LoginRule::PasswordRequired)]
    fn single_rule_failures(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginRule,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err.violations(), &[expected]);
    }

    #[rstest]
    fn messages_match_the_login_contract() {
        let cases = [
            ("", "x", "Email is required"),
            ("not-an-email", "x", "Invalid email format"),
            ("a@b.com", "", "Password is required"),
        ];
        for (email, password, message) in cases {
            let err = LoginCredentials::try_from_parts(email, password)
                .expect_err("invalid inputs must fail");
            assert_eq!(err.messages(), vec![message]);
        }
    }

    #[rstest]
    fn empty_email_reports_only_the_required_rule() {
        let err = LoginCredentials::try_from_parts("", "x").expect_err("empty email fails");
        assert!(err.contains(LoginRule::EmailRequired));
        assert!(!err.contains(LoginRule::InvalidEmailFormat));
    }

    #[rstest]
    fn collects_failures_across_fields() {
        let err = LoginCredentials::try_from_parts("nope", "").expect_err("both fields fail");
        assert_eq!(
            err.violations(),
            &[LoginRule::InvalidEmailFormat, LoginRule::PasswordRequired]
        );
        assert_eq!(err.to_string(), "Invalid email format; Password is required");
    }

    #[rstest]
    #[case("a@b.com")]
    #[case("user.name+tag@sub.example.co.uk")]
    #[case("o'brien@example.ie")]
    fn accepts_valid_addresses(#[case] email: &str) {
        let creds =
            LoginCredentials::try_from_parts(email, "Password123!").expect("valid inputs pass");
        assert_eq!(creds.email(), email);
        assert_eq!(creds.password(), "Password123!");
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@localhost")]
    #[case("user@-example.com")]
    #[case(" user@example.com")]
    #[case("user name@example.com")]
    #[case("a..b@example.com")]
    #[case(".a@example.com")]
    #[case("a.@example.com")]
    #[case("user@example.123")]
    #[case("a@b.c")]
    fn rejects_malformed_addresses(#[case] email: &str) {
        let err = LoginCredentials::try_from_parts(email, "pw").expect_err("format must fail");
        assert_eq!(err.violations(), &[LoginRule::InvalidEmailFormat]);
    }

    #[rstest]
    fn rejects_overlong_addresses() {
        let email = format!("{}@example.com", "a".repeat(250));
        let err = LoginCredentials::try_from_parts(&email, "pw").expect_err("too long");
        assert!(err.contains(LoginRule::InvalidEmailFormat));
    }

    #[rstest]
    fn rejects_overlong_local_parts() {
        let email = format!("{}@example.com", "a".repeat(65));
        let err = LoginCredentials::try_from_parts(&email, "pw").expect_err("local part too long");
        assert!(err.contains(LoginRule::InvalidEmailFormat));
        let at_limit = format!("{}@example.com", "a".repeat(64));
        assert!(LoginCredentials::try_from_parts(&at_limit, "pw").is_ok());
    }

    #[rstest]
    fn whitespace_password_is_preserved() {
        let creds = LoginCredentials::try_from_parts("a@b.com", "  ").expect("non-empty password");
        assert_eq!(creds.password(), "  ");
    }

    #[rstest]
    fn debug_output_redacts_password() {
        let creds = LoginCredentials::try_from_parts("a@b.com", "hunter2").expect("valid");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[rstest]
    fn rules_report_their_field() {
        assert_eq!(LoginRule::EmailRequired.field(), LoginField::Email);
        assert_eq!(LoginRule::InvalidEmailFormat.field().as_str(), "email");
        assert_eq!(LoginRule::PasswordRequired.field().as_str(), "password");
    }
}
