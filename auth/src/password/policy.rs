use crate::errors::Violation;

/// Characters accepted by [`PasswordRule::SpecialCharacter`].
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum length enforced by the default policy.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const PASSWORD_FIELD: &str = "password";

/// A single password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    /// At least this many characters.
    MinLength(usize),
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one ASCII lowercase letter.
    Lowercase,
    /// At least one ASCII digit.
    Digit,
    /// At least one character from [`SPECIAL_CHARACTERS`].
    SpecialCharacter,
}

impl PasswordRule {
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength(min) => password.chars().count() >= *min,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::SpecialCharacter => {
                password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            PasswordRule::MinLength(min) => {
                format!("Password must be at least {} characters long", min)
            }
            PasswordRule::Uppercase => {
                "Password must contain at least one uppercase letter".to_string()
            }
            PasswordRule::Lowercase => {
                "Password must contain at least one lowercase letter".to_string()
            }
            PasswordRule::Digit => "Password must contain at least one number".to_string(),
            PasswordRule::SpecialCharacter => format!(
                "Password must contain at least one special character ({})",
                SPECIAL_CHARACTERS
            ),
        }
    }

    fn check(&self, password: &str) -> Option<Violation> {
        if self.is_satisfied_by(password) {
            None
        } else {
            Some(Violation::new(PASSWORD_FIELD, self.message()))
        }
    }
}

/// Ordered set of password rules.
///
/// Every rule is evaluated, so callers see all violations at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    rules: Vec<PasswordRule>,
}

impl PasswordPolicy {
    pub fn new(rules: Vec<PasswordRule>) -> Self {
        Self { rules }
    }

    pub fn with_rule(mut self, rule: PasswordRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[PasswordRule] {
        &self.rules
    }

    /// Validate a candidate password.
    ///
    /// # Returns
    /// One violation per broken rule, in rule order; empty when the password is acceptable
    pub fn validate(&self, password: &str) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(password))
            .collect()
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(vec![
            PasswordRule::MinLength(MIN_PASSWORD_LENGTH),
            PasswordRule::Uppercase,
            PasswordRule::Lowercase,
            PasswordRule::Digit,
            PasswordRule::SpecialCharacter,
        ])
    }
}

/// Validate a password against the default policy.
pub fn validate_password(password: &str) -> Vec<Violation> {
    PasswordPolicy::default().validate(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.message.as_str()).collect()
    }

    #[test]
    fn test_strong_password_has_no_violations() {
        assert!(validate_password("Str0ng!Pass").is_empty());
        assert!(validate_password("Aa1!aaaa").is_empty());
    }

    #[test]
    fn test_weakpass_violations() {
        let violations = validate_password("weakpass");

        assert_eq!(
            messages(&violations),
            vec![
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
                "Password must contain at least one special character (!@#$%^&*(),.?\":{}|<>)",
            ]
        );
        assert!(violations.iter().all(|v| v.field == "password"));
    }

    #[test]
    fn test_short_passwords_always_report_length() {
        for password in ["", "a", "A1!a", "Aa1!aaa", "ÄÖÜ1!"] {
            let violations = validate_password(password);
            assert!(
                messages(&violations).contains(&"Password must be at least 8 characters long"),
                "missing length violation for {:?}",
                password
            );
        }
    }

    #[test]
    fn test_empty_password_breaks_every_rule() {
        assert_eq!(validate_password("").len(), 5);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let violations = validate_password("Ää1!äää");
        assert!(messages(&violations).contains(&"Password must be at least 8 characters long"));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let violations = validate_password("ÄÖÜäöü1!");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_every_special_character_is_accepted() {
        for c in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdef1{}", c);
            assert!(validate_password(&password).is_empty(), "rejected {:?}", c);
        }
    }

    #[test]
    fn test_other_symbols_are_not_special() {
        let violations = validate_password("Abcdef1_-+=");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_validation_is_deterministic() {
        assert_eq!(validate_password("weakpass"), validate_password("weakpass"));
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy::new(vec![PasswordRule::MinLength(4)])
            .with_rule(PasswordRule::Digit);

        assert!(policy.validate("abc1").is_empty());
        assert_eq!(policy.validate("abc").len(), 2);
        assert_eq!(policy.rules().len(), 2);
    }
}
