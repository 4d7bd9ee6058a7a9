//! Password strength scoring
//!
//! A password is scored against five independent rules. The score is the
//! number of rules that pass, and a password is acceptable once three of
//! the five pass. The same assessment drives both the strength meter and
//! the form's password error.

use serde::{Deserialize, Serialize};

/// Minimum length for the length rule, counted in UTF-16 code units
///
/// Characters outside the Basic Multilingual Plane (emoji, for one) count
/// twice, the same as a browser's `String.length`.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Number of passing rules required for a valid password
pub const MIN_VALID_SCORE: u8 = 3;

/// Characters that satisfy the special-character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// The five strength rules, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordRule {
    /// 8+ characters
    Length,
    /// At least one ASCII lowercase letter
    Lowercase,
    /// At least one ASCII uppercase letter
    Uppercase,
    /// At least one ASCII digit
    Number,
    /// At least one of [`SPECIAL_CHARACTERS`]
    Special,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::Length,
        PasswordRule::Lowercase,
        PasswordRule::Uppercase,
        PasswordRule::Number,
        PasswordRule::Special,
    ];

    /// Key used in the serialized `checks` map
    pub fn key(self) -> &'static str {
        match self {
            PasswordRule::Length => "length",
            PasswordRule::Lowercase => "lowercase",
            PasswordRule::Uppercase => "uppercase",
            PasswordRule::Number => "number",
            PasswordRule::Special => "special",
        }
    }

    /// Caption shown next to the rule's indicator
    pub fn label(self) -> &'static str {
        match self {
            PasswordRule::Length => "8+ characters",
            PasswordRule::Lowercase => "Lowercase",
            PasswordRule::Uppercase => "Uppercase",
            PasswordRule::Number => "Number",
            PasswordRule::Special => "Special char",
        }
    }

    fn check(self, password: &str) -> bool {
        match self {
            PasswordRule::Length => password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Number => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Special => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }
}

/// Outcome of each rule for one password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChecks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordChecks {
    /// Run every rule against the password
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: PasswordRule::Length.check(password),
            lowercase: PasswordRule::Lowercase.check(password),
            uppercase: PasswordRule::Uppercase.check(password),
            number: PasswordRule::Number.check(password),
            special: PasswordRule::Special.check(password),
        }
    }

    pub fn get(&self, rule: PasswordRule) -> bool {
        match rule {
            PasswordRule::Length => self.length,
            PasswordRule::Lowercase => self.lowercase,
            PasswordRule::Uppercase => self.uppercase,
            PasswordRule::Number => self.number,
            PasswordRule::Special => self.special,
        }
    }

    /// Rules paired with their outcome, in display order
    pub fn iter(&self) -> impl Iterator<Item = (PasswordRule, bool)> + '_ {
        PasswordRule::ALL.into_iter().map(move |rule| (rule, self.get(rule)))
    }

    /// Number of passing rules
    pub fn passed(&self) -> u8 {
        self.iter().filter(|(_, ok)| *ok).count() as u8
    }
}

/// Strength category derived from the score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    #[default]
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// 0-1 weak, 2-3 medium, 4 strong, 5 very strong
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Strength::Weak,
            2 | 3 => Strength::Medium,
            4 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very-strong",
        }
    }

    /// Human-readable label for the meter
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very strong",
        }
    }
}

/// Structured strength result for a password value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAssessment {
    pub checks: PasswordChecks,
    pub score: u8,
    pub strength: Strength,
    pub is_valid: bool,
}

impl PasswordAssessment {
    /// Assessment for a password that has not been typed yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Width of the strength meter as a percentage (score out of five)
    pub fn fill_percent(&self) -> u8 {
        self.score * 20
    }
}

/// Scores a password against the five strength rules
///
/// The empty password short-circuits to [`PasswordAssessment::empty`].
///
/// # Examples
/// ```
/// use signup_validation::password::{score_password, Strength};
/// let assessment = score_password("Abcdef1!");
/// assert_eq!(assessment.score, 5);
/// assert_eq!(assessment.strength, Strength::VeryStrong);
/// assert!(assessment.is_valid);
/// ```
pub fn score_password(password: &str) -> PasswordAssessment {
    if password.is_empty() {
        return PasswordAssessment::empty();
    }

    let checks = PasswordChecks::evaluate(password);
    let score = checks.passed();

    PasswordAssessment {
        checks,
        score,
        strength: Strength::from_score(score),
        is_valid: score >= MIN_VALID_SCORE,
    }
}
