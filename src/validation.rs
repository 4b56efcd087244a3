//! Form Validation
//!
//! Pure predicates used by the signup, login, profile and recipe forms.

use std::sync::LazyLock;

use regex::Regex;

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

pub fn valid_name(value: &str) -> bool {
    value.trim().chars().count() >= 2
}

pub fn valid_username(value: &str) -> bool {
    value.trim().chars().count() >= 3 && USERNAME_RE.is_match(value)
}

pub fn valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn valid_password(value: &str) -> bool {
    value.chars().count() >= 8
}

pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && password == confirmation
}

// ========================
// Password Strength
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Good => "good",
            StrengthLevel::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    /// None for an empty password
    pub level: Option<StrengthLevel>,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self.level {
            None => "Password strength",
            Some(StrengthLevel::Weak) => "Weak password",
            Some(StrengthLevel::Fair) => "Fair password",
            Some(StrengthLevel::Good) => "Good password",
            Some(StrengthLevel::Strong) => "Strong password",
        }
    }
}

/// Length, lowercase, uppercase, digit, special, in that order
pub fn password_requirements(password: &str) -> [bool; 5] {
    [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let score = password_requirements(password).iter().filter(|ok| **ok).count() as u8;
    let level = if password.is_empty() {
        None
    } else {
        Some(match score {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Fair,
            4 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        })
    };
    PasswordStrength { score, level }
}

// ========================
// Recipe Form
// ========================

pub struct RecipeDraft<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub ingredients: &'a str,
    pub instructions: &'a str,
}

/// First problem with the draft, phrased for an alert
pub fn check_recipe(draft: &RecipeDraft) -> Result<(), &'static str> {
    let title = draft.title.trim();
    let description = draft.description.trim();
    if title.is_empty()
        || description.is_empty()
        || draft.ingredients.trim().is_empty()
        || draft.instructions.trim().is_empty()
    {
        return Err("Please fill in all required fields.");
    }
    if title.chars().count() < 3 {
        return Err("Recipe title must be at least 3 characters long.");
    }
    if description.chars().count() < 10 {
        return Err("Recipe description must be at least 10 characters long.");
    }
    Ok(())
}

// ========================
// Profile Form
// ========================

pub struct ProfileDraft<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
}

/// Every problem with the profile, in field order
pub fn check_profile(draft: &ProfileDraft) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if draft.first_name.trim().is_empty() {
        errors.push("First name is required");
    }
    if draft.last_name.trim().is_empty() {
        errors.push("Last name is required");
    }
    if draft.username.trim().is_empty() {
        errors.push("Username is required");
    }
    if draft.email.trim().is_empty() {
        errors.push("Email is required");
    }
    if !draft.email.is_empty() && !valid_email(draft.email) {
        errors.push("Please enter a valid email address");
    }
    if !draft.username.is_empty() && !USERNAME_RE.is_match(draft.username) {
        errors.push("Username can only contain letters, numbers, and underscores");
    }
    errors
}

// ========================
// Counters & Uploads
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

impl CounterLevel {
    pub fn color(&self) -> &'static str {
        match self {
            CounterLevel::Normal => "#6b7280",
            CounterLevel::Warning => "#f59e0b",
            CounterLevel::Danger => "#dc2626",
        }
    }
}

pub fn counter_level(count: usize) -> CounterLevel {
    if count > 450 {
        CounterLevel::Danger
    } else if count > 400 {
        CounterLevel::Warning
    } else {
        CounterLevel::Normal
    }
}

/// Size/type gate for profile pictures
pub fn check_image(size_bytes: f64, mime: &str) -> Result<(), &'static str> {
    if size_bytes > MAX_IMAGE_BYTES {
        return Err("File size must be less than 5MB");
    }
    if !mime.starts_with("image/") {
        return Err("Please select a valid image file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_and_username_examples() {
        assert!(valid_email("a@b.co"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a b@c.de"));
        assert!(valid_username("ab_12"));
        assert!(!valid_username("ab!"));
        assert!(!valid_username("ab"));
    }

    #[test]
    fn test_names_and_passwords() {
        assert!(valid_name(" Al "));
        assert!(!valid_name(" A "));
        assert!(valid_password("12345678"));
        assert!(!valid_password("1234567"));
        assert!(passwords_match("secret", "secret"));
        assert!(!passwords_match("", ""));
        assert!(!passwords_match("secret", "Secret"));
    }

    #[test]
    fn test_strength_score_counts_predicates() {
        assert_eq!(password_strength("").score, 0);
        assert_eq!(password_strength("").label(), "Password strength");
        assert_eq!(password_strength("abc").score, 1);
        assert_eq!(password_strength("abcdefgh").score, 2);
        assert_eq!(password_strength("abcdefgh").level, Some(StrengthLevel::Weak));
        assert_eq!(password_strength("abcdefG1").level, Some(StrengthLevel::Good));
        assert_eq!(password_strength("abcdefgH").level, Some(StrengthLevel::Fair));
        let strong = password_strength("abcdeG1!");
        assert_eq!(strong.score, 5);
        assert_eq!(strong.label(), "Strong password");
        assert_eq!(strong.level.unwrap().css_class(), "strong");
    }

    #[test]
    fn test_requirements_in_display_order() {
        assert_eq!(password_requirements("Ab1"), [false, true, true, true, false]);
        assert_eq!(password_requirements("longpass!"), [true, true, false, false, true]);
        assert_eq!(password_requirements(""), [false; 5]);
    }

    #[test]
    fn test_symbol_only_password_is_weak() {
        let s = password_strength("!");
        assert_eq!(s.score, 1);
        assert_eq!(s.level, Some(StrengthLevel::Weak));
    }

    #[test]
    fn test_check_recipe_messages() {
        let mut draft = RecipeDraft {
            title: "Pie",
            description: "A lovely pie.",
            ingredients: "flour",
            instructions: "bake",
        };
        assert_eq!(check_recipe(&draft), Ok(()));
        draft.title = "Pi";
        assert_eq!(check_recipe(&draft), Err("Recipe title must be at least 3 characters long."));
        draft.title = "Pie";
        draft.description = "short";
        assert_eq!(check_recipe(&draft), Err("Recipe description must be at least 10 characters long."));
        draft.instructions = "  ";
        assert_eq!(check_recipe(&draft), Err("Please fill in all required fields."));
    }

    #[test]
    fn test_check_profile_collects_all_errors() {
        let draft = ProfileDraft {
            first_name: "Ada",
            last_name: " ",
            username: "ada lovelace",
            email: "ada@",
        };
        assert_eq!(
            check_profile(&draft),
            vec![
                "Last name is required",
                "Please enter a valid email address",
                "Username can only contain letters, numbers, and underscores",
            ]
        );
        let ok = ProfileDraft {
            first_name: "Ada",
            last_name: "Lovelace",
            username: "ada_l",
            email: "ada@example.org",
        };
        assert!(check_profile(&ok).is_empty());
    }

    #[test]
    fn test_counter_levels() {
        assert_eq!(counter_level(400), CounterLevel::Normal);
        assert_eq!(counter_level(401), CounterLevel::Warning);
        assert_eq!(counter_level(451), CounterLevel::Danger);
    }

    #[test]
    fn test_check_image() {
        assert_eq!(check_image(1024.0, "image/png"), Ok(()));
        assert_eq!(check_image(MAX_IMAGE_BYTES + 1.0, "image/png"), Err("File size must be less than 5MB"));
        assert_eq!(check_image(10.0, "text/plain"), Err("Please select a valid image file"));
    }
}
