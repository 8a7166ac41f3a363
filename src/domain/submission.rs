use thiserror::Error;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// The three fields a visitor fills in on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Checks a single field value against its rule. Input is trimmed first.
    ///
    /// # Errors
    /// Returns the violation for this field if the rule fails.
    pub fn validate(self, value: &str) -> Result<(), Violation> {
        let value = value.trim();
        match self {
            Self::Name if value.chars().count() < NAME_MIN_CHARS => Err(Violation::NameTooShort),
            Self::Email if !is_valid_email(value) => Err(Violation::EmailMalformed),
            Self::Message if value.chars().count() < MESSAGE_MIN_CHARS => Err(Violation::MessageTooShort),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Please enter a valid name (at least 2 characters).")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    EmailMalformed,
    #[error("Please enter a message (at least 10 characters).")]
    MessageTooShort,
}

impl Violation {
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameTooShort => Field::Name,
            Self::EmailMalformed => Field::Email,
            Self::MessageTooShort => Field::Message,
        }
    }
}

/// Every rule a submission attempt broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|v| v.field() == field)
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// A contact-form submission that has passed every field rule.
///
/// Values are stored trimmed; constructing one through [`Submission::parse`]
/// is the only way to obtain it, so holding a `Submission` means it is safe
/// to transmit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    message: String,
}

impl Submission {
    /// Validates all three fields at once, collecting every failing rule
    /// rather than stopping at the first.
    ///
    /// # Errors
    /// Returns [`Violations`] listing each rule the input broke.
    pub fn parse(name: &str, email: &str, message: &str) -> Result<Self, Violations> {
        let violations: Vec<Violation> = [
            Field::Name.validate(name),
            Field::Email.validate(email),
            Field::Message.validate(message),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if violations.is_empty() {
            Ok(Self {
                name: name.trim().to_owned(),
                email: email.trim().to_owned(),
                message: message.trim().to_owned(),
            })
        } else {
            Err(Violations(violations))
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Shape check only: local part, `@`, and a dot-containing domain, with no
/// whitespace or second `@` anywhere. Deliverability is the provider's
/// problem.
fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
