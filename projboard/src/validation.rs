//! Form input validation.
//!
//! Raw form strings are checked before anything reaches the store. The
//! store itself trusts its input, so every rule lives here.

use thiserror::Error;

/// Alert text shown when a submission is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";

/// A value to check: either free text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text input.
    Text(&'a str),
    /// Numeric input.
    Number(f64),
}

/// A value plus the constraints it must satisfy.
///
/// Length bounds only apply to text and numeric bounds only apply to
/// numbers; a bound of the wrong kind is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable<'a> {
    /// Value under test.
    pub value: Value<'a>,
    /// Value must be non-blank after trimming.
    pub required: bool,
    /// Minimum text length in characters.
    pub min_length: Option<usize>,
    /// Maximum text length in characters.
    pub max_length: Option<usize>,
    /// Minimum numeric value (inclusive).
    pub min: Option<f64>,
    /// Maximum numeric value (inclusive).
    pub max: Option<f64>,
}

impl<'a> Validatable<'a> {
    /// Unconstrained text value.
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self::of(Value::Text(value))
    }

    /// Unconstrained numeric value.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::of(Value::Number(value))
    }

    const fn of(value: Value<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Marks the value as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets a minimum text length.
    #[must_use]
    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Sets a maximum text length.
    #[must_use]
    pub const fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Sets an inclusive numeric range.
    #[must_use]
    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Checks a [`Validatable`] against all of its constraints.
#[must_use]
pub fn validate(input: &Validatable<'_>) -> bool {
    match input.value {
        Value::Text(text) => {
            let len = text.chars().count();
            (!input.required || !text.trim().is_empty())
                && input.min_length.is_none_or(|min| len >= min)
                && input.max_length.is_none_or(|max| len <= max)
        }
        Value::Number(n) => {
            // A number is "blank" only when it is not a number at all.
            (!input.required || !n.is_nan())
                && input.min.is_none_or(|min| n >= min)
                && input.max.is_none_or(|max| n <= max)
        }
    }
}

/// Limits applied to the project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRules {
    /// Optional upper bound on the title length in characters.
    pub title_max_len: Option<usize>,
    /// Minimum description length in characters.
    pub description_min_len: usize,
    /// Fewest people a project may have.
    pub people_min: u32,
    /// Most people a project may have.
    pub people_max: u32,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            title_max_len: None,
            description_min_len: 5,
            people_min: 1,
            people_max: 5,
        }
    }
}

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
}

/// Which form field was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Title is blank or too long.
    #[error("invalid title")]
    Title,
    /// Description is blank or too short.
    #[error("invalid description (at least {min} characters)")]
    Description {
        /// Required minimum length.
        min: usize,
    },
    /// People count is missing, not a number, or out of range.
    #[error("invalid number of people (between {min} and {max})")]
    People {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
}

/// Validates the three raw form fields and converts them to a [`ProjectInput`].
///
/// # Errors
///
/// Returns the first [`InputError`] in field order (title, description,
/// people).
pub fn gather_input(
    title: &str,
    description: &str,
    people: &str,
    rules: &InputRules,
) -> Result<ProjectInput, InputError> {
    let mut title_check = Validatable::text(title).required();
    if let Some(max) = rules.title_max_len {
        title_check = title_check.max_length(max);
    }
    if !validate(&title_check) {
        return Err(InputError::Title);
    }

    let description_check = Validatable::text(description)
        .required()
        .min_length(rules.description_min_len);
    if !validate(&description_check) {
        return Err(InputError::Description {
            min: rules.description_min_len,
        });
    }

    let people_err = || InputError::People {
        min: rules.people_min,
        max: rules.people_max,
    };
    let parsed = people.trim().parse::<f64>().unwrap_or(f64::NAN);
    let people_check = Validatable::number(parsed)
        .required()
        .range(f64::from(rules.people_min), f64::from(rules.people_max));
    if !validate(&people_check) {
        return Err(people_err());
    }
    // Whole numbers only; "2.5" passes the range check above.
    let people = people.trim().parse::<u32>().map_err(|_| people_err())?;

    Ok(ProjectInput {
        title: title.to_string(),
        description: description.to_string(),
        people,
    })
}
