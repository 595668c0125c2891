//! The tri-state wrapper for optional record fields.

/// An optional record field.
///
/// `Unset` means the field was never assigned and is left out of the
/// serialized document entirely. `Set` carries a value that is always written.
/// Fields the schema also allows to be `null` use `Field<Option<T>>`, which
/// keeps all three observable states apart:
///
/// | state            | value                     | document        |
/// |------------------|---------------------------|-----------------|
/// | unset            | `Field::Unset`            | key omitted     |
/// | explicit null    | `Field::Set(None)`        | `"key": null`   |
/// | value            | `Field::Set(Some(v))`     | `"key": v`      |
///
/// ## Examples
///
/// ```
/// use model_record::Field;
///
/// let mut temperature: Field<f64> = Field::Unset;
/// assert!(temperature.is_unset());
///
/// temperature.set(0.7);
/// assert_eq!(temperature.as_option(), Some(&0.7));
///
/// let nullable: Field<Option<String>> = Field::Set(None);
/// assert!(nullable.is_set());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Never assigned; omitted from output.
    Unset,
    /// Assigned; always written to output.
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Assigns a value, returning the previous state.
    pub fn set(&mut self, value: T) -> Field<T> {
        std::mem::replace(self, Self::Set(value))
    }

    /// Moves the value out, leaving the field unset.
    pub fn take(&mut self) -> Field<T> {
        std::mem::take(self)
    }

    /// Clears the field back to unset.
    pub fn unset(&mut self) {
        *self = Self::Unset;
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Set(value) => Field::Set(value),
            Self::Unset => Field::Unset,
        }
    }

    pub fn as_mut(&mut self) -> Field<&mut T> {
        match self {
            Self::Set(value) => Field::Set(value),
            Self::Unset => Field::Unset,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// `None` becomes `Unset`; use `Field::Set(None)` for an explicit null.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Unset,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Set(value) => Field::Set(f(value)),
            Self::Unset => Field::Unset,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Set(value) => value,
            Self::Unset => default,
        }
    }

    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Set(value) => value,
            Self::Unset => default(),
        }
    }
}

impl<T> Field<Option<T>> {
    /// `true` only for an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Set(None))
    }

    /// The value when set and non-null.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Set(Some(value)) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}
