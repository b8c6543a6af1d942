//! Field traits shared by every generated options model.

use crate::{ArgumentError, Error, ErrorContext, Result};
use serde_json::Value;
use std::collections::HashMap;

/// A type that can be stored in an options field.
///
/// `View` is what the read-only accessor hands out: a borrow for owned data
/// (`&str`, `&[T]`, `&Model`) and the value itself for `Copy` scalars and enums.
pub trait FieldValue {
    type View<'a>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_>;

    /// Whether a present value still counts as "not provided" for a required field.
    fn is_blank(&self) -> bool {
        false
    }

    /// Re-run the checks a nested model's `build()` applies.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl FieldValue for String {
    type View<'a> = &'a str where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self.as_str()
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    type View<'a> = &'a [T] where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self.as_slice()
    }

    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(FieldValue::validate)
    }
}

impl FieldValue for HashMap<String, Value> {
    type View<'a> = &'a HashMap<String, Value> where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self
    }
}

impl FieldValue for Value {
    type View<'a> = &'a Value where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self
    }
}

macro_rules! copy_field_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                type View<'a> = $ty where Self: 'a;

                fn view(&self) -> Self::View<'_> {
                    *self
                }
            }
        )*
    };
}

copy_field_value!(bool, i64, u32, f64);

/// A value that can travel as a path segment, query parameter or header.
pub trait ParamValue {
    fn to_param(&self) -> String;
}

impl ParamValue for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ParamValue for bool {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for i64 {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for u32 {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

/// Lists travel as a single comma-separated value.
impl<T: ParamValue> ParamValue for Vec<T> {
    fn to_param(&self) -> String {
        self.iter()
            .map(ParamValue::to_param)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Take a required field out of a builder, or explain why it cannot be taken.
#[doc(hidden)]
pub fn require<T: FieldValue + Clone>(
    value: &Option<T>,
    model: &'static str,
    field: &'static str,
) -> Result<T> {
    match value {
        None => Err(reject(model, ArgumentError::MissingField { field })),
        Some(v) => {
            check_required(v, model, field)?;
            Ok(v.clone())
        }
    }
}

/// A present required value must be non-blank and internally valid.
#[doc(hidden)]
pub fn check_required<T: FieldValue>(
    value: &T,
    model: &'static str,
    field: &'static str,
) -> Result<()> {
    if value.is_blank() {
        return Err(reject(model, ArgumentError::EmptyField { field }));
    }
    value.validate()
}

/// Take an optional field out of a builder; a nested model must still be valid.
#[doc(hidden)]
pub fn permit<T: FieldValue + Clone>(value: &Option<T>) -> Result<Option<T>> {
    if let Some(v) = value {
        v.validate()?;
    }
    Ok(value.clone())
}

fn reject(model: &'static str, reason: ArgumentError) -> Error {
    tracing::trace!(model, reason = %reason, "options build rejected");
    let field = reason.field().unwrap_or_default().to_string();
    Error::invalid_argument(
        reason,
        ErrorContext::new()
            .with_field_path(format!("{}.{}", model, field))
            .with_source("options_builder"),
    )
}
