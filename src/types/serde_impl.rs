//! JSON-shaped serde support for [`Error`], [`Maybe`] and [`Outcome`].
//!
//! Wire shapes:
//!
//! - `Outcome<T>`: `{"isSuccess": bool, "value"?: T, "error"?: Error}`
//! - `Maybe<T>`: `{"isSome": bool, "value"?: T}`
//! - `Error`: `{"$type": "<VariantName>", "Code": "..", "Message": ".."}`, plus
//!   `"Errors": [..]` for aggregates. A custom error whose kind shadows a
//!   built-in variant name also carries `"Custom": true`.
//!
//! A missing `value` is read back as the unit value, so `Outcome<()>` and
//! `Maybe<()>` round-trip while other value types report the field missing.
use super::alloc_type::{String, Vec};
use super::{AggregateError, Error, Maybe, Outcome};
use serde::de::value::UnitDeserializer;
use serde::de::{self, Error as _, IntoDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let aggregate = self.as_aggregate();
        let shadowed = matches!(self, Error::Custom { kind, .. } if Error::is_builtin_name(kind));
        let len = 3 + usize::from(aggregate.is_some()) + usize::from(shadowed);
        let mut state = serializer.serialize_struct("Error", len)?;
        state.serialize_field("$type", self.variant_name())?;
        state.serialize_field("Code", self.code())?;
        state.serialize_field("Message", self.message())?;
        if let Some(aggregate) = aggregate {
            state.serialize_field("Errors", aggregate.errors())?;
        }
        if shadowed {
            state.serialize_field("Custom", &true)?;
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct ErrorRepr {
    #[serde(rename = "$type")]
    kind: String,
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "Errors", default)]
    errors: Option<Vec<Error>>,
    #[serde(rename = "Custom", default)]
    custom: bool,
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ErrorRepr {
            kind,
            code,
            message,
            errors,
            custom,
        } = ErrorRepr::deserialize(deserializer)?;
        if custom {
            return Ok(Error::custom(kind, code, message));
        }
        let error = match kind.as_str() {
            "Error" => Error::new(code, message),
            "ValidationError" => Error::validation(code, message),
            "NotFoundError" => Error::not_found(code, message),
            "ConflictError" => Error::conflict(code, message),
            "AuthenticationError" => Error::authentication(code, message),
            "AuthorizationError" => Error::authorization(code, message),
            "AggregateError" => {
                let children = errors.ok_or_else(|| D::Error::missing_field("Errors"))?;
                Error::Aggregate(AggregateError::new(children).map_err(D::Error::custom)?)
            }
            _ => Error::custom(kind, code, message),
        };
        Ok(error)
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        state.serialize_field("isSuccess", &self.is_success())?;
        match self {
            Outcome::Success(value) => state.serialize_field("value", value)?,
            Outcome::Failure(error) => state.serialize_field("error", error)?,
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct OutcomeRepr<T> {
    #[serde(rename = "isSuccess")]
    is_success: bool,
    value: Option<T>,
    error: Option<Error>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OutcomeRepr::<T>::deserialize(deserializer)?;
        if repr.is_success {
            let value = match repr.value {
                Some(value) => value,
                None => unit_value::<T, D::Error>()?,
            };
            Ok(Outcome::Success(value))
        } else {
            repr.error
                .map(Outcome::Failure)
                .ok_or_else(|| de::Error::missing_field("error"))
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("Maybe", len)?;
        state.serialize_field("isSome", &self.is_some())?;
        if let Maybe::Some(value) = self {
            state.serialize_field("value", value)?;
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct MaybeRepr<T> {
    #[serde(rename = "isSome")]
    is_some: bool,
    value: Option<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MaybeRepr::<T>::deserialize(deserializer)?;
        if !repr.is_some {
            return Ok(Maybe::None);
        }
        match repr.value {
            Some(value) => Ok(Maybe::Some(value)),
            None => unit_value::<T, D::Error>().map(Maybe::Some),
        }
    }
}

// `null` and an absent field both land here; only unit-like types accept it.
fn unit_value<'de, T, E>() -> Result<T, E>
where
    T: Deserialize<'de>,
    E: de::Error,
{
    let unit: UnitDeserializer<E> = ().into_deserializer();
    T::deserialize(unit).map_err(|_: E| E::missing_field("value"))
}
