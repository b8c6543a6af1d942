//! Declarative generators for options models and wire enumerations.
//!
//! Every Watson options type has the same shape: a frozen value with one
//! accessor per field, a `Default` builder with chaining setters, list
//! appenders for collection fields, and a `build()` that rejects missing
//! required fields in declaration order. `options_model!` produces all of it
//! from a field schema:
//!
//! ```text
//! options_model! {
//!     /// Adds a custom word to a custom language model.
//!     pub struct AddWordOptions => AddWordOptionsBuilder;
//!     Put "/v1/customizations/{customization_id}/words/{word_name}"
//!     {
//!         customization_id: String [required, path "customization_id"],
//!         word_name: String [required, path "word_name"],
//!         sounds_like: Vec<String> [list(add_sounds_like: String), body "sounds_like"],
//!     }
//! }
//! ```
//!
//! Kinds: `required`, `optional`, `list(appender: Element)`, and `managed`:
//! optional storage whose setter is written by hand next to the model, for
//! fields that must change together (a body and its `Content-Type`).
//! Locations: `body` (member of the JSON object body), `payload` (the whole
//! JSON body), `raw` (the whole text body), `path`, `query`, `header`.
//! The literal after the location is the wire name and is used verbatim.
//!
//! Value models that are only ever embedded in other models omit the
//! endpoint line and use `body` locations throughout.

#[doc(hidden)]
#[macro_export]
macro_rules! __options_storage {
    (required $ty:ty) => { $ty };
    ($kind:ident $ty:ty) => { ::std::option::Option<$ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_accessor {
    ($(#[$meta:meta])* required $field:ident : $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> <$ty as $crate::model::FieldValue>::View<'_> {
            <$ty as $crate::model::FieldValue>::view(&self.$field)
        }
    };
    ($(#[$meta:meta])* $kind:ident $field:ident : $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> ::std::option::Option<<$ty as $crate::model::FieldValue>::View<'_>> {
            self.$field
                .as_ref()
                .map(|value| <$ty as $crate::model::FieldValue>::view(value))
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_setter {
    (managed $field:ident : $ty:ty) => {};
    ($kind:ident $field:ident : $ty:ty) => {
        #[doc = concat!("Sets `", stringify!($field), "`.")]
        pub fn $field(mut self, value: impl Into<$ty>) -> Self {
            self.$field = ::std::option::Option::Some(value.into());
            self
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_appender {
    ($field:ident) => {};
    ($field:ident, $adder:ident : $elem:ty) => {
        #[doc = concat!("Appends one element to `", stringify!($field), "`.")]
        pub fn $adder(mut self, value: impl Into<$elem>) -> Self {
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .push(value.into());
            self
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_take {
    (required, $builder:ident . $field:ident, $model:ident) => {
        $crate::model::require(&$builder.$field, stringify!($model), stringify!($field))?
    };
    ($kind:ident, $builder:ident . $field:ident, $model:ident) => {
        $crate::model::permit(&$builder.$field)?
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_validate {
    (required, $value:expr, $model:ident, $field:ident) => {
        $crate::model::check_required(&$value, stringify!($model), stringify!($field))?;
    };
    ($kind:ident, $value:expr, $model:ident, $field:ident) => {
        if let ::std::option::Option::Some(value) = &$value {
            $crate::model::FieldValue::validate(value)?;
        }
    };
}

/// `with_required(..)`: a builder constructor taking the required fields in order.
#[doc(hidden)]
#[macro_export]
macro_rules! __options_required_ctor {
    (@acc [$($acc:tt)*] required $field:ident : $ty:ty ; $($rest:tt)*) => {
        $crate::__options_required_ctor!(@acc [$($acc)* $field : $ty ,] $($rest)*);
    };
    (@acc [$($acc:tt)*] $kind:ident $field:ident : $ty:ty ; $($rest:tt)*) => {
        $crate::__options_required_ctor!(@acc [$($acc)*] $($rest)*);
    };
    (@acc []) => {};
    (@acc [$($field:ident : $ty:ty ,)+]) => {
        /// A builder seeded with every required field, in declaration order.
        pub fn with_required($($field: impl Into<$ty>),+) -> Self {
            Self {
                $( $field: ::std::option::Option::Some($field.into()), )+
                ..Self::default()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_seed {
    (required, $value:expr) => {
        ::std::option::Option::Some($value.clone())
    };
    ($kind:ident, $value:expr) => {
        $value.clone()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_serialize {
    ($map:ident, required, body, $value:expr, $wire:literal) => {
        $map.serialize_entry($wire, &$value)?;
    };
    ($map:ident, $kind:ident, body, $value:expr, $wire:literal) => {
        if let ::std::option::Option::Some(value) = &$value {
            $map.serialize_entry($wire, value)?;
        }
    };
    ($map:ident, $kind:ident, $loc:ident, $value:expr, $wire:literal) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_deserialize {
    ($members:ident, body, $builder:ident . $field:ident, $wire:literal) => {
        if let ::std::option::Option::Some(value) = $members.remove($wire).filter(|v| !v.is_null()) {
            $builder.$field = ::std::option::Option::Some(
                ::serde_json::from_value(value).map_err(::serde::de::Error::custom)?,
            );
        }
    };
    ($members:ident, $loc:ident, $builder:ident . $field:ident, $wire:literal) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_collect {
    ($request:ident, $kind:ident, body, $value:expr, $wire:literal) => {
        $request.expect_json_members();
    };
    ($request:ident, required, $loc:ident, $value:expr, $wire:literal) => {
        $crate::__options_place!($request, $loc, &$value, $wire);
    };
    ($request:ident, $kind:ident, $loc:ident, $value:expr, $wire:literal) => {
        if let ::std::option::Option::Some(value) = &$value {
            $crate::__options_place!($request, $loc, value, $wire);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __options_place {
    ($request:ident, path, $value:expr, $wire:literal) => {
        $request.path_param($wire, $value);
    };
    ($request:ident, query, $value:expr, $wire:literal) => {
        $request.query_param($wire, $value);
    };
    ($request:ident, header, $value:expr, $wire:literal) => {
        $request.header($wire, $value);
    };
    ($request:ident, payload, $value:expr, $wire:literal) => {
        $request.json_payload($value)?;
    };
    ($request:ident, raw, $value:expr, $wire:literal) => {
        $request.text_payload($value);
    };
}

/// Generate an options model, its builder and (optionally) its `Operation` impl.
#[macro_export]
macro_rules! options_model {
    (
        @model
        $(#[$meta:meta])*
        $name:ident => $builder:ident
        {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty [ $kind:ident $( ( $adder:ident : $elem:ty ) )? , $loc:ident $wire:literal ]
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( $field: $crate::__options_storage!($kind $ty), )*
        }

        impl $name {
            #[doc = concat!("An empty [`", stringify!($builder), "`].")]
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// A builder seeded with every field of this value.
            pub fn new_builder(&self) -> $builder {
                $builder::from(self)
            }

            $( $crate::__options_accessor!($(#[$fmeta])* $kind $field : $ty); )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $builder {
            $( $field: ::std::option::Option<$ty>, )*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $( $crate::__options_setter!($kind $field : $ty); )*

            $crate::__options_required_ctor!(@acc [] $( $kind $field : $ty ; )*);

            $( $crate::__options_appender!($field $(, $adder : $elem)?); )*

            /// Validate required fields (in declaration order) and freeze the result.
            ///
            /// The builder is left untouched and can be reused.
            pub fn build(&self) -> $crate::Result<$name> {
                #[allow(unused_variables)]
                let builder = self;
                Ok($name {
                    $( $field: $crate::__options_take!($kind, builder.$field, $name), )*
                })
            }
        }

        // Only body members have a wire form; path, query and header fields stay unset.
        impl<'de> ::serde::Deserialize<'de> for $builder {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[allow(unused_mut, unused_variables)]
                let mut members = <::serde_json::Map<::std::string::String, ::serde_json::Value>
                    as ::serde::Deserialize>::deserialize(deserializer)?;
                #[allow(unused_mut)]
                let mut builder = Self::default();
                $( $crate::__options_deserialize!(members, $loc, builder.$field, $wire); )*
                Ok(builder)
            }
        }

        impl ::std::convert::From<&$name> for $builder {
            #[allow(unused_variables)]
            fn from(model: &$name) -> Self {
                Self {
                    $( $field: $crate::__options_seed!($kind, model.$field), )*
                }
            }
        }

        impl ::std::convert::TryFrom<$builder> for $name {
            type Error = $crate::Error;

            fn try_from(builder: $builder) -> $crate::Result<Self> {
                builder.build()
            }
        }

        impl $crate::model::FieldValue for $name {
            type View<'a> = &'a $name where Self: 'a;

            fn view(&self) -> Self::View<'_> {
                self
            }

            fn validate(&self) -> $crate::Result<()> {
                #[allow(unused_variables)]
                let model = self;
                $( $crate::__options_validate!($kind, model.$field, $name, $field); )*
                Ok(())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;
                #[allow(unused_variables)]
                let model = self;
                #[allow(unused_mut)]
                let mut map = serializer.serialize_map(None)?;
                $( $crate::__options_serialize!(map, $kind, $loc, model.$field, $wire); )*
                map.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let builder = <$builder as ::serde::Deserialize>::deserialize(deserializer)?;
                builder.build().map_err(::serde::de::Error::custom)
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident;
        $method:ident $path:literal
        {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty [ $kind:ident $( ( $adder:ident : $elem:ty ) )? , $loc:ident $wire:literal ]
            ),* $(,)?
        }
    ) => {
        $crate::options_model! {
            @model
            $(#[$meta])*
            $name => $builder
            {
                $(
                    $(#[$fmeta])*
                    $field : $ty [ $kind $( ( $adder : $elem ) )? , $loc $wire ]
                ),*
            }
        }

        impl $crate::model::Operation for $name {
            const NAME: &'static str = stringify!($name);
            const METHOD: $crate::model::HttpMethod = $crate::model::HttpMethod::$method;
            const PATH: &'static str = $path;

            fn to_request(&self) -> $crate::Result<$crate::model::RequestParts> {
                let model = self;
                #[allow(unused_mut)]
                let mut request = $crate::model::RequestTemplate::new(Self::METHOD, Self::PATH);
                $( $crate::__options_collect!(request, $kind, $loc, model.$field, $wire); )*
                request.finish(model)
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident
        {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty [ $kind:ident $( ( $adder:ident : $elem:ty ) )? , $loc:ident $wire:literal ]
            ),* $(,)?
        }
    ) => {
        $crate::options_model! {
            @model
            $(#[$meta])*
            $name => $builder
            {
                $(
                    $(#[$fmeta])*
                    $field : $ty [ $kind $( ( $adder : $elem ) )? , $loc $wire ]
                ),*
            }
        }
    };
}

/// Generate a closed enumeration whose serialized form is the API's wire string.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err($crate::Error::invalid_argument(
                        $crate::ArgumentError::UnknownValue {
                            kind: stringify!($name),
                            value: other.to_string(),
                        },
                        $crate::ErrorContext::new().with_source("wire_enum"),
                    )),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let wire = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                wire.parse().map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::model::FieldValue for $name {
            type View<'a> = $name where Self: 'a;

            fn view(&self) -> Self::View<'_> {
                *self
            }
        }

        impl $crate::model::ParamValue for $name {
            fn to_param(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}
