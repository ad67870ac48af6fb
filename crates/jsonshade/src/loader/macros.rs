//! Declarative projections for domain structs and enums.

/// Declares a struct together with its [`Load`](crate::Load) projection.
///
/// Fields resolve by *decoded* name against the input object's class; a
/// field may carry `= expr` to supply a value when the input omits it, and
/// `Option` fields read as `None` when absent. Fields present in the input
/// but not declared here are ignored. When the input is an array or multi
/// instead of an object, fields fill positionally; running out of elements
/// before a field with no fallback is
/// [`TupleSizeMismatch`](crate::LoadError::TupleSizeMismatch).
///
/// # Examples
///
/// ```
/// jsonshade::load_struct! {
///     #[derive(Debug, PartialEq)]
///     pub struct Point {
///         x: i32,
///         y: i32,
///         z: i32 = 0,
///     }
/// }
///
/// let mut parser = jsonshade::Parser::new();
/// let doc = parser.parse(r#"{"x":100,"y":200}"#).unwrap();
/// assert_eq!(doc.load::<Point>().unwrap(), Point { x: 100, y: 200, z: 0 });
/// ```
#[macro_export]
macro_rules! load_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty, )*
        }

        impl<'a> $crate::Load<'a> for $name {
            fn load(
                doc: &$crate::Document<'a>,
                node: &$crate::Node<'a>,
            ) -> ::core::result::Result<Self, $crate::LoadError> {
                match node {
                    $crate::Node::Object(..) => {
                        let class = doc
                            .object_class(node)
                            .ok_or($crate::LoadError::TypeMismatch)?;
                        let values = doc
                            .object_values(node)
                            .ok_or($crate::LoadError::TypeMismatch)?;
                        ::core::result::Result::Ok(Self {
                            $(
                                $field: match class.index_of(stringify!($field)) {
                                    ::core::option::Option::Some(i) => {
                                        $crate::Load::load(doc, &values[i as usize])?
                                    }
                                    ::core::option::Option::None => {
                                        $crate::load_struct!(@missing $field $(, $default)?)
                                    }
                                },
                            )*
                        })
                    }
                    $crate::Node::Array(span) | $crate::Node::Multi(span) => {
                        let values = doc.nodes(*span);
                        let mut next = 0usize;
                        ::core::result::Result::Ok(Self {
                            $(
                                $field: {
                                    let slot = values.get(next);
                                    next += 1;
                                    match slot {
                                        ::core::option::Option::Some(v) => {
                                            $crate::Load::load(doc, v)?
                                        }
                                        ::core::option::Option::None => {
                                            $crate::load_struct!(@overran $field $(, $default)?)
                                        }
                                    }
                                },
                            )*
                        })
                    }
                    _ => ::core::result::Result::Err($crate::LoadError::TypeMismatch),
                }
            }
        }
    };

    (@missing $field:ident) => {
        $crate::Load::absent(stringify!($field))?
    };
    (@missing $field:ident, $default:expr) => {
        $default
    };
    (@overran $field:ident) => {
        match $crate::Load::absent(stringify!($field)) {
            ::core::result::Result::Ok(v) => v,
            ::core::result::Result::Err(_) => {
                return ::core::result::Result::Err($crate::LoadError::TupleSizeMismatch)
            }
        }
    };
    (@overran $field:ident, $default:expr) => {
        $default
    };
}

/// Declares a unit-variant enum together with its [`Load`](crate::Load)
/// projection.
///
/// The input must be a string; its decoded text is matched against each
/// variant's name, spelled either as the variant identifier or as an
/// explicit `= "text"` override (useful for names that are not Rust
/// identifiers). A string naming no variant is
/// [`UnknownEnumValue`](crate::LoadError::UnknownEnumValue).
///
/// # Examples
///
/// ```
/// jsonshade::load_enum! {
///     #[derive(Debug, PartialEq)]
///     pub enum Separator {
///         Comma = ",",
///         Newline = "\n",
///         Space,
///     }
/// }
///
/// let mut parser = jsonshade::Parser::new();
/// let doc = parser.parse(r#""\n""#).unwrap();
/// assert_eq!(doc.load::<Separator>().unwrap(), Separator::Newline);
/// ```
#[macro_export]
macro_rules! load_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $text:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl<'a> $crate::Load<'a> for $name {
            fn load(
                _doc: &$crate::Document<'a>,
                node: &$crate::Node<'a>,
            ) -> ::core::result::Result<Self, $crate::LoadError> {
                let text = match $crate::Node::text(node) {
                    ::core::option::Option::Some(text) => text?,
                    ::core::option::Option::None => {
                        return ::core::result::Result::Err($crate::LoadError::TypeMismatch)
                    }
                };
                $(
                    if &*text == $crate::load_enum!(@name $variant $(, $text)?) {
                        return ::core::result::Result::Ok(Self::$variant);
                    }
                )*
                ::core::result::Result::Err($crate::LoadError::unknown_enum(&text))
            }
        }
    };

    (@name $variant:ident) => {
        stringify!($variant)
    };
    (@name $variant:ident, $text:literal) => {
        $text
    };
}
