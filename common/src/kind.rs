//! Macros for defining kind enums.

/// Macro for defining a closed-vocabulary kind enum.
///
/// Variants are parsed case-insensitively and displayed/serialized in
/// lowercase. The calling crate must depend on `serde` and `strum`, as their
/// derives refer to them.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube,
///
///         #[doc = "A sphere"]
///         Sphere,
///     }
/// }
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        #[serde(rename_all = "lowercase")]
        #[strum(serialize_all = "lowercase", ascii_case_insensitive)]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant,
            )*
        }

        impl $name {
            /// All the variants of this kind, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }
    };
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    define_kind! {
        #[doc = "Size of something."]
        enum Size {
            #[doc = "Small."]
            Small,

            #[doc = "Extra large."]
            ExtraLarge,
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Size::from_str("small").unwrap(), Size::Small);
        assert_eq!(Size::from_str("SMALL").unwrap(), Size::Small);
        assert_eq!(Size::from_str("extralarge").unwrap(), Size::ExtraLarge);
        assert!(Size::from_str("medium").is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Size::Small.to_string(), "small");
        assert_eq!(Size::ExtraLarge.to_string(), "extralarge");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Size::Small).unwrap(), r#""small""#);
        assert_eq!(
            serde_json::from_str::<Size>(r#""extralarge""#).unwrap(),
            Size::ExtraLarge,
        );
        assert!(serde_json::from_str::<Size>(r#""Small""#).is_err());
    }

    #[test]
    fn lists_all_variants() {
        assert_eq!(Size::ALL, &[Size::Small, Size::ExtraLarge]);
    }
}
