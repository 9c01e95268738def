//! Macros for ergonomic identifier declarations.

/// Declare a fieldless enum usable as a state or input identifier.
///
/// Derives `Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize`
/// and generates `name()`, an `ALL` slice of variants, and `Display`.
///
/// # Example
///
/// ```
/// use fsm_table::fsm_enum;
///
/// fsm_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// assert_eq!(Turnstile::Locked.name(), "Locked");
/// assert_eq!(Turnstile::Unlocked.to_string(), "Unlocked");
/// assert_eq!(Turnstile::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! fsm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
