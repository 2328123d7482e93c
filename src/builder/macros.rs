//! Macros for declaring status label enums.

/// Generate a status enum together with its `Status` implementation.
///
/// The first variant listed under `idle` becomes the `Default` value, so
/// every status enum starts at rest. `busy` and `error` are optional.
///
/// # Example
///
/// ```
/// use fetchstate::status_enum;
/// use fetchstate::core::Status;
///
/// status_enum! {
///     pub enum UploadStatus {
///         Idle,
///         Uploading,
///         Done,
///         Failed,
///     }
///     idle: [Idle]
///     busy: [Uploading]
///     error: [Failed]
/// }
///
/// assert_eq!(UploadStatus::default(), UploadStatus::Idle);
/// assert!(UploadStatus::Uploading.is_busy());
/// assert_eq!(UploadStatus::Failed.to_string(), "Failed");
/// assert_eq!(UploadStatus::ALL.len(), 4);
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        idle: [$rest:ident $(, $idle:ident)* $(,)?]
        $(busy: [$($busy:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$rest
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::Status::name(self))
            }
        }

        impl $crate::core::Status for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_idle(&self) -> bool {
                matches!(self, Self::$rest $(| Self::$idle)*)
            }

            fn is_busy(&self) -> bool {
                match self {
                    $($(Self::$busy => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
