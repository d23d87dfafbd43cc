//! # Record Registration Macro
//!
//! This module provides `impl_record!`, which implements [`Record`] for an
//! existing struct so it does not need a hand-written descriptor and field
//! accessor.
//!
//! ## impl_record!
//!
//! Lists the struct's mapped fields in declaration order. A field may carry a
//! column-name override after `=>`.
//!
//! ### Usage
//!
//! ```ignore
//! #[derive(Debug, Default, serde::Serialize)]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     pub email: Option<String>,
//! }
//!
//! turmap::impl_record!(User { id, name, email => "e_mail" });
//!
//! // Generates:
//! // const DESCRIPTOR = RecordDescriptor::new("User", &[
//! //     FieldDef::with_rename("id", None),
//! //     FieldDef::with_rename("name", None),
//! //     FieldDef::with_rename("email", Some("e_mail")),
//! // ]);
//! // fn field_mut(&mut self, 0) -> &mut self.id, 1 -> &mut self.name, ...
//! ```
//!
//! Every listed field's type must implement `FieldValue`. Fields that are not
//! listed keep their `Default` value and are never matched.
//!
//! [`Record`]: crate::schema::Record

/// Implements `Record` for a struct from a list of its fields.
#[macro_export]
macro_rules! impl_record {
    (@rename) => {
        ::core::option::Option::None
    };
    (@rename $rename:literal) => {
        ::core::option::Option::Some($rename)
    };
    ($ty:ident { $($field:ident $(=> $rename:literal)?),* $(,)? }) => {
        impl $crate::schema::Record for $ty {
            const DESCRIPTOR: $crate::schema::RecordDescriptor =
                $crate::schema::RecordDescriptor::new(
                    ::core::stringify!($ty),
                    &[
                        $(
                            $crate::schema::FieldDef::with_rename(
                                ::core::stringify!($field),
                                $crate::impl_record!(@rename $($rename)?),
                            ),
                        )*
                    ],
                );

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn $crate::types::FieldValue> {
                let mut position = 0usize;
                $(
                    if index == position {
                        return ::core::option::Option::Some(
                            &mut self.$field as &mut dyn $crate::types::FieldValue,
                        );
                    }
                    position += 1;
                )*
                ::core::option::Option::None
            }
        }
    };
}
