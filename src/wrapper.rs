//! Typed views over protobuf messages.
//!
//! Every wrapper is generic over how it holds its message: `Track` owns a
//! `board_types::Track`, `Track<&board_types::Track>` reads one that lives
//! elsewhere and `Track<&mut board_types::Track>` edits it in place. Composite
//! accessors such as `attributes_mut()` hand out the borrowed forms, so edits
//! through them land in the root message.

use prost_types::Any;

use crate::envelope;
use crate::proto::ApiMessage;

pub trait Wrapper {
    type Proto: ApiMessage;

    /// The wrapped message.
    fn proto(&self) -> &Self::Proto;

    /// Packs a copy of the wrapped message for sending.
    fn pack(&self) -> Any {
        envelope::pack_any(self.proto())
    }
}

pub trait WrapperMut: Wrapper {
    fn proto_mut(&mut self) -> &mut Self::Proto;

    /// Overwrites the wrapped message with `other`, e.g. the host's copy after
    /// an update.
    fn copy_from(&mut self, other: &Self::Proto) {
        self.proto_mut().clone_from(other);
    }
}

/// Declares a wrapper struct over a protobuf message, with constructors and
/// the [`Wrapper`] / [`WrapperMut`] impls. Accessors are written by hand next
/// to each declaration.
macro_rules! wrapper {
    ($(#[$meta:meta])* $name:ident => $proto:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name<P = $proto> {
            proto: P,
        }

        impl $name {
            /// A wrapper around a default-valued message.
            pub fn new() -> Self {
                Self {
                    proto: <$proto as ::core::default::Default>::default(),
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<P> $name<P> {
            /// Wraps `proto` as is. Pass `&mut message` to edit a message
            /// owned by someone else.
            pub fn from_proto(proto: P) -> Self {
                Self { proto }
            }

            pub fn into_proto(self) -> P {
                self.proto
            }
        }

        impl ::core::convert::From<$proto> for $name {
            fn from(proto: $proto) -> Self {
                Self::from_proto(proto)
            }
        }

        impl<P: ::std::borrow::Borrow<$proto>> $crate::wrapper::Wrapper for $name<P> {
            type Proto = $proto;

            fn proto(&self) -> &$proto {
                <P as ::std::borrow::Borrow<$proto>>::borrow(&self.proto)
            }
        }

        impl<P: ::std::borrow::BorrowMut<$proto>> $crate::wrapper::WrapperMut for $name<P> {
            fn proto_mut(&mut self) -> &mut $proto {
                <P as ::std::borrow::BorrowMut<$proto>>::borrow_mut(&mut self.proto)
            }
        }
    };
}

pub(crate) use wrapper;
