//! Helpers for sealing public traits that must not be implemented outside the
//! crate.

macro_rules! private_decl {
    () => {
        /// This trait is sealed and can not be implemented outside of this crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::Sealed;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::Sealed {
            crate::private::Sealed
        }
    };
}

#[doc(hidden)]
pub struct Sealed;
