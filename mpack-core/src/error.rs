// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error type shared by every encoder in the crate.
//!
//! Error constructors sit on the cold path of every sink write and header
//! emission, so they are marked `#[cold]` and `#[inline(always)]` to keep the
//! successful paths tight. Always build errors through the constructor
//! functions rather than the enum variants.

use std::borrow::Cow;

use thiserror::Error;

/// Set `MPACK_PANIC_ON_ERROR=1` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("MPACK_PANIC_ON_ERROR").is_some();

/// Error type for mpack encoding operations.
///
/// # Always Use Static Constructor Functions
///
/// ```rust
/// use mpack_core::error::Error;
///
/// let err = Error::key_transform("unknown key `color`");
/// let err = Error::size_limit("map", 1usize << 33);
/// ```
///
/// The one exception is [`Error::Io`], which is produced by `?` on a
/// `std::io::Error` so that sink failures propagate verbatim.
///
/// ## Debug Mode: MPACK_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 MPACK_PANIC_ON_ERROR=1 cargo test
/// ```
///
/// With the variable set, every constructor panics with the error message, so
/// the backtrace points at the exact place the failure originated.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The output sink rejected a write.
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configured key transform refused a key.
    ///
    /// Do not construct this variant directly; use [`Error::key_transform`] instead.
    #[error("key transform failed: {0}")]
    KeyTransform(Cow<'static, str>),

    /// A value did not have the shape its static type promised.
    ///
    /// Do not construct this variant directly; use [`Error::type_error`] instead.
    #[error("{0}")]
    TypeError(Cow<'static, str>),

    /// A container or payload is too large for the wire format.
    ///
    /// Do not construct this variant directly; use [`Error::size_limit`] instead.
    #[error("{0} length {1} exceeds the 32-bit wire limit")]
    SizeLimit(&'static str, usize),

    /// Maximum nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Generic unknown error.
    ///
    /// Do not construct this variant directly; use [`Error::unknown`] instead.
    #[error("{0}")]
    Unknown(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::KeyTransform`].
    ///
    /// Key transforms should return this from lookups that miss.
    ///
    /// # Example
    /// ```
    /// use mpack_core::error::Error;
    ///
    /// let err = Error::key_transform(format!("no code for key `{}`", "name"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn key_transform<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::KeyTransform(s.into());
        if PANIC_ON_ERROR {
            panic!("MPACK_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeError`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::TypeError(s.into());
        if PANIC_ON_ERROR {
            panic!("MPACK_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::SizeLimit`] for a container or payload `kind`.
    ///
    /// # Example
    /// ```
    /// use mpack_core::error::Error;
    ///
    /// let err = Error::size_limit("array", usize::MAX);
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn size_limit(kind: &'static str, len: usize) -> Self {
        let err = Error::SizeLimit(kind, len);
        if PANIC_ON_ERROR {
            panic!("MPACK_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("MPACK_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unknown`].
    ///
    /// # Example
    /// ```
    /// use mpack_core::error::Error;
    ///
    /// let err = Error::unknown("Something went wrong");
    /// let err = Error::unknown(format!("field index {} out of range", 7));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unknown(s.into());
        if PANIC_ON_ERROR {
            panic!("MPACK_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Appends the name of `T` to a [`Error::TypeError`].
    ///
    /// Other variants are returned unchanged.
    #[inline(never)]
    pub fn enhance_type_error<T: ?Sized>(err: Error) -> Error {
        match err {
            Error::TypeError(s) => {
                Error::type_error(format!("{} (type: {})", s, std::any::type_name::<T>()))
            }
            other => other,
        }
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use mpack_core::ensure;
/// use mpack_core::error::Error;
///
/// fn check_len(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, "length must be positive");
///     ensure!(n < 10, "length {} too large", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unknown($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)));
        }
    };
}
