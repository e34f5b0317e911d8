pub mod crush;

use std::error;

/// A trait that defines the behavior of a streaming hasher.
///
/// The runner uses an instance of a hasher as follows for each source:
/// - Create the instance (with method `new()` or a constructor with parameters).
/// - Add the source's content during reading (with method `absorb(..)`).
/// - Finalize hash calculation (with method `finish()`).
/// - Request the hash (with method `hash()`).
pub trait Hasher {
    /// The type of error that can occur during operations.
    type Error: error::Error + Into<crate::E>;

    /// Creates a hasher with default parameters.
    fn new() -> Self
    where
        Self: Sized;

    /// Absorbs data into the hasher. This method might be called multiple times during the reading
    /// of a source, with chunks of any length. The result must not depend on how the content was
    /// split between calls.
    ///
    /// # Parameters
    ///
    /// - `data`: A reference to a slice of bytes to be absorbed by the hasher.
    ///
    /// # Returns
    ///
    /// - `Result<(), Self::Error>`: On success, returns `Ok(())`. On failure,
    ///   returns an error of type `Self::Error`.
    fn absorb(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Finalizes the hashing process. This method should be called after all data has been absorbed
    /// and only once.
    fn finish(&mut self) -> Result<(), Self::Error>;

    /// Retrieves the computed hash. This method should be called after `finish`.
    ///
    /// # Returns
    ///
    /// - `Result<&[u8], Self::Error>`: On success, returns a reference to the computed hash. On failure,
    ///   returns an error of type `Self::Error`.
    fn hash(&self) -> Result<&[u8], Self::Error>;
}
