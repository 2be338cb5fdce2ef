//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Every operation of the system is expressed as a [`Handler`] of some
/// arguments: commands of the service, as well as requests to its external
/// collaborators.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
