//! [`Vision`] collaborator analyzing room photos.

use std::{convert::Infallible, time::Duration};

use common::operations::Analyze;
use tracing as log;

use crate::{
    domain::{RoomAnalysis, Url},
    fallback,
};

/// Room photo analysis.
pub use common::Handler as Vision;

/// [`Vision`] collaborator imitating a vision API round trip: it waits for
/// the configured delay and returns a fixed [`RoomAnalysis`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Mock {
    /// Delay of every analysis.
    delay: Duration,
}

impl Mock {
    /// Creates a new [`Mock`] answering after the provided `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Vision<Analyze<Url>> for Mock {
    type Ok = RoomAnalysis;
    type Err = Infallible;

    async fn execute(
        &self,
        Analyze(image): Analyze<Url>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("analyzing room photo `{image}`");
        tokio::time::sleep(self.delay).await;
        Ok(fallback::room_analysis())
    }
}
