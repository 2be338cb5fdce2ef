//! [`SearchEngine`] collaborators finding furnishing [`Product`]s.

#[cfg(feature = "exa")]
pub mod exa;
mod mock;

use common::operations::Search;
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::domain::{search::Query, Product};

#[cfg(feature = "exa")]
pub use self::exa::Exa;
pub use self::mock::Mock;

/// Product search.
pub use common::Handler as SearchEngine;

/// [`SearchEngine`] chosen at startup.
#[derive(Clone, Debug)]
pub enum Provider {
    /// [`Exa`] neural search.
    #[cfg(feature = "exa")]
    Exa(Exa),

    /// Static [`Mock`] catalog.
    Mock(Mock),
}

impl SearchEngine<Search<Query>> for Provider {
    type Ok = Vec<Product>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        search: Search<Query>,
    ) -> Result<Self::Ok, Self::Err> {
        match self {
            #[cfg(feature = "exa")]
            Self::Exa(exa) => exa.execute(search).await,
            Self::Mock(mock) => mock.execute(search).await.map_err(|e| match e {}),
        }
    }
}

/// [`SearchEngine`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Exa`] error.
    #[cfg(feature = "exa")]
    #[display("`Exa` search failed: {_0}")]
    Exa(exa::Error),
}
