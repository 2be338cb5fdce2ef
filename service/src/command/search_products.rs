//! [`Command`] for searching furnishing [`Product`]s.

use std::{convert::Infallible, fmt};

use common::operations::Search;
use tracing as log;

use crate::{
    domain::{search::Query, Product},
    fallback,
    infra::SearchEngine,
    Service,
};

use super::Command;

/// [`Command`] for searching furnishing [`Product`]s by a free-text
/// [`Query`].
///
/// Falls back to [`fallback::products_for()`] the [`Query`] whenever the
/// [`SearchEngine`] fails.
#[derive(Clone, Debug)]
pub struct SearchProducts {
    /// [`Query`] to search [`Product`]s with.
    pub query: Query,
}

impl<V, S, I> Command<SearchProducts> for Service<V, S, I>
where
    S: SearchEngine<Search<Query>, Ok = Vec<Product>>,
    S::Err: fmt::Display,
{
    type Ok = Vec<Product>;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: SearchProducts,
    ) -> Result<Self::Ok, Self::Err> {
        let SearchProducts { query } = cmd;

        Ok(self
            .search()
            .execute(Search(query.clone()))
            .await
            .unwrap_or_else(|e| {
                log::warn!("failed to search `{query}`, using fallback: {e}");
                fallback::products_for(&query)
            }))
    }
}
