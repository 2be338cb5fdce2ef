//! Static [`Mock`] catalog.

use std::convert::Infallible;

use common::operations::Search;

use crate::{
    domain::{search::Query, Product},
    fallback,
};

use super::SearchEngine;

/// [`SearchEngine`] answering every [`Query`] with a canned [`Product`]
/// matching its keywords.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mock;

impl SearchEngine<Search<Query>> for Mock {
    type Ok = Vec<Product>;
    type Err = Infallible;

    async fn execute(
        &self,
        Search(query): Search<Query>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(fallback::products_for(&query))
    }
}
