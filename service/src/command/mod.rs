//! [`Command`] definition.
//!
//! Every [`Command`] wraps the calls to external collaborators it performs:
//! a failed call is logged and substituted with a [`fallback`] dataset, so
//! [`Command`]s never fail.
//!
//! [`fallback`]: crate::fallback

pub mod analyze_room;
pub mod design_room;
pub mod generate_room;
pub mod recommend_products;
pub mod search_products;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    analyze_room::AnalyzeRoom, design_room::DesignRoom,
    generate_room::GenerateRoom, recommend_products::RecommendProducts,
    search_products::SearchProducts,
};

#[cfg(test)]
pub(crate) mod double {
    //! Test doubles of external collaborators.

    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use common::{
        operations::{Analyze, Generate, Search},
        Handler,
    };
    use derive_more::Display;

    use crate::{
        domain::{search::Query, Product, RoomAnalysis, Url},
        infra::imaging,
    };

    /// Error of a [`Failing`] collaborator.
    #[derive(Clone, Copy, Debug, Display)]
    #[display("collaborator is down")]
    pub(crate) struct Down;

    /// Collaborator failing every call.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct Failing {
        /// Number of performed calls.
        pub(crate) calls: Arc<AtomicUsize>,
    }

    impl Failing {
        /// Returns the number of performed calls.
        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn fail<T>(&self) -> Result<T, Down> {
            _ = self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Down)
        }
    }

    impl Handler<Analyze<Url>> for Failing {
        type Ok = RoomAnalysis;
        type Err = Down;

        async fn execute(&self, _: Analyze<Url>) -> Result<Self::Ok, Self::Err> {
            self.fail()
        }
    }

    impl Handler<Search<Query>> for Failing {
        type Ok = Vec<Product>;
        type Err = Down;

        async fn execute(&self, _: Search<Query>) -> Result<Self::Ok, Self::Err> {
            self.fail()
        }
    }

    impl Handler<Generate<imaging::Request>> for Failing {
        type Ok = Url;
        type Err = Down;

        async fn execute(
            &self,
            _: Generate<imaging::Request>,
        ) -> Result<Self::Ok, Self::Err> {
            self.fail()
        }
    }

    /// [`Search`] collaborator answering every [`Query`] with the same
    /// [`Product`]s.
    #[derive(Clone, Debug)]
    pub(crate) struct Shelf(pub(crate) Vec<Product>);

    impl Handler<Search<Query>> for Shelf {
        type Ok = Vec<Product>;
        type Err = Down;

        async fn execute(&self, _: Search<Query>) -> Result<Self::Ok, Self::Err> {
            Ok(self.0.clone())
        }
    }
}
