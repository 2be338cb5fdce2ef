//! [`Command`] for analyzing a room photo.

use std::{convert::Infallible, fmt};

use common::operations::Analyze;
use tracing as log;

use crate::{
    domain::{RoomAnalysis, Url},
    fallback,
    infra::Vision,
    Service,
};

use super::Command;

/// [`Command`] for analyzing a room photo.
///
/// Falls back to [`fallback::room_analysis()`] whenever the [`Vision`]
/// collaborator fails.
#[derive(Clone, Debug)]
pub struct AnalyzeRoom {
    /// [`Url`] of the room photo to analyze.
    pub image_url: Url,
}

impl<V, S, I> Command<AnalyzeRoom> for Service<V, S, I>
where
    V: Vision<Analyze<Url>, Ok = RoomAnalysis>,
    V::Err: fmt::Display,
{
    type Ok = RoomAnalysis;
    type Err = Infallible;

    async fn execute(&self, cmd: AnalyzeRoom) -> Result<Self::Ok, Self::Err> {
        let AnalyzeRoom { image_url } = cmd;

        Ok(self
            .vision()
            .execute(Analyze(image_url.clone()))
            .await
            .unwrap_or_else(|e| {
                log::warn!(
                    "failed to analyze `{image_url}`, using fallback: {e}",
                );
                fallback::room_analysis()
            }))
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        command::double::Failing,
        domain::{room::Size, Url},
        infra::{imaging::Passthrough, search::Mock, vision},
        Command as _, Config, Service,
    };

    use super::AnalyzeRoom;

    fn cmd() -> AnalyzeRoom {
        AnalyzeRoom {
            image_url: Url::new("https://example.com/room.jpg"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn analyzes_after_delay() {
        let service = Service::new(
            Config::default(),
            vision::Mock::new(Duration::from_secs(2)),
            Mock,
            Passthrough,
        );

        let analysis = service.execute(cmd()).await.unwrap();

        assert_eq!(analysis.room_type, "living room");
        assert_eq!(analysis.size, Size::Medium);
        assert_eq!(analysis.recommendations.len(), 5);
    }

    #[tokio::test]
    async fn falls_back_on_vision_failure() {
        let vision = Failing::default();
        let service =
            Service::new(Config::default(), vision.clone(), Mock, Passthrough);

        let analysis = service.execute(cmd()).await.unwrap();

        assert_eq!(vision.calls(), 1);
        assert_eq!(analysis, crate::fallback::room_analysis());
    }
}
