use std::pin::pin;

use futures_util::future::{Either, select};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use jeopardy_core::protocol::{CategoryDetail, CategoryId, CategorySummary, endpoint};
use jeopardy_core::{MemorySource, Result, TriviaError, TriviaSource};
use serde::de::DeserializeOwned;

const DEMO_CATEGORIES: &str = include_str!("demo.json");

/// jService over HTTP, one request at a time, each bounded by `timeout_ms`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JServiceSource {
    base: String,
    timeout_ms: u32,
}

impl JServiceSource {
    pub(crate) fn new(base: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base: base.into(),
            timeout_ms,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::trace!("GET {}", url);
        let request = async {
            let response = Request::get(url).send().await.map_err(network_failure)?;
            check_status(url, response.status())?;
            response.json::<T>().await.map_err(network_failure)
        };
        with_timeout(self.timeout_ms, request).await
    }
}

impl TriviaSource for JServiceSource {
    async fn category_at(&self, offset: u32) -> Result<Option<CategorySummary>> {
        let listing: Vec<CategorySummary> = self
            .get_json(&endpoint::category_at(&self.base, offset))
            .await?;
        Ok(listing.into_iter().next())
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        self.get_json(&endpoint::category(&self.base, id)).await
    }
}

/// Anything outside 2xx fails before the body is decoded.
fn check_status(url: &str, status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(TriviaError::NetworkFailure(format!(
            "{} returned HTTP {}",
            url, status
        )))
    }
}

fn network_failure(err: gloo::net::Error) -> TriviaError {
    TriviaError::NetworkFailure(err.to_string())
}

async fn with_timeout<T>(millis: u32, request: impl Future<Output = Result<T>>) -> Result<T> {
    match select(pin!(request), pin!(TimeoutFuture::new(millis))).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("request timed out after {} ms", millis);
            Err(TriviaError::Timeout { millis })
        }
    }
}

/// Categories bundled with the app for playing without the API.
pub(crate) fn demo_categories() -> serde_json::Result<Vec<CategoryDetail>> {
    serde_json::from_str(DEMO_CATEGORIES)
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Source {
    Remote(JServiceSource),
    Offline(MemorySource),
}

impl TriviaSource for Source {
    async fn category_at(&self, offset: u32) -> Result<Option<CategorySummary>> {
        match self {
            Self::Remote(source) => source.category_at(offset).await,
            Self::Offline(source) => source.category_at(offset).await,
        }
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        match self {
            Self::Remote(source) => source.category(id).await,
            Self::Offline(source) => source.category(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeopardy_core::BoardConfig;
    use std::collections::BTreeSet;

    #[test]
    fn demo_categories_fill_a_default_board() {
        let categories = demo_categories().unwrap();
        let ids: BTreeSet<_> = categories.iter().map(|category| category.id).collect();

        assert!(categories.len() >= BoardConfig::NUM_CATEGORIES);
        assert_eq!(ids.len(), categories.len());
        for category in &categories {
            assert!(
                category.clues.len() >= BoardConfig::NUM_QUESTIONS_PER_CAT,
                "{} is too short",
                category.title
            );
            assert_eq!(category.clues_count as usize, category.clues.len());
        }
    }

    #[test]
    fn error_status_is_a_recoverable_network_failure() {
        let url = "http://jservice.io/api/category?id=1";

        assert_eq!(check_status(url, 200), Ok(()));
        assert_eq!(check_status(url, 204), Ok(()));
        for status in [301, 404, 500, 503] {
            let err = check_status(url, status).unwrap_err();
            assert!(
                matches!(&err, TriviaError::NetworkFailure(msg) if msg.contains(&status.to_string())),
                "{:?}",
                err
            );
            assert!(err.is_recoverable());
        }
    }
}
