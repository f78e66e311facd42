use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use jeopardy_protocol::{CategoryDetail, CategoryId, CategorySummary};

use crate::*;

/// Where categories and clues come from.
///
/// Offsets index an enumerable listing of `BoardConfig::category_pool_size` categories. An offset
/// past the end of the listing yields `Ok(None)`.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    async fn category_at(&self, offset: u32) -> Result<Option<CategorySummary>>;

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}

impl<S: TriviaSource + ?Sized> TriviaSource for &S {
    async fn category_at(&self, offset: u32) -> Result<Option<CategorySummary>> {
        (**self).category_at(offset).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        (**self).category(id).await
    }
}

impl<S: TriviaSource + ?Sized> TriviaSource for Rc<S> {
    async fn category_at(&self, offset: u32) -> Result<Option<CategorySummary>> {
        (**self).category_at(offset).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        (**self).category(id).await
    }
}

/// Fixed list of categories served from memory, in listing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySource {
    categories: Vec<CategoryDetail>,
}

impl MemorySource {
    pub fn new(categories: Vec<CategoryDetail>) -> Self {
        Self { categories }
    }

    /// Pool size to configure a board with when drawing from this source.
    pub fn pool_size(&self) -> u32 {
        self.categories.len().try_into().unwrap_or(u32::MAX)
    }
}

impl TriviaSource for MemorySource {
    async fn category_at(&self, offset: u32) -> Result<Option<CategorySummary>> {
        Ok(self
            .categories
            .get(offset as usize)
            .map(CategoryDetail::summary))
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .ok_or_else(|| TriviaError::NetworkFailure(format!("no category with id {id}")))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    use super::*;
    use jeopardy_protocol::ClueRecord;

    pub(crate) fn category(id: CategoryId, title: &str, clues: usize) -> CategoryDetail {
        CategoryDetail {
            id,
            title: title.to_string(),
            clues_count: clues as u32,
            clues: (0..clues)
                .map(|i| ClueRecord {
                    id: Some(id * 100 + i as u64),
                    question: format!("{title} question {i}"),
                    answer: format!("{title} answer {i}"),
                    value: Some(200 * (i as u32 % 5 + 1)),
                })
                .collect(),
        }
    }

    /// Categories `1..=count`, each with `clues` clues.
    pub(crate) fn pool(count: u64, clues: usize) -> MemorySource {
        MemorySource::new(
            (1..=count)
                .map(|id| category(id, &format!("Category {id}"), clues))
                .collect(),
        )
    }

    /// Wraps a source, counting requests and failing detail requests after `fail_after` of them.
    pub(crate) struct FlakySource<S> {
        pub inner: S,
        pub fail_after: Option<usize>,
        pub summary_requests: Cell<usize>,
        pub detail_requests: Cell<usize>,
        pub failure: String,
    }

    impl<S> FlakySource<S> {
        pub(crate) fn new(inner: S) -> Self {
            Self {
                inner,
                fail_after: None,
                summary_requests: Cell::new(0),
                detail_requests: Cell::new(0),
                failure: "connection reset".to_string(),
            }
        }

        pub(crate) fn failing_after(mut self, details: usize) -> Self {
            self.fail_after = Some(details);
            self
        }
    }

    impl<S: TriviaSource> TriviaSource for FlakySource<S> {
        async fn category_at(&self, offset: u32) -> Result<Option<CategorySummary>> {
            self.summary_requests.set(self.summary_requests.get() + 1);
            self.inner.category_at(offset).await
        }

        async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
            let served = self.detail_requests.get();
            self.detail_requests.set(served + 1);
            if self.fail_after.is_some_and(|limit| served >= limit) {
                return Err(TriviaError::NetworkFailure(self.failure.clone()));
            }
            self.inner.category(id).await
        }
    }
}
