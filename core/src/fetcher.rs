use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use jeopardy_protocol::CategoryId;

use crate::*;

/// Picks categories from a [`TriviaSource`] and turns them into board columns.
#[derive(Debug)]
pub struct CategoryFetcher<'a, S> {
    source: &'a S,
    config: &'a BoardConfig,
}

impl<'a, S: TriviaSource> CategoryFetcher<'a, S> {
    pub fn new(source: &'a S, config: &'a BoardConfig) -> Self {
        Self { source, config }
    }

    /// Samples random offsets until `count` distinct categories with enough clues are found.
    ///
    /// Every summary request counts as one attempt, accepted or not, and the search stops with
    /// [`TriviaError::ExhaustedRetries`] once `max_category_attempts` is used up.
    pub async fn random_category_ids(
        &self,
        sampler: &mut Sampler,
        count: usize,
    ) -> Result<Vec<CategoryId>> {
        let required = self.config.clues_per_category;
        let max_offset = i64::from(self.config.category_pool_size) - 1;
        let mut accepted = Vec::with_capacity(count);
        let mut seen = BTreeSet::new();
        let mut attempts = 0;

        while accepted.len() < count {
            if attempts >= self.config.max_category_attempts {
                log::warn!(
                    "stopped after {} attempts, found {} of {} categories",
                    attempts,
                    accepted.len(),
                    count
                );
                return Err(TriviaError::ExhaustedRetries {
                    attempts,
                    accepted: accepted.len(),
                    required: count,
                });
            }
            attempts += 1;

            let offset = sampler.random_int(max_offset)? as u32;
            let Some(summary) = self.source.category_at(offset).await? else {
                log::trace!("offset {}: no category", offset);
                continue;
            };

            if (summary.clues_count as usize) < required {
                log::trace!(
                    "offset {}: category {} has only {} clues",
                    offset,
                    summary.id,
                    summary.clues_count
                );
            } else if !seen.insert(summary.id) {
                log::trace!("offset {}: category {} already picked", offset, summary.id);
            } else {
                log::debug!("picked category {} ({:?})", summary.id, summary.title);
                accepted.push(summary.id);
            }
        }

        log::debug!("picked {} categories in {} attempts", count, attempts);
        Ok(accepted)
    }

    /// Fetches one category and draws `clues_per_category` distinct clues from it.
    pub async fn category(&self, sampler: &mut Sampler, id: CategoryId) -> Result<Category> {
        let detail = self.source.category(id).await?;
        let required = self.config.clues_per_category;
        let available = detail.clues.len();

        if available < required {
            return Err(TriviaError::DataShortfall {
                category_id: id,
                required,
                available,
            });
        }

        let picks = sampler.random_unique_ints(required, available as i64 - 1)?;
        let clues = picks
            .into_iter()
            .map(|index| Clue::from(&detail.clues[index as usize]))
            .collect();

        Ok(Category {
            id: detail.id,
            title: detail.title,
            clues,
        })
    }
}

/// Builds a fresh board: picks the categories, then fetches them one at a time.
///
/// Any failure aborts the whole build.
pub async fn build_board<S: TriviaSource>(
    source: &S,
    sampler: &mut Sampler,
    config: &BoardConfig,
) -> Result<Board> {
    config.validate()?;
    log::info!(
        "building {}x{} board",
        config.categories,
        config.clues_per_category
    );

    let fetcher = CategoryFetcher::new(source, config);
    let ids = fetcher
        .random_category_ids(sampler, config.categories)
        .await?;

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        let category = fetcher.category(sampler, id).await?;
        log::debug!("loaded category {} ({:?})", category.id, category.title);
        categories.push(category);
    }

    Board::new(categories)
}
