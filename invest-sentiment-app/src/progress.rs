use {
    async_trait::async_trait,
    indicatif::{ProgressBar, ProgressStyle},
    invest_sentiment_core::{
        catalog::{AppEntry, AppListing, CatalogLookup},
        error::Result,
    },
};

/// Advances a progress bar once per store lookup. Hidden when stderr is not a terminal.
pub struct ProgressCatalog<C> {
    inner: C,
    bar: ProgressBar,
}

impl<C: CatalogLookup> ProgressCatalog<C> {
    pub fn new(inner: C, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
            bar.set_style(style);
        }

        Self {
            inner,
            bar,
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[async_trait]
impl<C: CatalogLookup> CatalogLookup for ProgressCatalog<C> {
    async fn lookup(&self, app: &AppEntry) -> Result<AppListing> {
        self.bar.set_message(app.name.clone());
        let res = self.inner.lookup(app).await;
        self.bar.inc(1);
        res
    }
}
