use crate::model::{RawVideoEntry, VideoDescriptor};
use anyhow::{Context, Result, bail};

/// Fixed ordered list of promo clips, the single source of repeatable
/// content. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<VideoDescriptor>,
}

impl Catalog {
    /// Keeps only the raw entries whose URL parses, order preserved.
    /// Everything downstream assumes at least one clip, so an all-invalid
    /// input is an error rather than an empty catalog.
    pub fn build(raw_entries: &[RawVideoEntry]) -> Result<Self> {
        let entries: Vec<VideoDescriptor> = raw_entries
            .iter()
            .filter_map(|raw| VideoDescriptor::from_raw(raw).ok())
            .collect();

        if entries.is_empty() {
            bail!("catalog has no entries with a valid url");
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VideoDescriptor] {
        &self.entries
    }

    /// Reverse 1-based lookup: the index counts down from the end, so the
    /// highest index maps to the first entry and index 1 to the last. This
    /// keeps "items remaining in the queue" aligned with the page indicator.
    pub fn lookup(&self, index: usize) -> Result<&VideoDescriptor> {
        if index == 0 || index > self.entries.len() {
            bail!(
                "catalog index {index} out of range 1..={}",
                self.entries.len()
            );
        }
        self.entries
            .get(self.entries.len() - index)
            .context("catalog entry missing")
    }

    /// Built-in promo reel used when no catalog file exists.
    pub fn default_entries() -> Vec<RawVideoEntry> {
        vec![
            RawVideoEntry {
                url: String::from("https://cdn.example.com/promo/spring-drop.mp4"),
                title: String::from("Fresh In"),
                description: String::from("The spring drop just landed"),
                cta: String::from("Shop now"),
            },
            RawVideoEntry {
                url: String::from("https://cdn.example.com/promo/weekend-edit.mp4"),
                title: String::from("Weekend Edit"),
                description: String::from("Three looks, one getaway"),
                cta: String::from("See the edit"),
            },
            RawVideoEntry {
                url: String::from("https://cdn.example.com/promo/last-call.mp4"),
                title: String::from("Last Call"),
                description: String::from("Final sizes going fast"),
                cta: String::from("Grab yours"),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(url: &str, title: &str) -> RawVideoEntry {
        RawVideoEntry {
            url: String::from(url),
            title: String::from(title),
            description: String::from("desc"),
            cta: String::from("go"),
        }
    }

    #[test]
    fn invalid_url_entries_are_omitted_in_order() {
        let catalog = Catalog::build(&[
            raw("https://cdn.example.com/a.mp4", "a"),
            raw("", "broken"),
            raw("https://cdn.example.com/c.mp4", "c"),
        ])
        .expect("catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].title, "a");
        assert_eq!(catalog.entries()[1].title, "c");
    }

    #[test]
    fn all_invalid_entries_is_an_error() {
        let result = Catalog::build(&[raw("", "x"), raw("not a url", "y")]);
        assert!(result.is_err());
    }

    #[test]
    fn lookup_counts_down_from_the_end() {
        let catalog = Catalog::build(&[
            raw("https://cdn.example.com/a.mp4", "a"),
            raw("https://cdn.example.com/b.mp4", "b"),
            raw("https://cdn.example.com/c.mp4", "c"),
        ])
        .expect("catalog");

        assert_eq!(catalog.lookup(3).expect("lookup").title, "a");
        assert_eq!(catalog.lookup(2).expect("lookup").title, "b");
        assert_eq!(catalog.lookup(1).expect("lookup").title, "c");
    }

    #[test]
    fn lookup_rejects_out_of_range_indices() {
        let catalog =
            Catalog::build(&[raw("https://cdn.example.com/a.mp4", "a")]).expect("catalog");

        assert!(catalog.lookup(0).is_err());
        assert!(catalog.lookup(2).is_err());
    }

    #[test]
    fn default_entries_all_validate() {
        let catalog = Catalog::build(&Catalog::default_entries()).expect("catalog");
        assert_eq!(catalog.len(), 3);
    }
}
