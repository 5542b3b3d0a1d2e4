//! The slide list and how slides map onto catalogs.
mod content;

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogSet};
use crate::error::CatalogError;

use content::{BUILTIN_CATALOG_IDS, SLIDES, SlideTemplate, TemplateBody};

/// What a slide draws under its title.
#[derive(Debug, Clone)]
pub enum SlideBody {
    Text,
    /// A playable step diagram over one catalog.
    Flow(Arc<Catalog>),
    /// Timing bars for several catalogs side by side.
    Timing(Vec<Arc<Catalog>>),
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub id: String,
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub lines: Vec<String>,
    pub notes: Vec<String>,
    pub body: SlideBody,
}

impl Slide {
    #[must_use]
    pub fn flow_catalog(&self) -> Option<&Arc<Catalog>> {
        match &self.body {
            SlideBody::Flow(catalog) => Some(catalog),
            SlideBody::Text | SlideBody::Timing(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    count: NonZeroUsize,
}

impl Deck {
    /// Builds the deck from the built-in slide list. Catalogs beyond the
    /// built-in three each get a flow slide placed before the summary.
    ///
    /// # Errors
    ///
    /// Returns an error when a slide refers to a catalog the set does not
    /// contain.
    pub fn build(catalogs: &CatalogSet) -> Result<Self, CatalogError> {
        let mut slides = Vec::with_capacity(SLIDES.len().saturating_add(catalogs.len()));
        for template in SLIDES {
            slides.push(resolve(template, catalogs)?);
        }

        let summary_at = slides
            .iter()
            .position(|slide| slide.id == "summary")
            .unwrap_or(slides.len());
        let extras: Vec<Slide> = catalogs
            .iter()
            .filter(|catalog| !BUILTIN_CATALOG_IDS.contains(&catalog.id()))
            .map(extra_flow_slide)
            .collect();
        for (offset, slide) in extras.into_iter().enumerate() {
            slides.insert(summary_at.saturating_add(offset), slide);
        }

        let count = NonZeroUsize::new(slides.len()).ok_or(CatalogError::EmptyDeck)?;
        Ok(Self { slides, count })
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub const fn count(&self) -> NonZeroUsize {
        self.count
    }
}

fn resolve(template: &SlideTemplate, catalogs: &CatalogSet) -> Result<Slide, CatalogError> {
    let lookup = |id: &str| {
        catalogs
            .get(id)
            .ok_or_else(|| CatalogError::SlideCatalogMissing {
                slide: template.id.to_owned(),
                catalog: id.to_owned(),
            })
    };
    let body = match template.body {
        TemplateBody::Text => SlideBody::Text,
        TemplateBody::Flow(id) => SlideBody::Flow(lookup(id)?),
        TemplateBody::Timing(ids) => SlideBody::Timing(
            ids.iter()
                .map(|id| lookup(id))
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };
    Ok(Slide {
        id: template.id.to_owned(),
        label: template.label.to_owned(),
        title: template.title.to_owned(),
        subtitle: template.subtitle.to_owned(),
        lines: template.lines.iter().map(|line| (*line).to_owned()).collect(),
        notes: template.notes.iter().map(|note| (*note).to_owned()).collect(),
        body,
    })
}

fn extra_flow_slide(catalog: &Arc<Catalog>) -> Slide {
    Slide {
        id: format!("{}-flow", catalog.id()),
        label: catalog.title().to_owned(),
        title: catalog.title().to_owned(),
        subtitle: catalog.subtitle().to_owned(),
        lines: Vec::new(),
        notes: Vec::new(),
        body: SlideBody::Flow(Arc::clone(catalog)),
    }
}
