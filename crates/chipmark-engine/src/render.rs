use crate::{
    assemble::{SafeHtml, assemble},
    blocks::{BlockBuilder, classify},
    escape::escape,
    options::RenderOptions,
    references::{Extracted, RawText, extract},
    reinject::Reinjector,
    resolve::{EagerResolver, LazyResolver, ReferenceEntry, Resolver},
};

/// Renders `text` to HTML.
///
/// With `Some(references)` mentions and note links are matched against the
/// list; with `None` every reference renders unresolved for click-time lookup.
pub fn render(text: &str, references: Option<&[ReferenceEntry]>) -> String {
    let options = RenderOptions::default();
    let html = match references {
        Some(entries) => render_with(text, &EagerResolver::new(entries), &options),
        None => render_with(text, &LazyResolver, &options),
    };
    html.into_string()
}

/// Runs the full pipeline with an explicit resolver and options.
pub fn render_with(text: &str, resolver: &dyn Resolver, options: &RenderOptions) -> SafeHtml {
    let Extracted { text, table } = extract(RawText::new(text), options, resolver);
    let escaped = escape(text);

    let mut builder = BlockBuilder::new();
    for line in escaped.lines() {
        builder.push(classify(line));
    }
    let fragments = builder.finish();

    let reinjector = Reinjector::new(&table, resolver);
    let html = assemble(fragments.iter().map(|f| reinjector.reinject(f)));
    log::debug!(
        "rendered {} block fragment(s), {} reference(s), {} bytes",
        fragments.len(),
        table.len(),
        html.as_str().len()
    );
    html
}

/// Reusable renderer holding options. Carries no per-call state, so one
/// instance can serve concurrent renders.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, text: &str, resolver: &dyn Resolver) -> SafeHtml {
        render_with(text, resolver, &self.options)
    }
}
