//! The host-facing folding surface.
//!
//! A [FoldingProvider] ties the [detector](crate::detector) to a
//! [RangeCache](crate::cache::RangeCache) and turns detection results into
//! fold and unfold requests for the host editor to execute. It owns no editor
//! state itself; hosts feed it [Document](crate::document::Document)
//! snapshots and receive [FoldRange]s and [FoldCommand]s back.

use slog::{debug, o, trace, Discard, Logger};

use crate::cache::RangeCache;
use crate::document::Document;
use crate::event::{Event, EventDispatcher, EventListener};
use crate::range::FoldRange;

/// Direction of a [FoldCommand].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldDirection {
    /// Collapse the range.
    Fold,
    /// Expand the range.
    Unfold,
}

/// A request for the host editor to fold or unfold a single line range.
///
/// The provider only produces these; executing them against the actual
/// editor is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldCommand {
    /// Whether the range is to be folded or unfolded.
    pub direction: FoldDirection,

    /// The range the command applies to.
    pub range: FoldRange,
}

/// Detects and caches docstring fold ranges on behalf of a host editor.
pub struct FoldingProvider {
    cache: RangeCache,
    dispatcher: EventDispatcher,
    logger: Logger,
}

impl FoldingProvider {
    /// Creates a provider that logs nowhere.
    pub fn new() -> FoldingProvider {
        FoldingProvider::with_logger(None)
    }

    /// Creates a provider that logs detection and cache activity to the
    /// given logger.
    pub fn with_logger<L>(logger: L) -> FoldingProvider
    where
        L: Into<Option<Logger>>,
    {
        let logger = logger
            .into()
            .unwrap_or(Logger::root(Discard, o!()))
            .new(o!("component" => "folding"));

        FoldingProvider {
            cache: RangeCache::new(),
            dispatcher: EventDispatcher::new(),
            logger,
        }
    }

    /// Registers a listener for the provider's [Event]s.
    pub fn add_listener<L: EventListener + 'static>(&mut self, listener: L) {
        self.dispatcher.add_listener(listener);
    }

    /// Returns the fold ranges of the given document.
    ///
    /// Detection runs only if the document has no cached result; the host is
    /// responsible for calling [invalidate](FoldingProvider::invalidate) (or
    /// [document_opened](FoldingProvider::document_opened)) when the
    /// document's content changes.
    pub fn provide_ranges(&mut self, document: &Document) -> &[FoldRange] {
        if self.cache.get(document.key()).is_none() {
            self.refresh(document);
        } else {
            trace!(self.logger, "using cached ranges"; "document" => document.key());
        }

        self.cache.get(document.key()).unwrap_or(&[])
    }

    /// Notifies the provider that a document became active in the host.
    ///
    /// The document's ranges are recomputed unconditionally, so a stale cache
    /// entry from a previous snapshot is replaced.
    pub fn document_opened(&mut self, document: &Document) {
        self.refresh(document);
    }

    /// Drops the cached ranges of the given document key.
    pub fn invalidate(&mut self, key: &str) {
        if self.cache.invalidate(key).is_some() {
            trace!(self.logger, "invalidated cache entry"; "document" => key);
            self.dispatcher.dispatch(Event::CacheInvalidated {
                key: key.to_string(),
            });
        }
    }

    /// Produces a fold command for every docstring block of the document.
    pub fn fold_commands(&mut self, document: &Document) -> Vec<FoldCommand> {
        self.commands(document, FoldDirection::Fold)
    }

    /// Produces an unfold command for every docstring block of the document.
    pub fn unfold_commands(&mut self, document: &Document) -> Vec<FoldCommand> {
        self.commands(document, FoldDirection::Unfold)
    }

    fn commands(&mut self, document: &Document, direction: FoldDirection) -> Vec<FoldCommand> {
        let ranges = self.provide_ranges(document).to_vec();

        let commands: Vec<_> = ranges
            .into_iter()
            .map(|range| FoldCommand { direction, range })
            .collect();

        for command in &commands {
            trace!(
                self.logger,
                "requesting fold change";
                "document" => document.key(),
                "direction" => ?command.direction,
                "range" => %command.range
            );

            self.dispatcher.dispatch(Event::FoldRequested {
                direction: command.direction,
                range: command.range,
            });
        }

        commands
    }

    fn refresh(&mut self, document: &Document) {
        let ranges = document.fold_ranges();

        debug!(
            self.logger,
            "detected docstring blocks";
            "document" => document.key(),
            "count" => ranges.len()
        );

        self.dispatcher.dispatch(Event::RangesDetected {
            key: document.key().to_string(),
            count: ranges.len(),
        });

        self.cache.insert(document.key(), ranges);
    }
}

impl Default for FoldingProvider {
    fn default() -> FoldingProvider {
        FoldingProvider::new()
    }
}
