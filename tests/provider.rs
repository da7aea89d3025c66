use std::cell::RefCell;
use std::rc::Rc;

use slog::{o, Drain, Logger};
use slog_term::{FullFormat, PlainSyncDecorator, TestStdoutWriter};

use docfold::{
    cache::RangeCache,
    document::Document,
    event::Event,
    provider::{FoldDirection, FoldingProvider},
    range::FoldRange,
};

fn test_logger() -> Logger {
    let decorator = PlainSyncDecorator::new(TestStdoutWriter);
    let drain = FullFormat::new(decorator).build().fuse();

    Logger::root(drain, o!())
}

fn docstring_document(key: &str) -> Document {
    Document::new(key, include_str!("module.py"))
}

#[test]
fn test_provide_ranges_detects_and_caches() {
    let mut provider = FoldingProvider::with_logger(test_logger());
    let document = docstring_document("file:///module.py");

    let ranges = provider.provide_ranges(&document).to_vec();
    assert_eq!(ranges.len(), 3);

    // A new snapshot under the same key does not trigger re-detection,
    // even though its content has no markers at all.
    let edited = Document::new("file:///module.py", "import sys\n");
    assert_eq!(provider.provide_ranges(&edited), &ranges[..]);

    // Until the entry is invalidated.
    provider.invalidate("file:///module.py");
    assert!(provider.provide_ranges(&edited).is_empty());
}

#[test]
fn test_document_opened_recomputes_unconditionally() {
    let mut provider = FoldingProvider::new();
    let document = docstring_document("file:///a.py");

    assert_eq!(provider.provide_ranges(&document).len(), 3);

    let edited = Document::new("file:///a.py", "pass\n");
    provider.document_opened(&edited);

    assert!(provider.provide_ranges(&edited).is_empty());
}

#[test]
fn test_markerless_document_provides_nothing() {
    let mut provider = FoldingProvider::new();
    let document = Document::new("file:///empty.py", "");

    assert!(provider.provide_ranges(&document).is_empty());
    assert!(provider.fold_commands(&document).is_empty());
}

#[test]
fn test_fold_and_unfold_commands_cover_every_range() {
    let mut provider = FoldingProvider::new();
    let document = docstring_document("file:///module.py");

    let folds = provider.fold_commands(&document);
    let unfolds = provider.unfold_commands(&document);

    assert_eq!(folds.len(), 3);
    assert_eq!(unfolds.len(), 3);

    for (fold, unfold) in folds.iter().zip(&unfolds) {
        assert_eq!(fold.direction, FoldDirection::Fold);
        assert_eq!(unfold.direction, FoldDirection::Unfold);
        assert_eq!(fold.range, unfold.range);
    }

    assert_eq!(folds[0].range, FoldRange::new(0, 3));
}

#[test]
fn test_cache_prewarms_from_detection_results() {
    let document = docstring_document("file:///module.py");

    let mut cache: RangeCache = vec![("file:///module.py", document.fold_ranges())]
        .into_iter()
        .collect();

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("file:///module.py").map(|ranges| ranges.len()), Some(3));
    assert!(cache.get("file:///other.py").is_none());

    let evicted = cache.invalidate("file:///module.py");
    assert_eq!(evicted.map(|ranges| ranges[0]), Some(FoldRange::new(0, 3)));

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_listeners_observe_provider_activity() {
    let events = Rc::new(RefCell::new(Vec::new()));

    let mut provider = FoldingProvider::new();

    let sink = Rc::clone(&events);
    provider.add_listener(move |event: &Event| sink.borrow_mut().push(event.clone()));

    let document = Document::new("file:///w.py", "\"\"\"\ndoc\n\"\"\"\n");

    provider.document_opened(&document);
    provider.fold_commands(&document);
    provider.invalidate("file:///w.py");

    // Invalidating an unknown key is not an event.
    provider.invalidate("file:///other.py");

    let events = events.borrow();

    assert_eq!(
        *events,
        [
            Event::RangesDetected {
                key: "file:///w.py".to_string(),
                count: 1,
            },
            Event::FoldRequested {
                direction: FoldDirection::Fold,
                range: FoldRange::new(0, 1),
            },
            Event::CacheInvalidated {
                key: "file:///w.py".to_string(),
            },
        ]
    );
}
