extern crate feed_post_ui;

use feed_post_ui::comment_thread::{CommentThread, Submission};

fn thread_with(texts: &[&str]) -> CommentThread {
    let mut thread = CommentThread::new();
    for text in texts {
        thread.on_draft_change(*text);
        assert!(matches!(thread.submit(), Submission::Published(_)));
    }
    thread
}

#[test]
fn submit_hello() {
    feed_post_ui::init_logger();
    let mut thread = CommentThread::new();
    assert!(thread.comments().is_empty());

    thread.on_draft_change("hello");
    assert!(thread.can_submit());
    thread.submit();

    assert_eq!(thread.contents(), vec!["hello"]);
    assert_eq!(thread.draft(), "");
}

#[test]
fn delete_duplicates_by_content() {
    let mut thread = thread_with(&["a", "b", "a"]);
    thread.delete_comment("a");
    assert_eq!(thread.contents(), vec!["b"]);
}

#[test]
fn empty_draft_reports_disabled() {
    let mut thread = thread_with(&["x"]);

    thread.on_draft_change("");
    assert!(!thread.can_submit());
    assert_eq!(thread.submit(), Submission::Disabled);
    assert_eq!(thread.contents(), vec!["x"]);
    assert_eq!(thread.draft(), "");
}

#[test]
fn whitespace_draft_is_accepted_verbatim() {
    let mut thread = CommentThread::new();
    thread.on_draft_change("  ");
    thread.submit();

    assert_eq!(thread.contents(), vec!["  "]);
    assert_eq!(thread.draft(), "");
}

#[test]
fn delete_matches_filter_for_every_target() {
    let texts = ["a", "b", "a", "c", "b", "a", "d"];

    for target in ["a", "b", "c", "d", "e", ""] {
        let mut thread = thread_with(&texts);
        thread.delete_comment(target);

        let expected: Vec<&str> = texts.iter().copied().filter(|t| *t != target).collect();
        assert_eq!(thread.contents(), expected, "target {:?}", target);

        thread.delete_comment(target);
        assert_eq!(thread.contents(), expected, "second delete of {:?}", target);
    }
}

#[test]
fn draft_changes_do_not_touch_comments() {
    let mut thread = thread_with(&["kept"]);

    thread.on_draft_change("typing");
    thread.on_draft_change("typing more");
    thread.on_draft_change("");

    assert_eq!(thread.contents(), vec!["kept"]);
    assert_eq!(thread.draft(), "");
}
