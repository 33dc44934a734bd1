//! Integration tests for proviso evaluation against real filesystem objects.
//!
//! These cover the ordering rules of a check:
//! - Existence is decided before any predicate runs
//! - Absent objects are never handed to predicates
//! - The first failing predicate's message is reported unchanged
//! - The symlink policy decides which object is inspected

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::Fixture;
use provisos::check::{self, CheckError};
use provisos::{Error, Existence, FailureKind, Proviso};

fn counting_failure(calls: Arc<AtomicUsize>) -> impl provisos::MetadataCheck {
    move |_: &std::fs::Metadata| -> Result<(), CheckError> {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(CheckError::new("this predicate always fails"))
    }
}

// =============================================================================
// Existence
// =============================================================================

#[test]
fn test_missing_path_must_exist_fails_naming_path() {
    let fx = Fixture::new();
    let missing = fx.missing("nonesuch");

    let err = Proviso::new(Existence::MustExist)
        .check(&missing)
        .unwrap_err();

    assert_eq!(err.kind(), Some(FailureKind::MissingButRequired));
    assert!(err.to_string().contains(&missing.display().to_string()));
}

#[test]
fn test_missing_path_optional_or_forbidden_succeeds_without_predicates() {
    let fx = Fixture::new();
    let missing = fx.missing("nonesuch");
    let calls = Arc::new(AtomicUsize::new(0));

    for existence in [Existence::Optional, Existence::MustNotExist] {
        let proviso = Proviso::new(existence).with_check(counting_failure(calls.clone()));
        assert!(
            proviso.check(&missing).is_ok(),
            "{existence} should accept a missing path"
        );
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0, "no predicate may run");
}

#[test]
fn test_present_path_must_not_exist_fails_regardless_of_checks() {
    let fx = Fixture::new();
    let file = fx.file("present", "x");
    let calls = Arc::new(AtomicUsize::new(0));

    let proviso = Proviso::new(Existence::MustNotExist)
        .with_check(check::is_regular())
        .with_check(counting_failure(calls.clone()));
    let err = proviso.check(&file).unwrap_err();

    assert_eq!(err.kind(), Some(FailureKind::PresentButForbidden));
    assert!(err.to_string().contains(&file.display().to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_existing_path_optional_and_must_exist_succeed() {
    let fx = Fixture::new();
    let file = fx.file("present", "x");

    assert!(Proviso::new(Existence::Optional).check(&file).is_ok());
    assert!(Proviso::new(Existence::MustExist).check(&file).is_ok());
}

#[cfg(unix)]
#[test]
fn test_lookup_error_is_retrieval_error() {
    let fx = Fixture::new();
    let file = fx.file("not-a-dir", "x");
    let beneath = file.join("child");

    for existence in [
        Existence::Optional,
        Existence::MustExist,
        Existence::MustNotExist,
    ] {
        let err = Proviso::new(existence).check(&beneath).unwrap_err();
        assert!(err.is_retrieval_error(), "{existence}: {err}");
        assert!(err.to_string().contains("child"));
        match err {
            Error::Retrieval { path, .. } => assert_eq!(path, beneath),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[cfg(unix)]
#[test]
fn test_forbidden_path_with_failed_lookup_is_not_reported_present() {
    let fx = Fixture::new();
    let file = fx.file("plain", "x");
    let beneath = file.join("child");

    for proviso in [Proviso::is_new(), Proviso::is_new().dont_follow_symlinks()] {
        let err = proviso.check(&beneath).unwrap_err();
        assert!(err.is_retrieval_error());
        assert!(!err.is_present_but_forbidden());
        assert_eq!(err.kind(), Some(FailureKind::RetrievalError));
    }
}

// =============================================================================
// Predicate pipeline
// =============================================================================

#[test]
fn test_empty_file_reports_size_predicate_error() {
    let fx = Fixture::new();
    let empty = fx.file("empty", "");

    let err = Proviso::new(Existence::MustExist)
        .with_check(check::is_regular())
        .with_check(check::size_gt(0))
        .check(&empty)
        .unwrap_err();

    let expected = check::size_gt(0);
    let direct = provisos::MetadataCheck::check(&expected, &std::fs::metadata(&empty).unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), direct.to_string());
    assert_eq!(err.kind(), Some(FailureKind::CheckFailed));
}

#[test]
fn test_non_empty_file_passes() {
    let fx = Fixture::new();
    let file = fx.file("data", "some bytes");

    assert!(Proviso::file_non_empty().check(&file).is_ok());
}

#[test]
fn test_directory_against_regular_file_check_is_type_mismatch() {
    let fx = Fixture::new();
    let dir = fx.dir("a-dir");

    let err = Proviso::file_exists().check(&dir).unwrap_err();

    assert!(err.is_check_failure());
    assert!(!err.is_missing_but_required());
    assert_eq!(
        err.to_string(),
        "should be a regular file but is a directory"
    );
}

#[test]
fn test_predicates_stop_at_first_failure() {
    let fx = Fixture::new();
    let dir = fx.dir("a-dir");
    let calls = Arc::new(AtomicUsize::new(0));

    let proviso = Proviso::new(Existence::MustExist)
        .with_check(check::is_dir())
        .with_check(counting_failure(calls.clone()))
        .with_check(counting_failure(calls.clone()));
    let err = proviso.check(&dir).unwrap_err();

    assert_eq!(err.to_string(), "this predicate always fails");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[cfg(unix)]
#[test]
fn test_permission_bits_equal() {
    let fx = Fixture::new();
    let private = fx.file_with_mode("private", 0o600);
    let shared = fx.file_with_mode("shared", 0o644);
    let proviso = Proviso::new(Existence::MustExist).with_check(check::perm_eq(0o600));

    assert!(proviso.check(&private).is_ok());

    let err = proviso.check(&shared).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("0600"), "names required mode: {message}");
    assert!(message.contains("0644"), "names actual mode: {message}");
}

// =============================================================================
// Symlink policy
// =============================================================================

#[cfg(unix)]
#[test]
fn test_dangling_symlink_depends_on_policy() {
    let fx = Fixture::new();
    let link = fx.symlink("dangling", &fx.missing("target"));

    let following = Proviso::new(Existence::MustExist);
    let err = following.check(&link).unwrap_err();
    assert!(err.is_missing_but_required());

    let not_following = Proviso::new(Existence::MustExist).dont_follow_symlinks();
    assert!(not_following.check(&link).is_ok());
}

#[cfg(unix)]
#[test]
fn test_symlink_to_file_follow_sees_target() {
    let fx = Fixture::new();
    let target = fx.file("target", "x");
    let link = fx.symlink("link", &target);

    assert!(Proviso::file_exists().check(&link).is_ok());

    let err = Proviso::file_exists()
        .dont_follow_symlinks()
        .check(&link)
        .unwrap_err();
    assert!(err.to_string().contains("symbolic link"));

    let link_itself = Proviso::new(Existence::MustExist)
        .dont_follow_symlinks()
        .with_check(check::is_symlink());
    assert!(link_itself.check(&link).is_ok());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_new_depends_on_policy() {
    let fx = Fixture::new();
    let link = fx.symlink("dangling", &fx.missing("target"));

    assert!(Proviso::is_new().check(&link).is_ok());
    assert!(Proviso::is_new()
        .dont_follow_symlinks()
        .check(&link)
        .unwrap_err()
        .is_present_but_forbidden());
}

// =============================================================================
// Presets
// =============================================================================

#[test]
fn test_presets_against_fixture_tree() {
    let fx = Fixture::new();
    let dir = fx.dir("dir");
    let empty = fx.file("empty", "");
    let full = fx.file("full", "x");
    let missing = fx.missing("missing");

    assert!(Proviso::dir_exists().check(&dir).is_ok());
    assert!(Proviso::dir_exists().check(&full).is_err());
    assert!(Proviso::file_exists().check(&empty).is_ok());
    assert!(Proviso::file_non_empty().check(&empty).is_err());
    assert!(Proviso::file_non_empty().check(&full).is_ok());
    assert!(Proviso::is_new().check(&missing).is_ok());
    assert!(Proviso::is_new().check(&dir).is_err());
}

#[test]
fn test_describe_does_not_touch_filesystem() {
    // Describing a proviso gives the same text whatever exists on disk.
    let with_checks = Proviso::new(Existence::MustExist).with_check(check::is_dir());
    assert_eq!(
        with_checks.describe(),
        "the filesystem object must exist and must satisfy further checks"
    );
    assert_eq!(
        Proviso::is_new().with_check(check::is_dir()).describe(),
        "the filesystem object must not exist"
    );
}
