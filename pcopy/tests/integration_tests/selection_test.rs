// tests/integration_tests/selection_test.rs
use super::common::{list_names, setup_mixed_directory, setup_numbered_directory};
use anyhow::Result;
use pcopy::{CopyReport, CopyRequest, LocalFs, copy_percentage};
use std::fs;

#[test]
fn test_quarter_of_twenty_numbered_files() -> Result<()> {
    let source = setup_numbered_directory(20)?;
    let target = tempfile::tempdir()?;
    let request = CopyRequest::parse(source.path(), target.path(), "25", "jpg")?;

    let report = copy_percentage(&LocalFs, &request, |_| {})?;

    assert_eq!(report, CopyReport { total: 20, copied: 5 });
    assert_eq!(
        list_names(target.path())?,
        ["a1.jpg", "a2.jpg", "a3.jpg", "a4.jpg", "a5.jpg"],
        "Should copy the numerically smallest names"
    );
    Ok(())
}

#[test]
fn test_version_order_beats_byte_order() -> Result<()> {
    let source = setup_mixed_directory()?;
    let target = tempfile::tempdir()?;
    // png candidates: Shot.PNG, file1.png, file2.png, file10.png
    let request = CopyRequest::parse(source.path(), target.path(), "75", "png")?;

    let report = copy_percentage(&LocalFs, &request, |_| {})?;

    assert_eq!(report, CopyReport { total: 4, copied: 3 });
    assert_eq!(
        list_names(target.path())?,
        ["Shot.PNG", "file1.png", "file2.png"],
        "file2.png should be taken before file10.png"
    );
    Ok(())
}

#[test]
fn test_tiny_percentage_still_copies_one() -> Result<()> {
    let source = setup_numbered_directory(3)?;
    let target = tempfile::tempdir()?;
    let request = CopyRequest::parse(source.path(), target.path(), "1", "jpg")?;

    let report = copy_percentage(&LocalFs, &request, |_| {})?;

    assert_eq!(report.copied, 1);
    assert_eq!(list_names(target.path())?, ["a1.jpg"]);
    Ok(())
}

#[test]
fn test_missing_target_is_created_with_exact_subset() -> Result<()> {
    let source = setup_numbered_directory(10)?;
    let scratch = tempfile::tempdir()?;
    let target = scratch.path().join("nested/output");
    let request = CopyRequest::parse(source.path(), &target, "30", "jpg")?;

    let mut lines = Vec::new();
    copy_percentage(&LocalFs, &request, |s| lines.push(s.to_string()))?;

    assert!(target.is_dir());
    assert_eq!(list_names(&target)?, ["a1.jpg", "a2.jpg", "a3.jpg"]);
    assert_eq!(lines.len(), 3, "Create, found and done lines");
    assert!(lines.first().is_some_and(|l| l.contains("does not exist. Creating it")));
    Ok(())
}

#[test]
fn test_existing_files_are_overwritten() -> Result<()> {
    let source = setup_numbered_directory(2)?;
    let target = tempfile::tempdir()?;
    fs::write(target.path().join("a1.jpg"), "stale")?;
    fs::write(target.path().join("keep.txt"), "untouched")?;
    let request = CopyRequest::parse(source.path(), target.path(), "50", "jpg")?;

    copy_percentage(&LocalFs, &request, |_| {})?;

    assert_eq!(fs::read_to_string(target.path().join("a1.jpg"))?, "a1.jpg");
    assert_eq!(fs::read_to_string(target.path().join("keep.txt"))?, "untouched");
    Ok(())
}

#[test]
fn test_second_run_is_identical() -> Result<()> {
    let source = setup_numbered_directory(7)?;
    let target = tempfile::tempdir()?;
    let request = CopyRequest::parse(source.path(), target.path(), "40", "jpg")?;

    copy_percentage(&LocalFs, &request, |_| {})?;
    let first = list_names(target.path())?;
    let first_bytes = fs::read(target.path().join("a2.jpg"))?;
    copy_percentage(&LocalFs, &request, |_| {})?;

    assert_eq!(first, ["a1.jpg", "a2.jpg", "a3.jpg"]);
    assert_eq!(list_names(target.path())?, first);
    assert_eq!(fs::read(target.path().join("a2.jpg"))?, first_bytes);
    Ok(())
}
