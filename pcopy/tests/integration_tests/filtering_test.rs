// tests/integration_tests/filtering_test.rs
use super::common::{list_names, setup_mixed_directory};
use anyhow::Result;
use pcopy::{ExtensionSelector, LocalFs, collect_candidates};

fn candidate_names(selector: &str) -> Result<Vec<String>> {
    let temp_dir = setup_mixed_directory()?;
    let selector = ExtensionSelector::parse(selector)?;
    let candidates = collect_candidates(&LocalFs, temp_dir.path(), &selector)?;
    Ok(candidates.into_iter().map(|c| c.name).collect())
}

#[test]
fn test_extension_ignores_case() -> Result<()> {
    assert_eq!(
        candidate_names("png")?,
        ["Shot.PNG", "file1.png", "file2.png", "file10.png"]
    );
    assert_eq!(candidate_names("CSV")?, ["data.csv"]);
    Ok(())
}

#[test]
fn test_wildcard_takes_all_regular_files() -> Result<()> {
    let names = candidate_names("*")?;

    assert_eq!(
        names,
        [
            "LICENSE",
            "Shot.PNG",
            "data.csv",
            "file1.png",
            "file2.png",
            "file10.png",
            "readme.md"
        ]
    );
    assert!(!names.iter().any(|n| n == "folder.png" || n == "sub"));
    Ok(())
}

#[test]
fn test_nested_files_are_never_candidates() -> Result<()> {
    let temp_dir = setup_mixed_directory()?;
    assert!(list_names(&temp_dir.path().join("sub"))?.contains(&String::from("deep.png")));

    assert!(!candidate_names("png")?.iter().any(|n| n == "deep.png"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_candidates() -> Result<()> {
    let temp_dir = setup_mixed_directory()?;
    std::os::unix::fs::symlink(
        temp_dir.path().join("file1.png"),
        temp_dir.path().join("alias.png"),
    )?;
    let selector = ExtensionSelector::parse("png")?;

    let candidates = collect_candidates(&LocalFs, temp_dir.path(), &selector)?;

    assert!(!candidates.iter().any(|c| c.name == "alias.png"));
    assert_eq!(candidates.len(), 4);
    Ok(())
}
