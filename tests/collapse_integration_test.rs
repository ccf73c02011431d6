use anyhow::Result;
use tempfile::TempDir;
use text_scrub::{collapse_text, run_job, FilterPipeline, JobSpec, LocalStorage, ScrubEngine, ScrubError, WhitespaceCollapser};

#[tokio::test]
async fn test_end_to_end_collapse_with_real_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("raw.txt");
    let output = temp_dir.path().join("clean.txt");
    std::fs::write(&input, "a   b\n\n  \nc\td\n")?;

    let job = JobSpec::collapse(
        "collapse",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
    );
    let summary = run_job(LocalStorage::working_dir(), job, false).await?;

    assert_eq!(std::fs::read_to_string(&output)?, "a b c d\n");
    assert_eq!(summary.output_path, output.to_str().unwrap());
    assert_eq!(summary.report.lines_read, 4);
    assert_eq!(summary.report.lines_written, 2);
    assert_eq!(summary.report.lines_skipped, 2);
    Ok(())
}

#[tokio::test]
async fn test_blank_input_creates_empty_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("blank.txt"), "\n\n\n")?;

    let pipeline = FilterPipeline::new(
        LocalStorage::new(temp_dir.path()),
        WhitespaceCollapser,
        JobSpec::collapse("blank", "blank.txt", "out.txt"),
    );
    let summary = ScrubEngine::new(pipeline).run().await?;

    let written = std::fs::read(temp_dir.path().join("out.txt"))?;
    assert!(written.is_empty());
    assert_eq!(summary.report.bytes_written, 0);
    Ok(())
}

#[tokio::test]
async fn test_rerunning_on_own_output_is_stable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path());
    std::fs::write(
        temp_dir.path().join("raw.txt"),
        "\t Lorem   ipsum \n\n dolor\tsit\t\tamet\n   \nconsectetur",
    )?;

    run_job(storage.clone(), JobSpec::collapse("first", "raw.txt", "once.txt"), false).await?;
    run_job(storage, JobSpec::collapse("second", "once.txt", "twice.txt"), false).await?;

    let once = std::fs::read_to_string(temp_dir.path().join("once.txt"))?;
    let twice = std::fs::read_to_string(temp_dir.path().join("twice.txt"))?;
    assert_eq!(once, "Lorem ipsum dolor sit amet consectetur\n");
    assert_eq!(once, twice);
    assert_eq!(collapse_text(&once), once);
    Ok(())
}

#[tokio::test]
async fn test_in_place_collapse_reads_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("notes.txt"), "x  y\n\nz\n")?;

    run_job(
        LocalStorage::new(temp_dir.path()),
        JobSpec::collapse("in-place", "notes.txt", "notes.txt"),
        false,
    )
    .await?;

    assert_eq!(std::fs::read_to_string(temp_dir.path().join("notes.txt"))?, "x y z\n");
    Ok(())
}

#[tokio::test]
async fn test_missing_source_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let err = run_job(
        LocalStorage::new(temp_dir.path()),
        JobSpec::collapse("missing", "nope.txt", "out.txt"),
        false,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ScrubError::SourceRead { ref path, .. } if path == "nope.txt"));
    assert!(!temp_dir.path().join("out.txt").exists());
    Ok(())
}

#[tokio::test]
async fn test_unwritable_destination_is_destination_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("in.txt"), "text\n")?;

    let err = run_job(
        LocalStorage::new(temp_dir.path()),
        JobSpec::collapse("no-dir", "in.txt", "missing-dir/out.txt"),
        false,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ScrubError::DestinationWrite { .. }));
    Ok(())
}
