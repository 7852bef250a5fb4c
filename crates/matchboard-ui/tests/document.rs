use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use matchboard_ui::MOUNT_POINT_ID;

#[test]
fn index_html_carries_the_mount_point() -> Result<()> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("index.html");
    let html = fs::read_to_string(&path).context("index.html should be readable")?;

    let marker = format!("id=\"{MOUNT_POINT_ID}\"");
    assert!(
        html.contains(&marker),
        "index.html must keep the `#{MOUNT_POINT_ID}` mount point"
    );
    assert!(
        html.contains("data-trunk"),
        "index.html must keep the Trunk injection link"
    );
    Ok(())
}
