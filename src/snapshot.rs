use crate::errors::ClientError;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::info;

pub fn resolve_snapshot_path() -> PathBuf {
    if let Ok(path) = env::var("CHAT_DASHBOARD_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/dashboard.html")
}

pub async fn write_snapshot(path: &Path, html: &str) -> Result<(), ClientError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, html).await?;
    info!("dashboard written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_snapshot_creates_parent_directories() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("chat_client_snapshot_{}_{}", std::process::id(), nanos));
        path.push("nested/dashboard.html");

        write_snapshot(&path, "<html></html>").await.unwrap();
        let written = fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "<html></html>");
    }
}
