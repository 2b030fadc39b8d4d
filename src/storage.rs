use crate::models::PageContext;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Loads the template-supplied context. A missing file yields an empty
/// context; an unreadable or unparsable one is logged and also yields an
/// empty context.
pub async fn load_context(path: &Path) -> PageContext {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(context) => context,
            Err(err) => {
                error!("failed to parse context file: {err}");
                PageContext::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => PageContext::default(),
        Err(err) => {
            error!("failed to read context file: {err}");
            PageContext::default()
        }
    }
}
