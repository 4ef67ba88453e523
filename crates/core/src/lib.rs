pub mod bucket;
pub mod classifier;
pub mod copy;
pub mod domain;
pub mod features;
pub mod pipeline;
pub mod validate;

pub mod config {
    use anyhow::Context;
    use std::path::PathBuf;

    const DEFAULT_MODEL_PATH: &str = "model/model.json";
    const DEFAULT_STATIC_DIR: &str = "static";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub model_path: PathBuf,
        pub static_dir: PathBuf,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                model_path: non_empty_var("MODEL_PATH")
                    .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
                    .into(),
                static_dir: non_empty_var("STATIC_DIR")
                    .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                    .into(),
                sentry_dsn: non_empty_var("SENTRY_DSN"),
            })
        }

        pub fn require_static_dir(&self) -> anyhow::Result<&std::path::Path> {
            anyhow::ensure!(
                self.static_dir.is_dir(),
                "STATIC_DIR is not a directory: {}",
                self.static_dir.display()
            );
            Ok(&self.static_dir)
        }

        pub fn require_model_file(&self) -> anyhow::Result<&std::path::Path> {
            let meta = std::fs::metadata(&self.model_path)
                .with_context(|| format!("MODEL_PATH not readable: {}", self.model_path.display()))?;
            anyhow::ensure!(
                meta.is_file(),
                "MODEL_PATH is not a file: {}",
                self.model_path.display()
            );
            Ok(&self.model_path)
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}
