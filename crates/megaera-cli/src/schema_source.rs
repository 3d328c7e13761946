use anyhow::Context;
use megaera::Schema;
use megaera::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;

const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Where the schema SDL is loaded from.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SchemaSource {
    File(PathBuf),
    Url(String),
}
impl SchemaSource {
    pub(crate) fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(expand_home_dir(arg))
        }
    }

    pub(crate) async fn load(&self) -> anyhow::Result<Schema> {
        let builder = match self {
            Self::File(path) => SchemaBuilder::from_file(path)?,
            Self::Url(url) => {
                let sdl = fetch(url).await?;
                SchemaBuilder::from_str(Some(Path::new(url.as_str())), sdl)?
            },
        };
        builder.build().with_context(|| format!("Failed to build the schema from {self}"))
    }
}
impl std::fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "`{}`", path.display()),
            Self::Url(url) => write!(f, "`{url}`"),
        }
    }
}

async fn fetch(url: &str) -> anyhow::Result<String> {
    let mut request = reqwest::Client::new().get(url);
    let token = std::env::var(GITHUB_TOKEN_ENV_VAR).ok()
        .filter(|token| !token.trim().is_empty());
    let using = match token {
        Some(token) => {
            request = request.bearer_auth(token.trim());
            format!(" using ${GITHUB_TOKEN_ENV_VAR}")
        },
        None => String::new(),
    };

    log::info!("Fetching schema from {url}{using}.");
    let response = request.send().await
        .with_context(|| format!("Failed to fetch the schema from `{url}`"))?
        .error_for_status()?;
    Ok(response.text().await?)
}

/// Replace a leading `~` with the current user's home directory.
pub(crate) fn expand_home_dir(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home_dir)) =>
            home_dir.join(rest.trim_start_matches(std::path::MAIN_SEPARATOR)),
        _ => PathBuf::from(path),
    }
}
